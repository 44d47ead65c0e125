// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains all specialized message handlers dispatched by
//! `App::update`. Handlers mutate state through [`UpdateContext`] and
//! return the follow-up [`Task`]s (network calls, debounce timers, the
//! delete confirmation dialog).

use super::{screen, FetchOrigin, Message, Screen};
use crate::api::models::{Identity, Sweet};
use crate::api::Client;
use crate::catalog::{self, Catalog, FetchKind};
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::catalog_screen::{self, Event as CatalogScreenEvent};
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::register::{self, Event as RegisterEvent};
use crate::ui::sweet_form::{self, Event as SweetFormEvent};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub session: &'a mut Session,
    pub catalog: &'a mut Catalog,
    pub api: &'a Client,
    pub login: &'a mut login::State,
    pub register: &'a mut register::State,
    pub sweet_form: &'a mut sweet_form::State,
    pub catalog_screen: &'a mut catalog_screen::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Builds the error toast for a failed API call: the server's own
/// message verbatim when it sent one, the generic fallback otherwise.
fn api_error_notification(err: &ApiError, fallback_key: &str) -> Notification {
    match err.server_message() {
        Some(message) => Notification::text(Severity::Error, message),
        None => Notification::error(fallback_key),
    }
}

/// Routes a navigation request through the guard and runs the entry
/// effects of the destination: arriving at the catalog always refetches
/// (the snapshot may be stale), arriving at the add form starts blank.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let destination = screen::resolve(target, ctx.session);
    *ctx.screen = destination;
    match destination {
        Screen::Catalog => {
            let (sequence, kind) = ctx.catalog.begin_fetch();
            fetch_task(ctx.api.clone(), sequence, kind)
        }
        Screen::AddSweet => {
            ctx.sweet_form.reset();
            Task::none()
        }
        Screen::Login | Screen::Register => Task::none(),
    }
}

/// Spawns the catalog fetch for an issued sequence.
fn fetch_task(api: Client, sequence: u64, kind: FetchKind) -> Task<Message> {
    let origin = match &kind {
        FetchKind::ListAll => FetchOrigin::List,
        FetchKind::Search(_) => FetchOrigin::Search,
    };
    Task::perform(
        async move {
            match kind {
                FetchKind::ListAll => api.list_sweets().await,
                FetchKind::Search(query) => api.search_sweets(&query).await,
            }
        },
        move |result| Message::SweetsFetched {
            sequence,
            origin,
            result,
        },
    )
}

/// Spawns the full-catalog refetch that follows every successful
/// mutation.
fn refresh_task(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let sequence = ctx.catalog.begin_refresh();
    fetch_task(ctx.api.clone(), sequence, FetchKind::ListAll)
}

// ----------------------------------------------------------------------
// Session
// ----------------------------------------------------------------------

pub fn handle_session_probed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Identity, ApiError>,
) -> Task<Message> {
    if let Err(err) = &result {
        // Expected signal for "no session"; worth a trace, not a toast.
        tracing::debug!(%err, "session probe resolved to unauthenticated");
    }
    ctx.session.resolve_probe(result);
    if ctx.session.is_authenticated() {
        navigate(ctx, Screen::Catalog)
    } else {
        navigate(ctx, Screen::Login)
    }
}

pub fn handle_login_message(
    ctx: &mut UpdateContext<'_>,
    message: login::Message,
) -> Task<Message> {
    match ctx.login.update(message) {
        LoginEvent::None => Task::none(),
        LoginEvent::SwitchToRegister => navigate(ctx, Screen::Register),
        LoginEvent::Submit(credentials) => {
            ctx.login.set_submitting(true);
            let api = ctx.api.clone();
            Task::perform(
                async move { api.login(&credentials).await },
                Message::LoginCompleted,
            )
        }
    }
}

pub fn handle_login_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Identity, ApiError>,
) -> Task<Message> {
    ctx.login.set_submitting(false);
    match result {
        Ok(identity) => {
            ctx.login.reset();
            ctx.session.establish(identity);
            navigate(ctx, Screen::Catalog)
        }
        Err(err) => {
            tracing::warn!(%err, "login failed");
            ctx.notifications
                .push(api_error_notification(&err, "notification-login-error"));
            Task::none()
        }
    }
}

pub fn handle_register_message(
    ctx: &mut UpdateContext<'_>,
    message: register::Message,
) -> Task<Message> {
    match ctx.register.update(message) {
        RegisterEvent::None => Task::none(),
        RegisterEvent::SwitchToLogin => navigate(ctx, Screen::Login),
        RegisterEvent::Submit(credentials) => {
            ctx.register.set_submitting(true);
            let api = ctx.api.clone();
            Task::perform(
                async move { api.register(&credentials).await },
                Message::RegisterCompleted,
            )
        }
    }
}

pub fn handle_register_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Identity, ApiError>,
) -> Task<Message> {
    ctx.register.set_submitting(false);
    match result {
        Ok(identity) => {
            // Registration is auto-login: the response body is the identity.
            ctx.register.reset();
            ctx.session.establish(identity);
            navigate(ctx, Screen::Catalog)
        }
        Err(err) => {
            tracing::warn!(%err, "registration failed");
            ctx.notifications
                .push(api_error_notification(&err, "notification-register-error"));
            Task::none()
        }
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Navigate(target) => navigate(ctx, target),
        NavbarEvent::Logout => {
            // Fail-open-to-logged-out: the local session is gone before
            // the request leaves, whatever the server says later.
            ctx.session.clear();
            *ctx.catalog = Catalog::new();
            ctx.catalog_screen.close_edit();
            ctx.login.reset();
            let api = ctx.api.clone();
            let logout = Task::perform(
                async move { api.logout().await },
                Message::LogoutCompleted,
            );
            Task::batch([logout, navigate(ctx, Screen::Login)])
        }
    }
}

pub fn handle_logout_completed(result: Result<(), ApiError>) -> Task<Message> {
    // The session was already cleared locally; a failed request is
    // logged and otherwise swallowed.
    if let Err(err) = result {
        tracing::warn!(%err, "logout request failed; local session already cleared");
    }
    Task::none()
}

// ----------------------------------------------------------------------
// Catalog
// ----------------------------------------------------------------------

pub fn handle_catalog_screen_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog_screen::Message,
) -> Task<Message> {
    match ctx.catalog_screen.update(message) {
        CatalogScreenEvent::None => Task::none(),
        CatalogScreenEvent::QueryChanged(query) => {
            let generation = ctx.catalog.set_query(query);
            Task::perform(tokio::time::sleep(catalog::SEARCH_DEBOUNCE), move |()| {
                Message::SearchDebounceElapsed(generation)
            })
        }
        CatalogScreenEvent::Purchase { id, name } => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.purchase_sweet(&id).await },
                move |result| Message::PurchaseCompleted {
                    name: name.clone(),
                    result,
                },
            )
        }
        CatalogScreenEvent::SaveEdit { id, fields } => match catalog::validate(&fields) {
            Err(_) => {
                ctx.notifications
                    .push(Notification::error("notification-form-invalid"));
                Task::none()
            }
            Ok(payload) => {
                ctx.catalog_screen.set_edit_submitting(true);
                let api = ctx.api.clone();
                Task::perform(
                    async move { api.update_sweet(&id, &payload).await },
                    Message::UpdateCompleted,
                )
            }
        },
        CatalogScreenEvent::ConfirmDelete { id, name } => confirm_delete_task(ctx.i18n, id, name),
    }
}

/// Shows the blocking yes/no prompt naming the item. Only a "Yes"
/// answer lets the delete request proceed.
fn confirm_delete_task(i18n: &I18n, id: String, name: String) -> Task<Message> {
    let title = i18n.tr("confirm-delete-title");
    let description = i18n.tr_with_args("confirm-delete-message", &[("name", name.as_str())]);
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title(title.as_str())
                .set_description(description.as_str())
                .set_buttons(rfd::MessageButtons::YesNo)
                .show()
                .await
        },
        move |answer| Message::DeleteConfirmed {
            id: id.clone(),
            name: name.clone(),
            confirmed: matches!(answer, rfd::MessageDialogResult::Yes),
        },
    )
}

pub fn handle_search_debounce_elapsed(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
) -> Task<Message> {
    match ctx.catalog.debounce_elapsed(generation) {
        Some((sequence, kind)) => fetch_task(ctx.api.clone(), sequence, kind),
        // Superseded by further keystrokes.
        None => Task::none(),
    }
}

pub fn handle_sweets_fetched(
    ctx: &mut UpdateContext<'_>,
    sequence: u64,
    origin: FetchOrigin,
    result: Result<Vec<Sweet>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(sweets) => {
            if !ctx.catalog.apply_fetch(sequence, sweets) {
                tracing::debug!(sequence, "discarded stale catalog snapshot");
            }
        }
        Err(err) => {
            tracing::warn!(%err, sequence, "catalog fetch failed");
            // A stale request failing is not worth a toast; the newer
            // one will report for itself.
            if ctx.catalog.is_current(sequence) {
                let fallback = match origin {
                    FetchOrigin::List => "notification-fetch-error",
                    FetchOrigin::Search => "notification-search-error",
                };
                ctx.notifications.push(api_error_notification(&err, fallback));
            }
        }
    }
    Task::none()
}

pub fn handle_purchase_completed(
    ctx: &mut UpdateContext<'_>,
    name: String,
    result: Result<Sweet, ApiError>,
) -> Task<Message> {
    match result {
        Ok(_) => {
            ctx.notifications.push(
                Notification::success("notification-purchase-success").with_arg("name", name),
            );
            refresh_task(ctx)
        }
        Err(err) => {
            tracing::warn!(%err, "purchase failed");
            // No speculative decrement: the snapshot stays as it was.
            ctx.notifications
                .push(api_error_notification(&err, "notification-purchase-error"));
            Task::none()
        }
    }
}

// ----------------------------------------------------------------------
// Admin mutations
// ----------------------------------------------------------------------

pub fn handle_sweet_form_message(
    ctx: &mut UpdateContext<'_>,
    message: sweet_form::Message,
) -> Task<Message> {
    match ctx.sweet_form.update(message) {
        SweetFormEvent::None => Task::none(),
        SweetFormEvent::Submit => match catalog::validate(ctx.sweet_form.fields()) {
            Err(_) => {
                // Short-circuits locally: no network call is made.
                ctx.notifications
                    .push(Notification::error("notification-form-invalid"));
                Task::none()
            }
            Ok(payload) => {
                ctx.sweet_form.set_submitting(true);
                let api = ctx.api.clone();
                Task::perform(
                    async move { api.create_sweet(&payload).await },
                    Message::CreateCompleted,
                )
            }
        },
    }
}

pub fn handle_create_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Sweet, ApiError>,
) -> Task<Message> {
    match result {
        Ok(_) => {
            ctx.sweet_form.reset();
            ctx.notifications
                .push(Notification::success("notification-create-success"));
            // Let the confirmation sink in before leaving the form.
            Task::perform(tokio::time::sleep(catalog::CREATE_REDIRECT_DELAY), |()| {
                Message::CreateRedirectElapsed
            })
        }
        Err(err) => {
            tracing::warn!(%err, "create failed");
            ctx.sweet_form.set_submitting(false);
            ctx.notifications
                .push(api_error_notification(&err, "notification-create-error"));
            Task::none()
        }
    }
}

pub fn handle_create_redirect_elapsed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    navigate(ctx, Screen::Catalog)
}

pub fn handle_update_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Sweet, ApiError>,
) -> Task<Message> {
    match result {
        Ok(_) => {
            ctx.catalog_screen.close_edit();
            ctx.notifications
                .push(Notification::success("notification-update-success"));
            refresh_task(ctx)
        }
        Err(err) => {
            tracing::warn!(%err, "update failed");
            // The dialog stays open for correction.
            ctx.catalog_screen.set_edit_submitting(false);
            ctx.notifications
                .push(api_error_notification(&err, "notification-update-error"));
            Task::none()
        }
    }
}

pub fn handle_delete_confirmed(
    ctx: &mut UpdateContext<'_>,
    id: String,
    name: String,
    confirmed: bool,
) -> Task<Message> {
    if !confirmed {
        return Task::none();
    }
    let api = ctx.api.clone();
    Task::perform(async move { api.delete_sweet(&id).await }, move |result| {
        Message::DeleteCompleted {
            name: name.clone(),
            result,
        }
    })
}

pub fn handle_delete_completed(
    ctx: &mut UpdateContext<'_>,
    name: String,
    result: Result<(), ApiError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.notifications.push(
                Notification::success("notification-delete-success").with_arg("name", name),
            );
            refresh_task(ctx)
        }
        Err(err) => {
            tracing::warn!(%err, "delete failed");
            ctx.notifications
                .push(api_error_notification(&err, "notification-delete-error"));
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_surfaced_verbatim() {
        let err = ApiError::Status {
            code: 401,
            message: Some("Invalid credentials".to_string()),
        };
        let notification = api_error_notification(&err, "notification-login-error");
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notification.content(),
            &notifications::Content::Text("Invalid credentials".to_string())
        );
    }

    #[test]
    fn missing_server_message_falls_back_to_key() {
        let err = ApiError::Transport("connection refused".to_string());
        let notification = api_error_notification(&err, "notification-login-error");
        match notification.content() {
            notifications::Content::Key { key, .. } => {
                assert_eq!(key, "notification-login-error");
            }
            notifications::Content::Text(_) => panic!("expected keyed fallback"),
        }
    }
}
