// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::models::{Identity, Sweet};
use crate::error::ApiError;
use crate::ui::catalog_screen;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::register;
use crate::ui::sweet_form;
use std::time::Instant;

use super::Screen;

/// Which request a catalog snapshot came from. Decides the fallback
/// error message when the fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    List,
    Search,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the startup session probe.
    SessionProbed(Result<Identity, ApiError>),
    /// A navigation request, routed through the guard.
    Navigate(Screen),
    Login(login::Message),
    LoginCompleted(Result<Identity, ApiError>),
    Register(register::Message),
    RegisterCompleted(Result<Identity, ApiError>),
    /// Outcome of the logout request. The session was already cleared
    /// when the request was issued.
    LogoutCompleted(Result<(), ApiError>),
    Navbar(navbar::Message),
    CatalogScreen(catalog_screen::Message),
    /// The debounce delay for a search generation elapsed.
    SearchDebounceElapsed(u64),
    /// A catalog fetch finished. `sequence` tags the request it answers;
    /// stale sequences are discarded.
    SweetsFetched {
        sequence: u64,
        origin: FetchOrigin,
        result: Result<Vec<Sweet>, ApiError>,
    },
    PurchaseCompleted {
        name: String,
        result: Result<Sweet, ApiError>,
    },
    SweetForm(sweet_form::Message),
    CreateCompleted(Result<Sweet, ApiError>),
    /// The post-create pause is over; navigate back to the catalog.
    CreateRedirectElapsed,
    UpdateCompleted(Result<Sweet, ApiError>),
    /// The user answered the delete confirmation dialog.
    DeleteConfirmed {
        id: String,
        name: String,
        confirmed: bool,
    },
    DeleteCompleted {
        name: String,
        result: Result<(), ApiError>,
    },
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL override (takes precedence over config).
    pub server: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `SWEETSTALL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
