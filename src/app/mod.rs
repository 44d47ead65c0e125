// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together the session, the catalog snapshot,
//! the screen components, and the notification manager, and translates
//! messages into side effects (API calls, debounce timers, navigation).
//! Policy decisions — who owns the identity, when the catalog refetches,
//! how failures surface — live here and in [`update`], close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{FetchOrigin, Flags, Message};
pub use screen::{resolve, Screen};

use crate::api::Client;
use crate::catalog::Catalog;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::catalog_screen;
use crate::ui::login;
use crate::ui::notifications;
use crate::ui::register;
use crate::ui::sweet_form;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state that bridges the session, the catalog,
/// and the screen components.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    session: Session,
    catalog: Catalog,
    api: Client,
    login: login::State,
    register: register::State,
    sweet_form: sweet_form::State,
    catalog_screen: catalog_screen::State,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("session", self.session.state())
            .field("sweets", &self.catalog.sweets().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Login,
            session: Session::new(),
            catalog: Catalog::new(),
            api: Client::new(config.base_url(), Duration::from_secs(config.timeout_secs()))
                .expect("HTTP client initialization failed"),
            login: login::State::new(),
            register: register::State::new(),
            sweet_form: sweet_form::State::new(),
            catalog_screen: catalog_screen::State::new(),
            theme_mode: ThemeMode::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the one-time session
    /// probe. The probe must resolve before any guarded screen renders.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load(flags.config_dir.as_deref());
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let base_url = flags.server.as_deref().unwrap_or_else(|| config.base_url());
        let api = Client::new(base_url, Duration::from_secs(config.timeout_secs()))
            .expect("HTTP client initialization failed");

        let mut app = App {
            i18n,
            api,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let probe_api = app.api.clone();
        let probe = Task::perform(
            async move { probe_api.me().await },
            Message::SessionProbed,
        );

        (app, probe)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            session: &mut self.session,
            catalog: &mut self.catalog,
            api: &self.api,
            login: &mut self.login,
            register: &mut self.register,
            sweet_form: &mut self.sweet_form,
            catalog_screen: &mut self.catalog_screen,
            notifications: &mut self.notifications,
        };

        match message {
            Message::SessionProbed(result) => update::handle_session_probed(&mut ctx, result),
            Message::Navigate(target) => update::navigate(&mut ctx, target),
            Message::Login(login_message) => update::handle_login_message(&mut ctx, login_message),
            Message::LoginCompleted(result) => update::handle_login_completed(&mut ctx, result),
            Message::Register(register_message) => {
                update::handle_register_message(&mut ctx, register_message)
            }
            Message::RegisterCompleted(result) => {
                update::handle_register_completed(&mut ctx, result)
            }
            Message::LogoutCompleted(result) => update::handle_logout_completed(result),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::CatalogScreen(catalog_message) => {
                update::handle_catalog_screen_message(&mut ctx, catalog_message)
            }
            Message::SearchDebounceElapsed(generation) => {
                update::handle_search_debounce_elapsed(&mut ctx, generation)
            }
            Message::SweetsFetched {
                sequence,
                origin,
                result,
            } => update::handle_sweets_fetched(&mut ctx, sequence, origin, result),
            Message::PurchaseCompleted { name, result } => {
                update::handle_purchase_completed(&mut ctx, name, result)
            }
            Message::SweetForm(form_message) => {
                update::handle_sweet_form_message(&mut ctx, form_message)
            }
            Message::CreateCompleted(result) => update::handle_create_completed(&mut ctx, result),
            Message::CreateRedirectElapsed => update::handle_create_redirect_elapsed(&mut ctx),
            Message::UpdateCompleted(result) => update::handle_update_completed(&mut ctx, result),
            Message::DeleteConfirmed {
                id,
                name,
                confirmed,
            } => update::handle_delete_confirmed(&mut ctx, id, name, confirmed),
            Message::DeleteCompleted { name, result } => {
                update::handle_delete_completed(&mut ctx, name, result)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            session: &self.session,
            catalog: &self.catalog,
            login: &self.login,
            register: &self.register,
            sweet_form: &self.sweet_form,
            catalog_screen: &self.catalog_screen,
            notifications: &self.notifications,
        })
    }
}
