// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state. While the session probe is
//! pending, nothing but a neutral loading indicator is rendered; the
//! toast overlay is stacked on top of whatever screen is showing.

use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::catalog_screen::{self, ViewContext as CatalogViewContext};
use crate::ui::design_tokens::typography;
use crate::ui::login::State as LoginState;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager as NotificationManager, Toast};
use crate::ui::register::State as RegisterState;
use crate::ui::sweet_form::State as SweetFormState;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub session: &'a Session,
    pub catalog: &'a Catalog,
    pub login: &'a LoginState,
    pub register: &'a RegisterState,
    pub sweet_form: &'a SweetFormState,
    pub catalog_screen: &'a catalog_screen::State,
    pub notifications: &'a NotificationManager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // Route-guarded content must not flash while the probe is pending.
    if ctx.session.is_loading() {
        return view_loading(ctx.i18n);
    }

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => ctx.login.view(ctx.i18n).map(Message::Login),
        Screen::Register => ctx.register.view(ctx.i18n).map(Message::Register),
        Screen::Catalog => ctx
            .catalog_screen
            .view(CatalogViewContext {
                i18n: ctx.i18n,
                catalog: ctx.catalog,
                is_admin: ctx.session.is_admin(),
            })
            .map(Message::CatalogScreen),
        Screen::AddSweet => ctx.sweet_form.view(ctx.i18n).map(Message::SweetForm),
    };

    let content: Element<'_, Message> = match ctx.session.identity() {
        Some(identity) => {
            let navbar_view = navbar::view(NavbarViewContext {
                i18n: ctx.i18n,
                identity,
            })
            .map(Message::Navbar);

            Column::new()
                .push(navbar_view)
                .push(
                    Container::new(current_view)
                        .width(Length::Fill)
                        .height(Length::Fill),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => current_view,
    };

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    iced::widget::stack([content, toast_overlay]).into()
}

fn view_loading(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("loading-session")).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
