// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Shown only while a session exists: brand, catalog and admin links on
//! the left, the signed-in user (with an admin badge where it applies)
//! and the logout button on the right.

use crate::api::models::Identity;
use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub identity: &'a Identity,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    BrowseSweets,
    AddSweet,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
    Logout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::BrowseSweets => Event::Navigate(Screen::Catalog),
        Message::AddSweet => Event::Navigate(Screen::AddSweet),
        Message::Logout => Event::Logout,
    }
}

/// Renders the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand"))
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let browse = button(Text::new(ctx.i18n.tr("navbar-browse")).size(typography::BODY))
        .on_press(Message::BrowseSweets)
        .style(button::text);

    let mut left = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand)
        .push(browse);

    if ctx.identity.is_admin() {
        left = left.push(
            button(Text::new(ctx.i18n.tr("navbar-add")).size(typography::BODY))
                .on_press(Message::AddSweet)
                .style(button::text),
        );
    }

    let welcome = Text::new(
        ctx.i18n
            .tr_with_args("navbar-welcome", &[("name", ctx.identity.name.as_str())]),
    )
    .size(typography::BODY);

    let mut right = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(welcome);

    if ctx.identity.is_admin() {
        right = right.push(
            Container::new(
                Text::new(ctx.i18n.tr("navbar-admin-badge")).size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(admin_badge_style),
        );
    }

    right = right.push(
        button(Text::new(ctx.i18n.tr("navbar-logout")).size(typography::BODY))
            .on_press(Message::Logout)
            .style(button::primary),
    );

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(left)
        .push(iced::widget::Space::new().width(Length::Fill).height(Length::Shrink))
        .push(right);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        })
        .into()
}

/// Pill-shaped badge marking admin accounts.
fn admin_badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::PRIMARY_200)),
        text_color: Some(palette::PRIMARY_700),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_message_navigates_to_catalog() {
        assert!(matches!(
            update(Message::BrowseSweets),
            Event::Navigate(Screen::Catalog)
        ));
    }

    #[test]
    fn add_message_navigates_to_admin_form() {
        assert!(matches!(
            update(Message::AddSweet),
            Event::Navigate(Screen::AddSweet)
        ));
    }

    #[test]
    fn logout_message_emits_logout_event() {
        assert!(matches!(update(Message::Logout), Event::Logout));
    }
}
