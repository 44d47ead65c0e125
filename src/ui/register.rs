// SPDX-License-Identifier: MPL-2.0
//! Registration screen component.
//!
//! Mirrors the sign-in form with an extra name field. A successful
//! registration is an auto-login: the parent establishes the session
//! straight from the response, with no separate confirmation step.

use crate::api::models::RegisterCredentials;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Text},
    Element, Length,
};

#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    password: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    SubmitPressed,
    SwitchToLogin,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(RegisterCredentials),
    SwitchToLogin,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn can_submit(&self) -> bool {
        !self.submitting
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::SubmitPressed => {
                if !self.can_submit() {
                    return Event::None;
                }
                Event::Submit(RegisterCredentials {
                    name: self.name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                    // The server assigns the default role.
                    role: None,
                })
            }
            Message::SwitchToLogin => Event::SwitchToLogin,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("register-title")).size(typography::TITLE_LG);

        let name = text_input(&i18n.tr("register-name-placeholder"), &self.name)
            .on_input_maybe((!self.submitting).then_some(Message::NameChanged))
            .on_submit(Message::SubmitPressed)
            .padding(spacing::SM);

        let email = text_input(&i18n.tr("register-email-placeholder"), &self.email)
            .on_input_maybe((!self.submitting).then_some(Message::EmailChanged))
            .on_submit(Message::SubmitPressed)
            .padding(spacing::SM);

        let password = text_input(&i18n.tr("register-password-placeholder"), &self.password)
            .secure(true)
            .on_input_maybe((!self.submitting).then_some(Message::PasswordChanged))
            .on_submit(Message::SubmitPressed)
            .padding(spacing::SM);

        let submit_label = if self.submitting {
            i18n.tr("register-submitting")
        } else {
            i18n.tr("register-submit")
        };
        let submit = button(
            Text::new(submit_label)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press_maybe(self.can_submit().then_some(Message::SubmitPressed))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(button::primary);

        let switch = button(Text::new(i18n.tr("register-switch-login")).size(typography::BODY))
            .on_press(Message::SwitchToLogin)
            .style(button::text);

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .align_x(Horizontal::Center)
            .push(title)
            .push(name)
            .push(email)
            .push(password)
            .push(submit)
            .push(switch);

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
