// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen component.
//!
//! Collects credentials and hands them to the parent as an [`Event`];
//! the parent owns the network call and reports the outcome back via
//! [`State::set_submitting`]. Credentials are transient: they live in
//! the form until submit and are never persisted.

use crate::api::models::LoginCredentials;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Text},
    Element, Length,
};

#[derive(Debug, Default)]
pub struct State {
    email: String,
    password: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    SubmitPressed,
    SwitchToRegister,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(LoginCredentials),
    SwitchToRegister,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Marks the submit round-trip as started or finished. The form
    /// stays filled on failure so the user can correct and retry.
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Drops the typed credentials. Called once a session is
    /// established.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn can_submit(&self) -> bool {
        !self.submitting && !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
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
                Event::Submit(LoginCredentials {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                })
            }
            Message::SwitchToRegister => Event::SwitchToRegister,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_LG);

        let email = text_input(&i18n.tr("login-email-placeholder"), &self.email)
            .on_input_maybe((!self.submitting).then_some(Message::EmailChanged))
            .on_submit(Message::SubmitPressed)
            .padding(spacing::SM);

        let password = text_input(&i18n.tr("login-password-placeholder"), &self.password)
            .secure(true)
            .on_input_maybe((!self.submitting).then_some(Message::PasswordChanged))
            .on_submit(Message::SubmitPressed)
            .padding(spacing::SM);

        let submit_label = if self.submitting {
            i18n.tr("login-submitting")
        } else {
            i18n.tr("login-submit")
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

        let switch = button(Text::new(i18n.tr("login-switch-register")).size(typography::BODY))
            .on_press(Message::SwitchToRegister)
            .style(button::text);

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .align_x(Horizontal::Center)
            .push(title)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        let mut state = State::new();
        state.update(Message::EmailChanged("a@b.com".into()));
        state.update(Message::PasswordChanged("secret".into()));
        state
    }

    #[test]
    fn submit_carries_typed_credentials() {
        let mut state = filled_state();
        match state.update(Message::SubmitPressed) {
            Event::Submit(creds) => {
                assert_eq!(creds.email, "a@b.com");
                assert_eq!(creds.password, "secret");
            }
            _ => panic!("expected submit event"),
        }
    }

    #[test]
    fn submit_trims_email_but_not_password() {
        let mut state = State::new();
        state.update(Message::EmailChanged("  a@b.com ".into()));
        state.update(Message::PasswordChanged(" secret ".into()));
        match state.update(Message::SubmitPressed) {
            Event::Submit(creds) => {
                assert_eq!(creds.email, "a@b.com");
                assert_eq!(creds.password, " secret ");
            }
            _ => panic!("expected submit event"),
        }
    }

    #[test]
    fn empty_fields_do_not_submit() {
        let mut state = State::new();
        assert!(matches!(state.update(Message::SubmitPressed), Event::None));

        state.update(Message::EmailChanged("a@b.com".into()));
        assert!(matches!(state.update(Message::SubmitPressed), Event::None));
    }

    #[test]
    fn no_double_submit_while_in_flight() {
        let mut state = filled_state();
        state.set_submitting(true);
        assert!(matches!(state.update(Message::SubmitPressed), Event::None));
    }

    #[test]
    fn reset_clears_credentials() {
        let mut state = filled_state();
        state.set_submitting(true);
        state.reset();
        assert!(!state.is_submitting());
        assert!(matches!(state.update(Message::SubmitPressed), Event::None));
    }
}
