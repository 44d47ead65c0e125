// SPDX-License-Identifier: MPL-2.0
//! Admin form for adding a sweet to the catalog.
//!
//! The form keeps raw strings and defers all checking to
//! [`crate::catalog::validate`], which the parent runs before any
//! network call. While the create request is in flight the inputs are
//! frozen and the submit button shows a busy label.

use crate::catalog::SweetFields;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Text},
    Element, Length,
};

#[derive(Debug, Default)]
pub struct State {
    fields: SweetFields,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    CategoryChanged(String),
    PriceChanged(String),
    QuantityChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &SweetFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Clears every input. Called after a successful create and when
    /// the screen is (re)entered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, message: Message) -> Event {
        if self.submitting {
            // Inputs are frozen during the round-trip; only the
            // completion handler may touch the state.
            return Event::None;
        }
        match message {
            Message::NameChanged(value) => {
                self.fields.name = value;
                Event::None
            }
            Message::CategoryChanged(value) => {
                self.fields.category = value;
                Event::None
            }
            Message::PriceChanged(value) => {
                self.fields.price = value;
                Event::None
            }
            Message::QuantityChanged(value) => {
                self.fields.quantity = value;
                Event::None
            }
            Message::SubmitPressed => Event::Submit,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("add-title")).size(typography::TITLE_MD);

        let active = !self.submitting;
        let name = text_input(&i18n.tr("form-name-placeholder"), &self.fields.name)
            .on_input_maybe(active.then_some(Message::NameChanged))
            .padding(spacing::SM);
        let category = text_input(&i18n.tr("form-category-placeholder"), &self.fields.category)
            .on_input_maybe(active.then_some(Message::CategoryChanged))
            .padding(spacing::SM);
        let price = text_input(&i18n.tr("form-price-placeholder"), &self.fields.price)
            .on_input_maybe(active.then_some(Message::PriceChanged))
            .padding(spacing::SM);
        let quantity = text_input(&i18n.tr("form-quantity-placeholder"), &self.fields.quantity)
            .on_input_maybe(active.then_some(Message::QuantityChanged))
            .padding(spacing::SM);

        let submit_label = if self.submitting {
            i18n.tr("add-submitting")
        } else {
            i18n.tr("add-submit")
        };
        let submit = button(
            Text::new(submit_label)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press_maybe(active.then_some(Message::SubmitPressed))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(button::primary);

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(title)
            .push(name)
            .push(category)
            .push(price)
            .push(quantity)
            .push(submit);

        Container::new(form)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(spacing::XL)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_messages_update_raw_strings() {
        let mut state = State::new();
        state.update(Message::NameChanged("Ladoo".into()));
        state.update(Message::PriceChanged("10.5".into()));

        assert_eq!(state.fields().name, "Ladoo");
        assert_eq!(state.fields().price, "10.5");
    }

    #[test]
    fn submit_emits_event_without_validating() {
        // Validation belongs to the parent so the rejection toast and
        // the short-circuit live in one place.
        let mut state = State::new();
        assert!(matches!(state.update(Message::SubmitPressed), Event::Submit));
    }

    #[test]
    fn in_flight_form_is_frozen() {
        let mut state = State::new();
        state.update(Message::NameChanged("Ladoo".into()));
        state.set_submitting(true);

        state.update(Message::NameChanged("Barfi".into()));
        assert_eq!(state.fields().name, "Ladoo");
        assert!(matches!(state.update(Message::SubmitPressed), Event::None));
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut state = State::new();
        state.update(Message::NameChanged("Ladoo".into()));
        state.update(Message::QuantityChanged("5".into()));
        state.set_submitting(true);

        state.reset();
        assert!(state.fields().is_empty());
        assert!(!state.is_submitting());
    }
}
