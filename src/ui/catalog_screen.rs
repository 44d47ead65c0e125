// SPDX-License-Identifier: MPL-2.0
//! Catalog screen: search bar, sweet cards, and the edit dialog.
//!
//! The list itself lives in [`crate::catalog::Catalog`]; this component
//! renders it and owns only the transient edit-dialog state. Everything
//! that talks to the network (search, purchase, save, delete) leaves as
//! an [`Event`] for the application to act on.

use crate::api::models::Sweet;
use crate::catalog::{Catalog, SweetFields};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, scrollable, text, text_input, Column, Container, Row, Text},
    Color, Element, Length, Theme,
};

/// Cards per catalog row.
const GRID_COLUMNS: usize = 3;

/// Transient state of the edit dialog.
#[derive(Debug, Clone)]
pub struct EditState {
    pub id: String,
    pub fields: SweetFields,
    pub submitting: bool,
}

#[derive(Debug, Default)]
pub struct State {
    edit: Option<EditState>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ClearQuery,
    PurchasePressed { id: String, name: String },
    EditPressed(Sweet),
    EditNameChanged(String),
    EditCategoryChanged(String),
    EditPriceChanged(String),
    EditQuantityChanged(String),
    SaveEditPressed,
    CancelEditPressed,
    DeletePressed { id: String, name: String },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The search field changed; the parent restarts the debounce timer.
    QueryChanged(String),
    Purchase {
        id: String,
        name: String,
    },
    /// Save was pressed in the edit dialog. The parent validates the
    /// fields and issues the update; the dialog stays open until the
    /// outcome is known.
    SaveEdit {
        id: String,
        fields: SweetFields,
    },
    /// Delete was pressed; the parent asks for confirmation first.
    ConfirmDelete {
        id: String,
        name: String,
    },
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&self) -> Option<&EditState> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Closes the edit dialog. Called on save success and on cancel.
    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    pub fn set_edit_submitting(&mut self, submitting: bool) {
        if let Some(edit) = &mut self.edit {
            edit.submitting = submitting;
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::QueryChanged(query) => Event::QueryChanged(query),
            Message::ClearQuery => Event::QueryChanged(String::new()),
            Message::PurchasePressed { id, name } => Event::Purchase { id, name },
            Message::EditPressed(sweet) => {
                self.edit = Some(EditState {
                    id: sweet.id.clone(),
                    fields: SweetFields::from_sweet(&sweet),
                    submitting: false,
                });
                Event::None
            }
            Message::EditNameChanged(value) => self.edit_field(|fields| fields.name = value),
            Message::EditCategoryChanged(value) => {
                self.edit_field(|fields| fields.category = value)
            }
            Message::EditPriceChanged(value) => self.edit_field(|fields| fields.price = value),
            Message::EditQuantityChanged(value) => {
                self.edit_field(|fields| fields.quantity = value)
            }
            Message::SaveEditPressed => match &self.edit {
                Some(edit) if !edit.submitting => Event::SaveEdit {
                    id: edit.id.clone(),
                    fields: edit.fields.clone(),
                },
                _ => Event::None,
            },
            Message::CancelEditPressed => {
                self.close_edit();
                Event::None
            }
            Message::DeletePressed { id, name } => Event::ConfirmDelete { id, name },
        }
    }

    fn edit_field(&mut self, apply: impl FnOnce(&mut SweetFields)) -> Event {
        if let Some(edit) = &mut self.edit {
            if !edit.submitting {
                apply(&mut edit.fields);
            }
        }
        Event::None
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let search = view_search_bar(ctx.i18n, ctx.catalog);
        let listing: Element<'a, Message> = if ctx.catalog.sweets().is_empty() {
            view_empty_state(ctx.i18n, ctx.catalog, ctx.is_admin)
        } else {
            view_grid(ctx.i18n, ctx.catalog.sweets(), ctx.is_admin)
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .push(search)
            .push(scrollable(listing).height(Length::Fill));

        match &self.edit {
            Some(edit) => iced::widget::stack([
                Element::from(content),
                view_edit_dialog(ctx.i18n, edit),
            ])
            .into(),
            None => content.into(),
        }
    }
}

/// Contextual data needed to render the catalog screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub is_admin: bool,
}

fn view_search_bar<'a>(i18n: &'a I18n, catalog: &'a Catalog) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("search-placeholder"), catalog.query())
        .on_input(Message::QueryChanged)
        .padding(spacing::SM);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input);

    if !catalog.query().is_empty() {
        row = row.push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::ClearQuery)
                .padding(spacing::XS)
                .style(button::text),
        );
    }

    row.into()
}

fn view_grid<'a>(i18n: &'a I18n, sweets: &'a [Sweet], is_admin: bool) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);
    for chunk in sweets.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for sweet in chunk {
            row = row.push(view_card(i18n, sweet, is_admin));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn view_card<'a>(i18n: &'a I18n, sweet: &'a Sweet, is_admin: bool) -> Element<'a, Message> {
    let title = Text::new(format!("{} {}", category_glyph(&sweet.category), sweet.name))
        .size(typography::TITLE_SM);

    let category = Container::new(Text::new(sweet.category.as_str()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(category_badge_style);

    let price = Text::new(
        i18n.tr_with_args("sweet-price", &[("price", &sweet.price.to_string())]),
    )
    .size(typography::BODY)
    .style(|_theme: &Theme| text::Style {
        color: Some(palette::SUCCESS_500),
    });

    let stock_key = if sweet.quantity == 1 {
        "sweet-stock-one"
    } else {
        "sweet-stock-many"
    };
    let in_stock = sweet.in_stock();
    let mut stock_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("sweet-stock-label")).size(typography::CAPTION))
        .push(
            Text::new(i18n.tr_with_args(stock_key, &[("count", &sweet.quantity.to_string())]))
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(if in_stock {
                        palette::SUCCESS_500
                    } else {
                        palette::ERROR_500
                    }),
                }),
        );
    if sweet.low_stock() {
        stock_row = stock_row.push(
            Text::new(i18n.tr("sweet-low-stock"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                }),
        );
    }

    let buy_label = if sweet.in_stock() {
        i18n.tr("sweet-buy")
    } else {
        i18n.tr("sweet-out-of-stock")
    };
    // A sold-out sweet keeps its card but the buy button is inert; the
    // server still guards against racing buyers.
    let buy = button(
        Text::new(buy_label)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(sweet.in_stock().then(|| Message::PurchasePressed {
        id: sweet.id.clone(),
        name: sweet.name.clone(),
    }))
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(button::success);

    let mut actions = Row::new().spacing(spacing::XS).push(buy);
    if is_admin {
        actions = actions
            .push(
                button(Text::new(i18n.tr("sweet-edit")).size(typography::BODY))
                    .on_press(Message::EditPressed(sweet.clone()))
                    .padding(spacing::XS)
                    .style(button::secondary),
            )
            .push(
                button(Text::new(i18n.tr("sweet-delete")).size(typography::BODY))
                    .on_press(Message::DeletePressed {
                        id: sweet.id.clone(),
                        name: sweet.name.clone(),
                    })
                    .padding(spacing::XS)
                    .style(button::danger),
            );
    }

    let card = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(Row::new().spacing(spacing::XS).push(category).push(price))
        .push(stock_row)
        .push(actions);

    Container::new(card)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(card_style)
        .into()
}

fn view_empty_state<'a>(
    i18n: &'a I18n,
    catalog: &'a Catalog,
    is_admin: bool,
) -> Element<'a, Message> {
    let headline = if catalog.is_searching() {
        i18n.tr_with_args("catalog-empty-search", &[("query", catalog.query().trim())])
    } else {
        i18n.tr("catalog-empty")
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(headline).size(typography::BODY_LG));

    if is_admin && !catalog.is_searching() {
        column = column.push(
            Text::new(i18n.tr("catalog-empty-admin-hint"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn view_edit_dialog<'a>(i18n: &'a I18n, edit: &'a EditState) -> Element<'a, Message> {
    let active = !edit.submitting;

    let title = Text::new(i18n.tr("edit-title")).size(typography::TITLE_MD);
    let name = text_input(&i18n.tr("form-name-placeholder"), &edit.fields.name)
        .on_input_maybe(active.then_some(Message::EditNameChanged))
        .padding(spacing::SM);
    let category = text_input(&i18n.tr("form-category-placeholder"), &edit.fields.category)
        .on_input_maybe(active.then_some(Message::EditCategoryChanged))
        .padding(spacing::SM);
    let price = text_input(&i18n.tr("form-price-placeholder"), &edit.fields.price)
        .on_input_maybe(active.then_some(Message::EditPriceChanged))
        .padding(spacing::SM);
    let quantity = text_input(&i18n.tr("form-quantity-placeholder"), &edit.fields.quantity)
        .on_input_maybe(active.then_some(Message::EditQuantityChanged))
        .padding(spacing::SM);

    let save = button(
        Text::new(i18n.tr("edit-save"))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(active.then_some(Message::SaveEditPressed))
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(button::primary);

    let cancel = button(
        Text::new(i18n.tr("edit-cancel"))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(active.then_some(Message::CancelEditPressed))
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(button::secondary);

    let dialog = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(name)
        .push(category)
        .push(price)
        .push(quantity)
        .push(Row::new().spacing(spacing::SM).push(save).push(cancel));

    let card = Container::new(dialog)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(dialog_style);

    // Dimmed backdrop behind the dialog.
    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            ..Default::default()
        })
        .into()
}

/// Emoji marker for a category, matching on common category words.
fn category_glyph(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    if lower.contains("chocolate") {
        "🍫"
    } else if lower.contains("candy") {
        "🍬"
    } else if lower.contains("cupcake") {
        "🧁"
    } else if lower.contains("cake") {
        "🎂"
    } else if lower.contains("cookie") {
        "🍪"
    } else if lower.contains("ice cream") || lower.contains("icecream") {
        "🍦"
    } else if lower.contains("donut") || lower.contains("doughnut") {
        "🍩"
    } else if lower.contains("lollipop") {
        "🍭"
    } else if lower.contains("gummy") {
        "🐻"
    } else if lower.contains("pie") {
        "🥧"
    } else {
        "🍰"
    }
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: palette::PRIMARY_400,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

fn category_badge_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn dialog_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet() -> Sweet {
        Sweet {
            id: "s1".into(),
            name: "Ladoo".into(),
            category: "Sweet".into(),
            price: 10.0,
            quantity: 5,
        }
    }

    #[test]
    fn query_changes_bubble_up() {
        let mut state = State::new();
        match state.update(Message::QueryChanged("lad".into())) {
            Event::QueryChanged(query) => assert_eq!(query, "lad"),
            _ => panic!("expected query event"),
        }
    }

    #[test]
    fn clear_query_bubbles_as_empty_query() {
        let mut state = State::new();
        match state.update(Message::ClearQuery) {
            Event::QueryChanged(query) => assert!(query.is_empty()),
            _ => panic!("expected query event"),
        }
    }

    #[test]
    fn edit_press_opens_prefilled_dialog() {
        let mut state = State::new();
        state.update(Message::EditPressed(sweet()));

        let edit = state.edit().expect("dialog open");
        assert_eq!(edit.id, "s1");
        assert_eq!(edit.fields.name, "Ladoo");
        assert_eq!(edit.fields.quantity, "5");
    }

    #[test]
    fn save_emits_current_fields() {
        let mut state = State::new();
        state.update(Message::EditPressed(sweet()));
        state.update(Message::EditPriceChanged("12.5".into()));

        match state.update(Message::SaveEditPressed) {
            Event::SaveEdit { id, fields } => {
                assert_eq!(id, "s1");
                assert_eq!(fields.price, "12.5");
            }
            _ => panic!("expected save event"),
        }
        // The dialog stays open until the parent reports the outcome.
        assert!(state.is_editing());
    }

    #[test]
    fn cancel_closes_dialog_without_event() {
        let mut state = State::new();
        state.update(Message::EditPressed(sweet()));
        assert!(matches!(
            state.update(Message::CancelEditPressed),
            Event::None
        ));
        assert!(!state.is_editing());
    }

    #[test]
    fn submitting_dialog_ignores_input_and_saves() {
        let mut state = State::new();
        state.update(Message::EditPressed(sweet()));
        state.set_edit_submitting(true);

        state.update(Message::EditNameChanged("Barfi".into()));
        assert_eq!(state.edit().unwrap().fields.name, "Ladoo");
        assert!(matches!(state.update(Message::SaveEditPressed), Event::None));
    }

    #[test]
    fn delete_press_requests_confirmation() {
        let mut state = State::new();
        match state.update(Message::DeletePressed {
            id: "s1".into(),
            name: "Ladoo".into(),
        }) {
            Event::ConfirmDelete { id, name } => {
                assert_eq!(id, "s1");
                assert_eq!(name, "Ladoo");
            }
            _ => panic!("expected confirm event"),
        }
    }

    #[test]
    fn category_glyphs_match_common_categories() {
        assert_eq!(category_glyph("Chocolate"), "🍫");
        assert_eq!(category_glyph("Milk Chocolate"), "🍫");
        assert_eq!(category_glyph("Cupcake"), "🧁");
        assert_eq!(category_glyph("cake"), "🎂");
        assert_eq!(category_glyph("Ice Cream"), "🍦");
        assert_eq!(category_glyph("Doughnut"), "🍩");
        assert_eq!(category_glyph("Mystery"), "🍰");
    }
}
