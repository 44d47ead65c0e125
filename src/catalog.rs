// SPDX-License-Identifier: MPL-2.0
//! Catalog state: the client-side snapshot of the remote inventory.
//!
//! The list held here is a read-through cache, never authoritative. Two
//! rules keep it honest:
//!
//! - every fetch replaces the list wholesale; mutations are reconciled by
//!   refetching, never by patching locally;
//! - every issued fetch carries a sequence number, and a response is
//!   applied only if it belongs to the most recently issued request, so a
//!   slow stale search cannot overwrite a newer result.
//!
//! Search input is debounced: each keystroke bumps a generation counter
//! and schedules a delayed check; only the generation that is still
//! current when its delay elapses turns into a request. An empty or
//! whitespace query lists the full catalog instead of searching.

use crate::api::models::{Sweet, SweetPayload};
use std::time::Duration;

/// Quiet period after the last keystroke before a search fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Pause on the add form after a successful create, long enough to read
/// the confirmation before navigating back to the catalog.
pub const CREATE_REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// What a fetch task should ask the server for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    ListAll,
    Search(String),
}

#[derive(Debug, Default)]
pub struct Catalog {
    sweets: Vec<Sweet>,
    query: String,
    /// Bumped on every keystroke; a debounce timer firing for an older
    /// generation is ignored.
    debounce_generation: u64,
    /// Sequence number of the most recently issued fetch. Responses
    /// tagged with anything older are stale and discarded.
    fetch_sequence: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sweets(&self) -> &[Sweet] {
        &self.sweets
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Records a keystroke in the search field and returns the debounce
    /// generation the caller should schedule a delayed check for.
    pub fn set_query(&mut self, query: String) -> u64 {
        self.query = query;
        self.debounce_generation += 1;
        self.debounce_generation
    }

    /// Clears the query through the same debounce path as typing.
    pub fn clear_query(&mut self) -> u64 {
        self.set_query(String::new())
    }

    /// Called when a debounce delay elapses. Returns the fetch to issue
    /// if `generation` is still the latest, `None` if further keystrokes
    /// superseded it.
    pub fn debounce_elapsed(&mut self, generation: u64) -> Option<(u64, FetchKind)> {
        if generation != self.debounce_generation {
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Issues a fetch for the current query: list-all when it is empty
    /// or whitespace, search otherwise. Returns the sequence tag the
    /// response must carry to be applied.
    pub fn begin_fetch(&mut self) -> (u64, FetchKind) {
        self.fetch_sequence += 1;
        let trimmed = self.query.trim();
        let kind = if trimmed.is_empty() {
            FetchKind::ListAll
        } else {
            FetchKind::Search(trimmed.to_string())
        };
        (self.fetch_sequence, kind)
    }

    /// Issues the post-mutation refresh: always the full catalog.
    pub fn begin_refresh(&mut self) -> u64 {
        self.fetch_sequence += 1;
        self.fetch_sequence
    }

    /// Whether `sequence` tags the most recently issued fetch.
    pub fn is_current(&self, sequence: u64) -> bool {
        sequence == self.fetch_sequence
    }

    /// Applies a completed fetch. The snapshot replaces the list
    /// wholesale; a stale sequence is discarded and leaves the list
    /// untouched. Returns whether the response was applied.
    pub fn apply_fetch(&mut self, sequence: u64, sweets: Vec<Sweet>) -> bool {
        if sequence != self.fetch_sequence {
            return false;
        }
        self.sweets = sweets;
        true
    }
}

// ----------------------------------------------------------------------
// Admin form validation
// ----------------------------------------------------------------------

/// Raw text-input state for the add/edit form. Kept as strings so the
/// form can round-trip whatever the user typed; [`validate`] is the only
/// way to turn it into a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweetFields {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl SweetFields {
    pub fn from_sweet(sweet: &Sweet) -> Self {
        Self {
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price.to_string(),
            quantity: sweet.quantity.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyCategory,
    MissingPrice,
    InvalidPrice,
    MissingQuantity,
    InvalidQuantity,
}

/// Checks the form locally before any network call: `name` and
/// `category` must be non-empty after trimming, `price` and `quantity`
/// must be present and numeric (price non-negative, quantity a whole
/// number).
pub fn validate(fields: &SweetFields) -> Result<SweetPayload, ValidationError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let category = fields.category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    let price_text = fields.price.trim();
    if price_text.is_empty() {
        return Err(ValidationError::MissingPrice);
    }
    let price: f64 = price_text
        .parse()
        .map_err(|_| ValidationError::InvalidPrice)?;
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    let quantity_text = fields.quantity.trim();
    if quantity_text.is_empty() {
        return Err(ValidationError::MissingQuantity);
    }
    let quantity: u32 = quantity_text
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity)?;

    Ok(SweetPayload {
        name: name.to_string(),
        category: category.to_string(),
        price,
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet(id: &str, name: &str) -> Sweet {
        Sweet {
            id: id.into(),
            name: name.into(),
            category: "Candy".into(),
            price: 5.0,
            quantity: 3,
        }
    }

    fn filled_fields() -> SweetFields {
        SweetFields {
            name: "Ladoo".into(),
            category: "Sweet".into(),
            price: "10".into(),
            quantity: "5".into(),
        }
    }

    #[test]
    fn superseded_debounce_generation_is_ignored() {
        let mut catalog = Catalog::new();
        let first = catalog.set_query("la".into());
        let second = catalog.set_query("lad".into());

        assert!(catalog.debounce_elapsed(first).is_none());
        let (_, kind) = catalog.debounce_elapsed(second).expect("latest fires");
        assert_eq!(kind, FetchKind::Search("lad".into()));
    }

    #[test]
    fn exactly_one_fetch_per_settled_query() {
        let mut catalog = Catalog::new();
        catalog.set_query("l".into());
        catalog.set_query("la".into());
        let last = catalog.set_query("lad".into());

        let mut fired = 0;
        for generation in 1..=last {
            if catalog.debounce_elapsed(generation).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn empty_query_lists_all_instead_of_searching() {
        let mut catalog = Catalog::new();
        let generation = catalog.set_query("   ".into());
        let (_, kind) = catalog.debounce_elapsed(generation).unwrap();
        assert_eq!(kind, FetchKind::ListAll);
    }

    #[test]
    fn clear_query_goes_back_to_list_all() {
        let mut catalog = Catalog::new();
        catalog.set_query("ladoo".into());
        let generation = catalog.clear_query();
        let (_, kind) = catalog.debounce_elapsed(generation).unwrap();
        assert_eq!(kind, FetchKind::ListAll);
        assert!(!catalog.is_searching());
    }

    #[test]
    fn search_uses_final_trimmed_query() {
        let mut catalog = Catalog::new();
        let generation = catalog.set_query("  barfi ".into());
        let (_, kind) = catalog.debounce_elapsed(generation).unwrap();
        assert_eq!(kind, FetchKind::Search("barfi".into()));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut catalog = Catalog::new();
        let (old_seq, _) = catalog.begin_fetch();
        let (new_seq, _) = catalog.begin_fetch();

        // Newer response lands first.
        assert!(catalog.apply_fetch(new_seq, vec![sweet("1", "Barfi")]));
        // The slow stale one must not overwrite it.
        assert!(!catalog.apply_fetch(old_seq, vec![sweet("2", "Ladoo")]));

        assert_eq!(catalog.sweets().len(), 1);
        assert_eq!(catalog.sweets()[0].name, "Barfi");
    }

    #[test]
    fn applied_fetch_replaces_snapshot_wholesale() {
        let mut catalog = Catalog::new();
        let (seq, _) = catalog.begin_fetch();
        assert!(catalog.apply_fetch(seq, vec![sweet("1", "Barfi"), sweet("2", "Ladoo")]));

        let seq = catalog.begin_refresh();
        assert!(catalog.apply_fetch(seq, vec![sweet("3", "Jalebi")]));
        assert_eq!(catalog.sweets().len(), 1);
        assert_eq!(catalog.sweets()[0].id, "3");
    }

    #[test]
    fn refresh_supersedes_in_flight_fetches() {
        let mut catalog = Catalog::new();
        catalog.set_query("ladoo".into());
        let (search_seq, _) = catalog.begin_fetch();

        // A refresh after a mutation reloads everything even mid-search,
        // and the slower search answer is no longer welcome.
        let refresh_seq = catalog.begin_refresh();
        assert!(catalog.is_current(refresh_seq));
        assert!(!catalog.is_current(search_seq));
        assert!(catalog.apply_fetch(refresh_seq, vec![sweet("1", "Barfi")]));
        assert!(!catalog.apply_fetch(search_seq, vec![sweet("2", "Ladoo")]));
    }

    #[test]
    fn validate_accepts_complete_fields() {
        let payload = validate(&filled_fields()).expect("valid");
        assert_eq!(payload.name, "Ladoo");
        assert_eq!(payload.price, 10.0);
        assert_eq!(payload.quantity, 5);
    }

    #[test]
    fn validate_trims_name_and_category() {
        let mut fields = filled_fields();
        fields.name = "  Ladoo  ".into();
        fields.category = " Sweet ".into();
        let payload = validate(&fields).unwrap();
        assert_eq!(payload.name, "Ladoo");
        assert_eq!(payload.category, "Sweet");
    }

    #[test]
    fn validate_rejects_whitespace_only_name() {
        let mut fields = filled_fields();
        fields.name = "   ".into();
        assert_eq!(validate(&fields), Err(ValidationError::EmptyName));
    }

    #[test]
    fn validate_rejects_empty_category() {
        let mut fields = filled_fields();
        fields.category = String::new();
        assert_eq!(validate(&fields), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn validate_rejects_missing_price_and_quantity() {
        let mut fields = filled_fields();
        fields.price = String::new();
        assert_eq!(validate(&fields), Err(ValidationError::MissingPrice));

        let mut fields = filled_fields();
        fields.quantity = "  ".into();
        assert_eq!(validate(&fields), Err(ValidationError::MissingQuantity));
    }

    #[test]
    fn validate_rejects_non_numeric_and_negative_values() {
        let mut fields = filled_fields();
        fields.price = "ten".into();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidPrice));

        let mut fields = filled_fields();
        fields.price = "-1".into();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidPrice));

        let mut fields = filled_fields();
        fields.quantity = "2.5".into();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidQuantity));

        let mut fields = filled_fields();
        fields.quantity = "-3".into();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn fields_round_trip_from_sweet() {
        let fields = SweetFields::from_sweet(&sweet("1", "Barfi"));
        assert_eq!(fields.name, "Barfi");
        assert_eq!(fields.price, "5");
        assert_eq!(fields.quantity, "3");
        assert!(validate(&fields).is_ok());
    }
}
