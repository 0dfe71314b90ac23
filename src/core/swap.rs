//! Converter form: two currency pickers, an amount and the last outcome
//!
//! Each side owns its own [`CandidateList`], so narrowing or resetting one
//! picker never touches the other.

use super::candidates::CandidateList;
use super::convert::{ConversionRequest, Quote, parse_amount};
use super::error::Error;
use super::item::{IconResolver, Item};
use super::pipeline::Versioned;
use super::prices::PriceTable;
use super::selection::SelectionEvents;
use std::sync::Arc;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Side {
    #[strum(serialize = "From Currency")]
    From,
    #[strum(serialize = "To Currency")]
    To,
}

/// One picker's host-side data.
#[derive(Debug, Clone, Default)]
pub struct CurrencySlot {
    candidates: CandidateList<String>,
    selected: String,
}

impl CurrencySlot {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            candidates: CandidateList::default(),
            selected: selected.into(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn candidates(&self) -> &CandidateList<String> {
        &self.candidates
    }

    pub fn visible(&self) -> &[Item<String>] {
        self.candidates.visible()
    }
}

/// Callbacks for one side's picker. Committing a currency also clears the
/// form's last result.
pub struct SlotEvents<'a> {
    slot: &'a mut CurrencySlot,
    outcome: &'a mut Option<Quote>,
}

impl SelectionEvents for SlotEvents<'_> {
    type Value = String;

    fn on_search_change(&mut self, query: &str) {
        self.slot.candidates.apply_query(query);
    }

    fn on_item_select(&mut self, value: String) {
        tracing::debug!("Selected {value}");
        self.slot.selected = value;
        *self.outcome = None;
    }

    fn restore_candidates(&mut self) {
        self.slot.candidates.restore();
    }
}

#[derive(Debug, Default)]
pub struct SwapForm {
    from: CurrencySlot,
    to: CurrencySlot,
    amount_input: String,
    prices: Versioned<PriceTable>,
    quote: Option<Quote>,
    error: Option<Error>,
}

impl SwapForm {
    pub fn new(default_from: impl Into<String>, default_to: impl Into<String>) -> Self {
        Self {
            from: CurrencySlot::new(default_from),
            to: CurrencySlot::new(default_to),
            ..Self::default()
        }
    }

    /// Installs a new price snapshot and rebuilds both pickers' sources.
    pub fn set_prices(&mut self, prices: Versioned<PriceTable>, icons: &IconResolver) {
        let items: Arc<[Item<String>]> = prices.get().currency_items(icons).into();
        self.from.candidates.set_source(Arc::clone(&items));
        self.to.candidates.set_source(items);
        self.prices = prices;
    }

    pub fn prices(&self) -> &Versioned<PriceTable> {
        &self.prices
    }

    pub fn slot(&self, side: Side) -> &CurrencySlot {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }

    /// Callbacks for the picker on `side`.
    pub fn events(&mut self, side: Side) -> SlotEvents<'_> {
        let slot = match side {
            Side::From => &mut self.from,
            Side::To => &mut self.to,
        };
        SlotEvents {
            slot,
            outcome: &mut self.quote,
        }
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// Stores typed text and validates it as the user types.
    pub fn set_amount(&mut self, input: impl Into<String>) {
        self.amount_input = input.into();
        self.quote = None;
        self.error = parse_amount(&self.amount_input).err();
    }

    /// Runs the conversion for the current inputs.
    ///
    /// On failure the error is kept for [`error`](Self::error) and nothing
    /// is returned.
    pub fn swap(&mut self) -> Option<&Quote> {
        self.quote = None;
        self.error = None;
        let outcome = parse_amount(&self.amount_input).and_then(|amount| {
            ConversionRequest::new(amount, self.from.selected.as_str(), self.to.selected.as_str())
                .quote(self.prices.get())
        });
        match outcome {
            Ok(quote) => Some(&*self.quote.insert(quote)),
            Err(e) => {
                tracing::debug!("Conversion rejected: {e}");
                self.error = Some(e);
                None
            }
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Inline message for the current error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(Error::user_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::testing::controller;
    use rust_decimal_macros::dec;

    fn form() -> SwapForm {
        let mut form = SwapForm::new("ETH", "ATOM");
        let prices = PriceTable::from_pairs([
            ("ETH", dec!(3000)),
            ("ATOM", dec!(20)),
            ("USD", dec!(1)),
        ]);
        form.set_prices(Versioned::new(prices), &IconResolver::new("https://icons/"));
        form
    }

    #[test]
    fn test_swap_produces_quote() {
        let mut form = form();
        form.set_amount("10");
        let quote = form.swap().unwrap();
        assert_eq!(quote.to_string(), "10 ETH = 0.07 ATOM");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_amount_validated_while_typing() {
        let mut form = form();
        form.set_amount("0");
        assert_eq!(form.error_message().as_deref(), Some("Amount should be greater than 0"));
        form.set_amount("3");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_swap_same_currency_keeps_error() {
        let mut form = form();
        form.set_amount("1");
        let (mut picker, _) = controller();
        picker.toggle(&mut form.events(Side::To));
        let eth = form.slot(Side::To).candidates().find("ETH").cloned().unwrap();
        picker.select_item(&eth, &mut form.events(Side::To));

        assert!(form.swap().is_none());
        assert_eq!(form.error_message().as_deref(), Some("Both currencies are the same"));
    }

    #[test]
    fn test_selection_clears_previous_quote() {
        let mut form = form();
        form.set_amount("10");
        form.swap();
        assert!(form.quote().is_some());

        let (mut picker, _) = controller();
        picker.toggle(&mut form.events(Side::From));
        let usd = form.slot(Side::From).candidates().find("USD").cloned().unwrap();
        picker.select_item(&usd, &mut form.events(Side::From));
        assert_eq!(form.slot(Side::From).selected(), "USD");
        assert!(form.quote().is_none());
    }

    #[test]
    fn test_sides_filter_independently() {
        let mut form = form();
        let (mut from_picker, _) = controller();
        from_picker.toggle(&mut form.events(Side::From));
        from_picker.set_query("et", &mut form.events(Side::From));

        assert_eq!(form.slot(Side::From).visible().len(), 1);
        assert_eq!(form.slot(Side::To).visible().len(), 3);

        from_picker.on_outside_interaction(&mut form.events(Side::From));
        assert_eq!(form.slot(Side::From).visible().len(), 3);
    }

    #[test]
    fn test_closing_by_trigger_restores_list() {
        let mut form = form();
        let (mut picker, _) = controller();
        picker.toggle(&mut form.events(Side::From));
        picker.set_query("et", &mut form.events(Side::From));
        assert_eq!(form.slot(Side::From).visible().len(), 1);

        picker.toggle(&mut form.events(Side::From));
        picker.toggle(&mut form.events(Side::From));
        assert_eq!(picker.query(), "");
        assert_eq!(form.slot(Side::From).visible().len(), 3);
    }

    #[test]
    fn test_price_refresh_keeps_open_search() {
        let mut form = form();
        let (mut picker, _) = controller();
        picker.toggle(&mut form.events(Side::To));
        picker.set_query("at", &mut form.events(Side::To));

        let refreshed = PriceTable::from_pairs([
            ("ETH", dec!(3100)),
            ("ATOM", dec!(21)),
            ("STATA", dec!(2)),
            ("USD", dec!(1)),
        ]);
        form.set_prices(Versioned::new(refreshed), &IconResolver::new(""));

        let keys: Vec<_> = form.slot(Side::To).visible().iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["ATOM", "STATA"]);
        assert_eq!(form.slot(Side::From).visible().len(), 4);

        picker.on_outside_interaction(&mut form.events(Side::To));
        assert_eq!(form.slot(Side::To).visible().len(), 4);
    }

    #[test]
    fn test_unknown_currency_reports_lookup() {
        let mut form = SwapForm::new("DOGE", "ETH");
        form.set_prices(
            Versioned::new(PriceTable::from_pairs([("ETH", dec!(3000))])),
            &IconResolver::new(""),
        );
        form.set_amount("1");
        assert!(form.swap().is_none());
        assert_eq!(form.error_message().as_deref(), Some("No price available for DOGE"));
    }
}
