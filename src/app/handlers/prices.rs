//! Price feed loading
//!
//! Every fetch carries a ticket from the state's `FetchGate`; results for a
//! superseded ticket are dropped.

use crate::app::{FeedStatus, Message, State};
use iced::Task;
use tokswap::core::error::{FETCH_FAILED_MESSAGE, FetchError};
use tokswap::core::feed::{FetchTicket, fetch_table, publish};
use tokswap::core::prices::PriceTable;

/// Starts a fetch of the configured feed
pub(crate) fn handle_refresh_prices(state: &mut State) -> Task<Message> {
    let ticket = state.fetch_gate.begin();
    state.feed = FeedStatus::Loading;
    let url = state.config.price_feed_url.clone();

    Task::perform(
        async move {
            fetch_table(&url)
                .await
                .map_err(|e: FetchError| e.to_string())
        },
        move |result| Message::PricesLoaded(ticket, result),
    )
}

pub(crate) fn handle_prices_loaded(
    state: &mut State,
    ticket: FetchTicket,
    result: Result<PriceTable, String>,
) {
    if !state.fetch_gate.accept(ticket) {
        return;
    }
    match result {
        Ok(table) => {
            tracing::info!("Price table ready with {} currencies", table.len());
            let snapshot = publish(table);
            state.form.set_prices(snapshot.clone(), &state.icons);
            state.wallet.set_prices(snapshot);
            state.feed = FeedStatus::Ready;
        }
        Err(e) => {
            // The previous table, possibly empty, stays in place
            tracing::warn!("Price fetch failed: {e}");
            state.feed = FeedStatus::Error(FETCH_FAILED_MESSAGE.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_priced_state, create_test_state};
    use crate::app::handlers::{handle_picker_search, handle_picker_toggled};
    use tokswap::core::swap::Side;
    use tokswap::core::wallet::sample_prices;

    #[test]
    fn test_refresh_marks_loading() {
        let mut state = create_test_state();
        let _task = handle_refresh_prices(&mut state);
        assert_eq!(state.feed, FeedStatus::Loading);
        assert!(state.fetch_gate.is_loading());
    }

    #[test]
    fn test_loaded_prices_feed_both_pickers_and_wallet() {
        let mut state = create_test_state();
        let ticket = state.fetch_gate.begin();
        handle_prices_loaded(&mut state, ticket, Ok(sample_prices()));

        assert_eq!(state.feed, FeedStatus::Ready);
        assert_eq!(state.form.slot(Side::From).visible().len(), 5);
        assert_eq!(state.form.slot(Side::To).visible().len(), 5);
        assert!(state.wallet.rows().iter().all(|r| r.usd_value.is_some()));
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut state = create_test_state();
        let stale = state.fetch_gate.begin();
        let _current = state.fetch_gate.begin();
        handle_prices_loaded(&mut state, stale, Ok(sample_prices()));

        assert!(state.form.prices().get().is_empty());
        assert!(state.form.slot(Side::From).visible().is_empty());
    }

    #[test]
    fn test_refresh_while_searching_keeps_narrowed_list() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::To);
        handle_picker_search(&mut state, Side::To, "zi".to_string());

        let ticket = state.fetch_gate.begin();
        handle_prices_loaded(&mut state, ticket, Ok(sample_prices()));

        assert!(state.to_picker.is_open());
        assert_eq!(state.to_picker.query(), "zi");
        let keys: Vec<_> = state.form.slot(Side::To).visible().iter().map(|i| i.key.clone()).collect();
        assert_eq!(keys, vec!["ZIL"]);
    }

    #[test]
    fn test_failure_keeps_previous_table() {
        let mut state = create_test_state();
        let ticket = state.fetch_gate.begin();
        handle_prices_loaded(&mut state, ticket, Ok(sample_prices()));

        let ticket = state.fetch_gate.begin();
        handle_prices_loaded(&mut state, ticket, Err("timeout".to_string()));

        assert_eq!(
            state.feed,
            FeedStatus::Error("Failed to fetch currency data from API".to_string())
        );
        assert_eq!(state.form.prices().get().len(), 5);
    }
}
