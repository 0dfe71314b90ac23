//! Shared test utilities for handler modules

#[cfg(test)]
pub fn create_test_state() -> crate::app::State {
    crate::app::State::from_config(tokswap::config::AppConfig::default())
}

/// A state whose converter already holds the demo prices.
#[cfg(test)]
pub fn create_priced_state() -> crate::app::State {
    let mut state = create_test_state();
    let ticket = state.fetch_gate.begin();
    crate::app::handlers::handle_prices_loaded(
        &mut state,
        ticket,
        Ok(tokswap::core::wallet::sample_prices()),
    );
    state
}
