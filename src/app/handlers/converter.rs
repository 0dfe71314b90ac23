//! Amount entry and the swap action

use crate::app::State;

pub(crate) fn handle_amount_changed(state: &mut State, input: String) {
    state.form.set_amount(input);
}

pub(crate) fn handle_swap(state: &mut State) {
    if let Some(quote) = state.form.swap() {
        tracing::info!("Swap quoted: {quote}");
    }
}
