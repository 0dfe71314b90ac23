//! UI state management

use crate::app::{State, Tab};

/// Handles tab change. Leaving the converter dismisses any open picker.
pub(crate) fn handle_tab_selected(state: &mut State, tab: Tab) {
    if tab != Tab::Converter
        && let Some(side) = state.open_side()
    {
        crate::app::handlers::dismiss_picker(state, side);
    }
    state.active_tab = tab;
}
