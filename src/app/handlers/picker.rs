//! Currency picker interaction
//!
//! Handles:
//! - Opening/closing a picker from its trigger
//! - Search text and item commits
//! - Hover tracking and outside presses
//! - Keyboard navigation while a picker is open

use crate::app::{State, region_of};
use iced::keyboard::{Key, key::Named};
use tokswap::core::selection::{RegionId, SelectionController};
use tokswap::core::swap::{Side, SlotEvents};

/// Splits the state into one side's controller and that side's callbacks.
fn picker_and_events(state: &mut State, side: Side) -> (&mut SelectionController, SlotEvents<'_>) {
    let picker = match side {
        Side::From => &mut state.from_picker,
        Side::To => &mut state.to_picker,
    };
    (picker, state.form.events(side))
}

fn side_of(region: RegionId) -> Option<Side> {
    [Side::From, Side::To]
        .into_iter()
        .find(|side| region_of(*side) == region)
}

/// Handles a click on a picker's trigger
pub(crate) fn handle_picker_toggled(state: &mut State, side: Side) {
    let other = match side {
        Side::From => Side::To,
        Side::To => Side::From,
    };
    if state.picker(other).is_open() {
        dismiss_picker(state, other);
    }
    let (picker, mut events) = picker_and_events(state, side);
    picker.toggle(&mut events);
}

pub(crate) fn handle_picker_search(state: &mut State, side: Side, query: String) {
    let (picker, mut events) = picker_and_events(state, side);
    picker.set_query(query, &mut events);
}

/// Commits the visible item with `key`. Keys not in the visible list are ignored.
pub(crate) fn handle_picker_select(state: &mut State, side: Side, key: &str) {
    let Some(item) = state.form.slot(side).candidates().find(key).cloned() else {
        tracing::warn!("Ignoring selection of unknown currency {key}");
        return;
    };
    let (picker, mut events) = picker_and_events(state, side);
    picker.select_item(&item, &mut events);
}

pub(crate) fn handle_picker_hovered(state: &mut State, side: Side, inside: bool) {
    if inside {
        state.pointer.enter(region_of(side));
    } else {
        state.pointer.exit(region_of(side));
    }
}

/// A mouse button went down somewhere in the window.
pub(crate) fn handle_pointer_pressed(state: &mut State) {
    if !state.pointer.has_watchers() {
        return;
    }
    for region in state.pointer.outside_regions() {
        if let Some(side) = side_of(region) {
            dismiss_picker(state, side);
        }
    }
}

/// Closes `side`'s picker as if the pointer went down outside it.
pub(crate) fn dismiss_picker(state: &mut State, side: Side) {
    let (picker, mut events) = picker_and_events(state, side);
    picker.on_outside_interaction(&mut events);
}

pub(crate) fn handle_picker_key(state: &mut State, side: Side, key: Key<&str>) {
    let len = state.form.slot(side).visible().len();
    match key {
        Key::Named(Named::ArrowDown) => state.picker_mut(side).highlight_next(len),
        Key::Named(Named::ArrowUp) => state.picker_mut(side).highlight_previous(len),
        Key::Named(Named::Enter) => {
            let visible = state.form.slot(side).visible().to_vec();
            let (picker, mut events) = picker_and_events(state, side);
            picker.select_highlighted(&visible, &mut events);
        }
        Key::Named(Named::Escape) => dismiss_picker(state, side),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_priced_state;

    #[test]
    fn test_toggle_opens_and_watches() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::From);
        assert!(state.from_picker.is_open());
        assert_eq!(state.pointer.outside_regions(), vec![region_of(Side::From)]);

        handle_picker_toggled(&mut state, Side::From);
        assert!(!state.from_picker.is_open());
        assert!(!state.pointer.has_watchers());
    }

    #[test]
    fn test_reopening_after_trigger_close_shows_all() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::From);
        handle_picker_search(&mut state, Side::From, "et".to_string());
        assert_eq!(state.form.slot(Side::From).visible().len(), 1);

        handle_picker_toggled(&mut state, Side::From);
        handle_picker_toggled(&mut state, Side::From);
        assert_eq!(state.from_picker.query(), "");
        assert_eq!(state.form.slot(Side::From).visible().len(), 5);
    }

    #[test]
    fn test_opening_one_side_closes_the_other() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::From);
        handle_picker_toggled(&mut state, Side::To);
        assert!(!state.from_picker.is_open());
        assert!(state.to_picker.is_open());
    }

    #[test]
    fn test_search_narrows_only_its_side() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::To);
        handle_picker_search(&mut state, Side::To, "AT".to_string());

        let to: Vec<_> = state.form.slot(Side::To).visible().iter().map(|i| i.key.clone()).collect();
        assert_eq!(to, vec!["ATOM"]);
        assert_eq!(state.form.slot(Side::From).visible().len(), 5);
    }

    #[test]
    fn test_select_commits_and_restores() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::From);
        handle_picker_search(&mut state, Side::From, "neo".to_string());
        handle_picker_select(&mut state, Side::From, "NEO");

        assert_eq!(state.form.slot(Side::From).selected(), "NEO");
        assert!(!state.from_picker.is_open());
        assert!(!state.form.slot(Side::From).candidates().is_narrowed());
    }

    #[test]
    fn test_select_hidden_item_is_ignored() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::From);
        handle_picker_search(&mut state, Side::From, "eth".to_string());
        handle_picker_select(&mut state, Side::From, "ATOM");

        assert_eq!(state.form.slot(Side::From).selected(), "USD");
        assert!(state.from_picker.is_open());
    }

    #[test]
    fn test_press_outside_dismisses() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::From);
        handle_picker_search(&mut state, Side::From, "u".to_string());

        handle_pointer_pressed(&mut state);
        assert!(!state.from_picker.is_open());
        assert_eq!(state.from_picker.query(), "");
        assert!(!state.form.slot(Side::From).candidates().is_narrowed());
        assert!(!state.pointer.has_watchers());
    }

    #[test]
    fn test_press_inside_keeps_open() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::From);
        handle_picker_hovered(&mut state, Side::From, true);
        handle_pointer_pressed(&mut state);
        assert!(state.from_picker.is_open());

        handle_picker_hovered(&mut state, Side::From, false);
        handle_pointer_pressed(&mut state);
        assert!(!state.from_picker.is_open());
    }

    #[test]
    fn test_press_while_closed_does_nothing() {
        let mut state = create_priced_state();
        handle_pointer_pressed(&mut state);
        assert!(!state.from_picker.is_open());
        assert_eq!(state.form.slot(Side::From).selected(), "USD");
    }

    #[test]
    fn test_keyboard_highlight_and_enter() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::To);
        handle_picker_key(&mut state, Side::To, Key::Named(Named::ArrowDown));
        handle_picker_key(&mut state, Side::To, Key::Named(Named::ArrowDown));
        assert_eq!(state.to_picker.active_index(), Some(1));

        handle_picker_key(&mut state, Side::To, Key::Named(Named::Enter));
        // Sample prices sorted by code: ATOM, ETH, NEO, USDT, ZIL
        assert_eq!(state.form.slot(Side::To).selected(), "ETH");
        assert!(!state.to_picker.is_open());
    }

    #[test]
    fn test_enter_without_highlight_keeps_open() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::To);
        handle_picker_key(&mut state, Side::To, Key::Named(Named::Enter));
        assert!(state.to_picker.is_open());
        assert_eq!(state.form.slot(Side::To).selected(), "ETH");
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = create_priced_state();
        handle_picker_toggled(&mut state, Side::To);
        handle_picker_key(&mut state, Side::To, Key::Named(Named::Escape));
        assert!(!state.to_picker.is_open());
    }
}
