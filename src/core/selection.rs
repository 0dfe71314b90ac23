//! Searchable picker state machine
//!
//! A [`SelectionController`] is either Closed or Open. While Open it holds an
//! observer on "pointer pressed outside this region", obtained from the host
//! through [`OutsidePointer`]. The observer is acquired once per Open session
//! and released on every path out of Open, including [`SelectionController::stop`]
//! and drop.
//!
//! The controller never owns the candidate list or the selected value. Every
//! effect on the surrounding application goes through [`SelectionEvents`].

use super::item::Item;
use std::fmt;
use std::rc::Rc;

/// Identifies the screen region a picker occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// Host capability: watch for pointer activation outside a region.
pub trait OutsidePointer {
    fn watch(&self, region: RegionId) -> Box<dyn WatchHandle>;
}

/// A live outside-pointer subscription.
///
/// `release` must be idempotent; implementations also release on drop.
pub trait WatchHandle {
    fn release(&mut self);
}

/// Callbacks a host supplies to a picker.
pub trait SelectionEvents {
    /// What a committed item hands back to the host.
    type Value;

    fn on_search_change(&mut self, _query: &str) {}

    fn on_item_select(&mut self, value: Self::Value);

    fn on_close(&mut self) {}

    /// Sets the externally-owned candidate list back to its unfiltered source.
    fn restore_candidates(&mut self);
}

/// Observable picker state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub is_open: bool,
    pub query: String,
    /// Highlighted row in the visible list; `None` means nothing highlighted.
    pub active_index: Option<usize>,
}

/// Rendered pieces of an open picker, built from host render functions.
#[derive(Debug)]
pub struct PickerView<R> {
    pub search: R,
    pub items: Vec<R>,
}

pub struct SelectionController {
    region: RegionId,
    state: SelectionState,
    pointer: Rc<dyn OutsidePointer>,
    watch: Option<Box<dyn WatchHandle>>,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("region", &self.region)
            .field("state", &self.state)
            .field("watching", &self.watch.is_some())
            .finish_non_exhaustive()
    }
}

impl SelectionController {
    /// Creates a closed picker. No observer is held until it opens.
    pub fn new(region: RegionId, pointer: Rc<dyn OutsidePointer>) -> Self {
        Self {
            region,
            state: SelectionState::default(),
            pointer,
            watch: None,
        }
    }

    /// Creates a picker that starts Open. Call [`start`](Self::start) to
    /// establish its observer.
    pub fn new_open(region: RegionId, pointer: Rc<dyn OutsidePointer>) -> Self {
        let mut controller = Self::new(region, pointer);
        controller.state.is_open = true;
        controller
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Mount: acquires the observer if the picker is already Open.
    pub fn start(&mut self) {
        if self.state.is_open {
            self.acquire();
        }
    }

    /// Unmount: releases the observer and settles in Closed without firing
    /// callbacks. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.release();
        self.state = SelectionState::default();
    }

    /// Closed→Open or Open→Closed. Closing restores the host's unfiltered
    /// candidates, so the next session starts from the full list.
    pub fn toggle(&mut self, events: &mut impl SelectionEvents) {
        if self.state.is_open {
            self.close();
            events.restore_candidates();
        } else {
            self.state.is_open = true;
            self.state.query.clear();
            self.state.active_index = None;
            self.acquire();
        }
        tracing::debug!("{} toggled, open={}", self.region, self.state.is_open);
    }

    /// Pointer activated outside the picker. No effect while Closed.
    pub fn on_outside_interaction(&mut self, events: &mut impl SelectionEvents) {
        if !self.state.is_open {
            return;
        }
        self.close();
        events.on_close();
        events.restore_candidates();
        tracing::debug!("{} dismissed by outside interaction", self.region);
    }

    /// Commits `item`. No effect while Closed.
    pub fn select_item<E>(&mut self, item: &Item<E::Value>, events: &mut E)
    where
        E: SelectionEvents,
        E::Value: Clone,
    {
        if !self.state.is_open {
            return;
        }
        self.close();
        events.on_item_select(item.value.clone());
        events.restore_candidates();
        tracing::debug!("{} selected {}", self.region, item.key);
    }

    /// Commits the highlighted row of `visible`, if any.
    pub fn select_highlighted<E>(&mut self, visible: &[Item<E::Value>], events: &mut E) -> bool
    where
        E: SelectionEvents,
        E::Value: Clone,
    {
        match self.state.active_index.and_then(|i| visible.get(i)) {
            Some(item) if self.state.is_open => {
                self.select_item(item, events);
                true
            }
            _ => false,
        }
    }

    /// Updates the search text while Open and reports it to the host.
    pub fn set_query(&mut self, query: impl Into<String>, events: &mut impl SelectionEvents) {
        if !self.state.is_open {
            return;
        }
        self.state.query = query.into();
        self.state.active_index = None;
        events.on_search_change(&self.state.query);
    }

    /// Moves the highlight down, wrapping, within a list of `len` rows.
    pub fn highlight_next(&mut self, len: usize) {
        if !self.state.is_open || len == 0 {
            return;
        }
        self.state.active_index = Some(match self.state.active_index {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    /// Moves the highlight up, wrapping, within a list of `len` rows.
    pub fn highlight_previous(&mut self, len: usize) {
        if !self.state.is_open || len == 0 {
            return;
        }
        self.state.active_index = Some(match self.state.active_index {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        });
    }

    /// Builds the open picker from host render functions.
    ///
    /// `search` receives the current query; `item` receives each visible
    /// row with its index and whether it is highlighted. Returns `None` while
    /// Closed.
    pub fn compose<'s, 'v, V, R>(
        &'s self,
        visible: &'v [Item<V>],
        search: impl FnOnce(&'s str) -> R,
        mut item: impl FnMut(usize, &'v Item<V>, bool) -> R,
    ) -> Option<PickerView<R>> {
        if !self.state.is_open {
            return None;
        }
        Some(PickerView {
            search: search(&self.state.query),
            items: visible
                .iter()
                .enumerate()
                .map(|(i, it)| item(i, it, self.state.active_index == Some(i)))
                .collect(),
        })
    }

    fn close(&mut self) {
        self.state.is_open = false;
        self.state.query.clear();
        self.state.active_index = None;
        self.release();
    }

    fn acquire(&mut self) {
        if self.watch.is_none() {
            self.watch = Some(self.pointer.watch(self.region));
        }
    }

    fn release(&mut self) {
        if let Some(mut watch) = self.watch.take() {
            watch.release();
        }
    }
}

impl Drop for SelectionController {
    fn drop(&mut self) {
        self.release();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingEvents, controller};
    use super::*;

    fn item(code: &str) -> Item<String> {
        Item::new(code, code, code.to_string(), "")
    }

    #[test]
    fn test_initially_closed_without_observer() {
        let (picker, log) = controller();
        assert!(!picker.is_open());
        assert!(!picker.is_watching());
        assert!(log.borrow().acquired.is_empty());
    }

    #[test]
    fn test_toggle_open_resets_query_and_acquires() {
        let (mut picker, log) = controller();
        picker.toggle(&mut RecordingEvents::default());
        assert!(picker.is_open());
        assert_eq!(picker.query(), "");
        assert_eq!(picker.active_index(), None);
        assert_eq!(log.borrow().acquired, vec![RegionId(1)]);
    }

    #[test]
    fn test_toggle_close_clears_query_and_releases() {
        let (mut picker, log) = controller();
        let mut events = RecordingEvents::default();
        picker.toggle(&mut events);
        picker.set_query("et", &mut events);
        assert_eq!(events.restores, 0);
        picker.toggle(&mut events);
        assert!(!picker.is_open());
        assert_eq!(picker.query(), "");
        assert_eq!(events.restores, 1);
        assert_eq!(events.closes, 0);
        assert_eq!(log.borrow().released, vec![RegionId(1)]);
    }

    #[test]
    fn test_select_item_closes_and_fires_once() {
        let (mut picker, log) = controller();
        let mut events = RecordingEvents::default();
        picker.toggle(&mut events);
        picker.set_query("at", &mut events);
        picker.select_item(&item("ATOM"), &mut events);

        assert!(!picker.is_open());
        assert_eq!(picker.query(), "");
        assert_eq!(picker.active_index(), None);
        assert_eq!(events.selected, vec!["ATOM".to_string()]);
        assert_eq!(events.restores, 1);
        assert_eq!(log.borrow().released.len(), 1);
    }

    #[test]
    fn test_select_while_closed_is_ignored() {
        let (mut picker, _log) = controller();
        let mut events = RecordingEvents::default();
        picker.select_item(&item("ETH"), &mut events);
        assert!(events.selected.is_empty());
        assert_eq!(events.restores, 0);
    }

    #[test]
    fn test_outside_interaction_while_closed_has_no_effect() {
        let (mut picker, log) = controller();
        let mut events = RecordingEvents::default();
        picker.on_outside_interaction(&mut events);
        assert_eq!(picker.state(), &SelectionState::default());
        assert_eq!(events.closes, 0);
        assert_eq!(events.restores, 0);
        assert!(log.borrow().released.is_empty());
    }

    #[test]
    fn test_outside_interaction_closes_and_restores() {
        let (mut picker, log) = controller();
        let mut events = RecordingEvents::default();
        picker.toggle(&mut events);
        picker.set_query("zil", &mut events);
        picker.on_outside_interaction(&mut events);

        assert!(!picker.is_open());
        assert_eq!(picker.query(), "");
        assert_eq!(events.closes, 1);
        assert_eq!(events.restores, 1);
        assert!(events.selected.is_empty());
        assert_eq!(log.borrow().released.len(), 1);
    }

    #[test]
    fn test_one_observer_per_open_session() {
        let (mut picker, log) = controller();
        let mut events = RecordingEvents::default();
        for _ in 0..3 {
            picker.toggle(&mut events);
            picker.on_outside_interaction(&mut events);
        }
        let log = log.borrow();
        assert_eq!(log.acquired.len(), 3);
        assert_eq!(log.released.len(), 3);
    }

    #[test]
    fn test_drop_while_open_releases() {
        let (mut picker, log) = controller();
        picker.toggle(&mut RecordingEvents::default());
        drop(picker);
        assert_eq!(log.borrow().released, vec![RegionId(1)]);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut picker, log) = controller();
        picker.toggle(&mut RecordingEvents::default());
        picker.stop();
        picker.stop();
        drop(picker);
        assert_eq!(log.borrow().released.len(), 1);
        assert_eq!(log.borrow().acquired.len(), 1);
    }

    #[test]
    fn test_new_open_acquires_on_start() {
        let pointer = super::testing::RecordingPointer::default();
        let log = Rc::clone(&pointer.log);
        let mut picker = SelectionController::new_open(RegionId(7), Rc::new(pointer));
        assert!(picker.is_open());
        assert!(!picker.is_watching());
        picker.start();
        picker.start();
        assert!(picker.is_watching());
        assert_eq!(log.borrow().acquired, vec![RegionId(7)]);
    }

    #[test]
    fn test_set_query_reports_and_resets_highlight() {
        let (mut picker, _log) = controller();
        let mut events = RecordingEvents::default();
        picker.toggle(&mut events);
        picker.highlight_next(3);
        picker.set_query("a", &mut events);
        assert_eq!(picker.active_index(), None);
        assert_eq!(events.searches, vec!["a".to_string()]);
    }

    #[test]
    fn test_set_query_while_closed_is_ignored() {
        let (mut picker, _log) = controller();
        let mut events = RecordingEvents::default();
        picker.set_query("a", &mut events);
        assert_eq!(picker.query(), "");
        assert!(events.searches.is_empty());
    }

    #[test]
    fn test_highlight_wraps() {
        let (mut picker, _log) = controller();
        picker.toggle(&mut RecordingEvents::default());
        picker.highlight_previous(3);
        assert_eq!(picker.active_index(), Some(2));
        picker.highlight_next(3);
        assert_eq!(picker.active_index(), Some(0));
        picker.highlight_next(3);
        assert_eq!(picker.active_index(), Some(1));
    }

    #[test]
    fn test_select_highlighted() {
        let (mut picker, _log) = controller();
        let mut events = RecordingEvents::default();
        let visible = vec![item("ETH"), item("ATOM")];
        picker.toggle(&mut events);
        assert!(!picker.select_highlighted(&visible, &mut events));
        picker.highlight_next(visible.len());
        picker.highlight_next(visible.len());
        assert!(picker.select_highlighted(&visible, &mut events));
        assert_eq!(events.selected, vec!["ATOM".to_string()]);
    }

    #[test]
    fn test_compose_only_while_open() {
        let (mut picker, _log) = controller();
        let visible = vec![item("ETH"), item("ATOM")];
        let closed = picker.compose(&visible, str::to_string, |_, it, _| it.label.clone());
        assert!(closed.is_none());

        picker.toggle(&mut RecordingEvents::default());
        picker.highlight_next(visible.len());
        let view = picker
            .compose(&visible, |q| format!("search:{q}"), |i, it, hl| {
                format!("{i}:{}:{hl}", it.label)
            })
            .unwrap();
        assert_eq!(view.search, "search:");
        assert_eq!(view.items, vec!["0:ETH:true", "1:ATOM:false"]);
    }
}
