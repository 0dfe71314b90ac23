//! Externally-owned candidate list for a picker
//!
//! Holds the unfiltered source snapshot and the currently narrowed view. The
//! selection controller never owns this list; it only asks its host to
//! narrow or restore it.

use super::filter::filter;
use super::item::Item;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CandidateList<V> {
    source: Arc<[Item<V>]>,
    /// Query behind `narrowed`; empty while the full source is shown.
    query: String,
    /// `None` while the full source is shown.
    narrowed: Option<Vec<Item<V>>>,
}

impl<V> Default for CandidateList<V> {
    fn default() -> Self {
        Self {
            source: Arc::from(Vec::new()),
            query: String::new(),
            narrowed: None,
        }
    }
}

impl<V: Clone> CandidateList<V> {
    pub fn new(source: impl Into<Arc<[Item<V>]>>) -> Self {
        Self {
            source: source.into(),
            query: String::new(),
            narrowed: None,
        }
    }

    /// Replaces the source snapshot. An active query is applied to the new
    /// source so the view keeps matching the picker's search text.
    pub fn set_source(&mut self, source: impl Into<Arc<[Item<V>]>>) {
        self.source = source.into();
        let query = std::mem::take(&mut self.query);
        self.apply_query(&query);
    }

    /// Narrows the visible list to `query`; an empty query shows everything.
    pub fn apply_query(&mut self, query: &str) {
        self.narrowed = match filter(&*self.source, query) {
            Cow::Borrowed(_) => None,
            Cow::Owned(items) => Some(items),
        };
        query.clone_into(&mut self.query);
    }

    /// Shows the unfiltered source again.
    pub fn restore(&mut self) {
        self.query.clear();
        self.narrowed = None;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The list currently shown to the user.
    pub fn visible(&self) -> &[Item<V>] {
        self.narrowed.as_deref().unwrap_or(&*self.source)
    }

    pub fn source(&self) -> &[Item<V>] {
        &self.source
    }

    pub fn is_narrowed(&self) -> bool {
        self.narrowed.is_some()
    }

    pub fn find(&self, key: &str) -> Option<&Item<V>> {
        self.visible().iter().find(|item| item.key == key)
    }
}
