//! Case-insensitive substring filtering of candidate lists

use super::item::Item;
use std::borrow::Cow;

/// Narrows `items` to those whose label contains `query`, ignoring case.
///
/// An empty query hands back the input slice itself, so the unfiltered view
/// keeps its order and allocation. Otherwise the result is a subsequence of
/// `items` in original order; an empty result is a normal outcome.
pub fn filter<'a, V: Clone>(items: &'a [Item<V>], query: &str) -> Cow<'a, [Item<V>]> {
    if query.is_empty() {
        return Cow::Borrowed(items);
    }

    let needle = query.to_lowercase();
    Cow::Owned(
        items
            .iter()
            .filter(|item| item.label.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}
