//! Selectable items and icon locators

use serde::{Deserialize, Serialize};

/// A candidate in a selectable list.
///
/// `key` is unique within one list snapshot; `label` is what the filter
/// matches against; `value` is handed to the selection callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item<V> {
    pub key: String,
    pub label: String,
    pub value: V,
    pub icon_ref: String,
}

impl<V> Item<V> {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value: V,
        icon_ref: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
            icon_ref: icon_ref.into(),
        }
    }
}

/// Maps a currency code onto a display resource locator.
///
/// The locator is only ever handed to the renderer; it is not fetched or
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResolver {
    base_url: String,
}

impl IconResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn resolve(&self, currency: &str) -> String {
        format!("{}{currency}.svg", self.base_url)
    }
}
