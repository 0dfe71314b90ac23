//! Derived-list pipeline and its memoization table
//!
//! Balances go through four stages before display:
//!
//! 1. enrich with a priority looked up by blockchain (sentinel when unmapped)
//! 2. drop sentinel-priority and non-positive entries
//! 3. stable sort by descending priority
//! 4. attach the two-decimal amount text
//!
//! Inputs are held as [`Versioned`] snapshots; a [`Memo`] recomputes only
//! when the combined [`InputsKey`] changes.

use super::convert::round_money;
use super::wallet::BalanceEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Rank given to blockchains missing from the priority table.
pub const SENTINEL_PRIORITY: i32 = -99;

/// Blockchain name → display rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTable(BTreeMap<String, i32>);

impl PriorityTable {
    pub fn new(map: BTreeMap<String, i32>) -> Self {
        Self(map)
    }

    pub fn priority(&self, blockchain: &str) -> i32 {
        self.0.get(blockchain).copied().unwrap_or(SENTINEL_PRIORITY)
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for PriorityTable {
    fn from_iter<T: IntoIterator<Item = (S, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A balance ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedBalance {
    pub entry: BalanceEntry,
    pub priority: i32,
    pub formatted_amount: String,
}

impl DerivedBalance {
    pub fn currency(&self) -> &str {
        &self.entry.currency
    }

    pub fn amount(&self) -> Decimal {
        self.entry.amount
    }
}

/// Runs all four stages over `source`. The source is left untouched.
pub fn derive_balances(source: &[BalanceEntry], priorities: &PriorityTable) -> Vec<DerivedBalance> {
    let mut ranked: Vec<(BalanceEntry, i32)> = source
        .iter()
        .map(|entry| (entry.clone(), priorities.priority(&entry.blockchain)))
        .filter(|(entry, priority)| *priority > SENTINEL_PRIORITY && entry.amount > Decimal::ZERO)
        .collect();

    // sort_by_key is stable: equal priorities keep their post-filter order
    ranked.sort_by_key(|(_, priority)| Reverse(*priority));

    ranked
        .into_iter()
        .map(|(entry, priority)| DerivedBalance {
            formatted_amount: format_amount(entry.amount),
            entry,
            priority,
        })
        .collect()
}

/// Two digits after the point, half rounded away from zero.
pub fn format_amount(amount: Decimal) -> String {
    round_money(amount).to_string()
}

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// An immutable input snapshot tagged with a process-unique version.
///
/// Replacing the value always yields a new version, so a version equality
/// check stands in for a structural comparison of the data.
#[derive(Debug)]
pub struct Versioned<T> {
    version: u64,
    value: Arc<T>,
}

impl<T> Clone for Versioned<T> {
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: Default> Default for Versioned<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Versioned<T> {
    pub fn new(value: T) -> Self {
        Self {
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
            value: Arc::new(value),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn shared(&self) -> Arc<T> {
        Arc::clone(&self.value)
    }

    /// Publishes a new value under a new version.
    pub fn replace(&mut self, value: T) {
        *self = Self::new(value);
    }
}

/// Versions of every input a derived list depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputsKey {
    pub source: u64,
    pub priorities: u64,
    pub prices: u64,
}

/// Single-slot memoization table.
#[derive(Debug)]
pub struct Memo<K, T> {
    slot: Option<(K, Arc<T>)>,
    computations: u64,
}

impl<K, T> Default for Memo<K, T> {
    fn default() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq + Copy, T> Memo<K, T> {
    /// Returns the cached value for `key`, computing it on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> T) -> Arc<T> {
        if let Some((cached_key, value)) = &self.slot
            && *cached_key == key
        {
            return Arc::clone(value);
        }
        let value = Arc::new(compute());
        self.computations += 1;
        self.slot = Some((key, Arc::clone(&value)));
        value
    }

    /// Cached value, if it was computed for `key`.
    pub fn peek(&self, key: K) -> Option<Arc<T>> {
        self.slot
            .as_ref()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| Arc::clone(v))
    }

    pub fn computations(&self) -> u64 {
        self.computations
    }
}
