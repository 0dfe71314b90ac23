//! USD price snapshots built from the price feed

use super::item::{IconResolver, Item};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record as published by the price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: String,
    pub date: String,
    pub price: f64,
}

impl PriceRecord {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Currency code → positive USD price. Absent means unknown, never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<String, Decimal>,
}

impl PriceTable {
    /// Collapses a feed sequence into one price per currency.
    ///
    /// The record with the latest `date` wins, and equal dates go to the
    /// record appearing later in the sequence. A record with an unreadable
    /// date only wins while no dated record for its currency has been seen.
    /// Records with non-finite or non-positive prices are skipped.
    pub fn from_records(records: &[PriceRecord]) -> Self {
        let mut chosen: BTreeMap<&str, (Option<DateTime<Utc>>, Decimal)> = BTreeMap::new();

        for record in records {
            let Some(price) = Decimal::from_f64(record.price).filter(|p| p.is_sign_positive() && !p.is_zero())
            else {
                tracing::debug!("Skipping unusable price for {}: {}", record.currency, record.price);
                continue;
            };
            let stamp = record.timestamp();

            // The stored stamp is the latest parsed date seen so far
            let best = chosen.get(record.currency.as_str()).and_then(|(best, _)| *best);
            match (stamp, best) {
                (Some(s), Some(b)) if s < b => {}
                (None, Some(_)) => {}
                (Some(s), _) => {
                    chosen.insert(record.currency.as_str(), (Some(s), price));
                }
                (None, None) => {
                    chosen.insert(record.currency.as_str(), (None, price));
                }
            }
        }

        Self {
            prices: chosen
                .into_iter()
                .map(|(currency, (_, price))| (currency.to_string(), price))
                .collect(),
        }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            prices: pairs
                .into_iter()
                .filter(|(_, p)| *p > Decimal::ZERO)
                .map(|(c, p)| (c.into(), p))
                .collect(),
        }
    }

    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.prices.get(currency).copied()
    }

    /// Currencies in code order.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    /// One picker entry per priced currency, keyed and labelled by code.
    pub fn currency_items(&self, icons: &IconResolver) -> Vec<Item<String>> {
        self.currencies()
            .map(|code| Item::new(code, code, code.to_string(), icons.resolve(code)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
