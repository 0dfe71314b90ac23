//! Wallet balances and the rows derived from them

use super::error::Result;
use super::pipeline::{
    DerivedBalance, InputsKey, Memo, PriorityTable, Versioned, derive_balances,
};
use super::prices::PriceTable;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A raw balance as fetched. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub blockchain: String,
    pub currency: String,
    pub amount: Decimal,
}

impl BalanceEntry {
    pub fn new(blockchain: impl Into<String>, currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            blockchain: blockchain.into(),
            currency: currency.into(),
            amount,
        }
    }
}

/// The demo wallet shipped with the app.
pub fn sample_balances() -> Vec<BalanceEntry> {
    vec![
        BalanceEntry::new("Ethereum", "ETH", dec!(3)),
        BalanceEntry::new("Osmosis", "ATOM", dec!(10)),
        BalanceEntry::new("Arbitrum", "USDT", dec!(5)),
        BalanceEntry::new("Zilliqa", "ZIL", dec!(0)),
        BalanceEntry::new("Neo", "NEO", dec!(8)),
    ]
}

/// Prices matching [`sample_balances`], for offline use.
pub fn sample_prices() -> PriceTable {
    PriceTable::from_pairs([
        ("ETH", dec!(3000)),
        ("ATOM", dec!(20)),
        ("USDT", dec!(1)),
        ("ZIL", dec!(0.1)),
        ("NEO", dec!(50)),
    ])
}

pub fn default_priorities() -> PriorityTable {
    [
        ("Osmosis", 100),
        ("Ethereum", 50),
        ("Arbitrum", 30),
        ("Zilliqa", 20),
        ("Neo", 20),
    ]
    .into_iter()
    .collect()
}

/// Reads a JSON array of balances.
pub async fn load_balances(path: &Path) -> Result<Vec<BalanceEntry>> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

/// One displayed wallet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRow {
    pub balance: DerivedBalance,
    /// `None` when the currency has no known price.
    pub usd_value: Option<Decimal>,
}

impl WalletRow {
    pub fn usd_display(&self) -> String {
        self.usd_value
            .map_or_else(|| "n/a".to_string(), |v| format!("${}", super::convert::round_money(v)))
    }
}

/// Price-aware rows for a derived balance list.
pub fn wallet_rows(derived: &[DerivedBalance], prices: &PriceTable) -> Vec<WalletRow> {
    derived
        .iter()
        .map(|balance| WalletRow {
            usd_value: prices.get(balance.currency()).map(|p| p * balance.amount()),
            balance: balance.clone(),
        })
        .collect()
}

/// Inputs of the wallet list plus the cached rows computed from them.
#[derive(Debug, Default)]
pub struct WalletView {
    balances: Versioned<Vec<BalanceEntry>>,
    priorities: Versioned<PriorityTable>,
    prices: Versioned<PriceTable>,
    rows: Memo<InputsKey, Vec<WalletRow>>,
}

impl WalletView {
    pub fn new(balances: Vec<BalanceEntry>, priorities: PriorityTable) -> Self {
        Self {
            balances: Versioned::new(balances),
            priorities: Versioned::new(priorities),
            ..Self::default()
        }
    }

    pub fn set_balances(&mut self, balances: Vec<BalanceEntry>) {
        self.balances.replace(balances);
    }

    pub fn set_prices(&mut self, prices: Versioned<PriceTable>) {
        self.prices = prices;
    }

    pub fn balances(&self) -> &[BalanceEntry] {
        self.balances.get()
    }

    pub fn key(&self) -> InputsKey {
        InputsKey {
            source: self.balances.version(),
            priorities: self.priorities.version(),
            prices: self.prices.version(),
        }
    }

    /// Current rows; recomputed only when an input snapshot changed.
    pub fn rows(&mut self) -> Arc<Vec<WalletRow>> {
        let key = self.key();
        let (balances, priorities, prices) = (
            self.balances.shared(),
            self.priorities.shared(),
            self.prices.shared(),
        );
        self.rows.get_or_compute(key, || {
            tracing::debug!("Recomputing wallet rows for {:?}", key);
            wallet_rows(&derive_balances(&balances, &priorities), &prices)
        })
    }

    /// Rows cached for the current inputs, without computing.
    pub fn cached_rows(&self) -> Option<Arc<Vec<WalletRow>>> {
        self.rows.peek(self.key())
    }

    pub fn total_usd(&mut self) -> Decimal {
        self.rows().iter().filter_map(|r| r.usd_value).sum()
    }

    pub fn recomputations(&self) -> u64 {
        self.rows.computations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_wallet_rows() {
        let mut view = WalletView::new(sample_balances(), default_priorities());
        view.set_prices(Versioned::new(sample_prices()));
        let rows = view.rows();

        let currencies: Vec<_> = rows.iter().map(|r| r.balance.currency()).collect();
        // ZIL is dropped for its zero balance
        assert_eq!(currencies, vec!["ATOM", "ETH", "USDT", "NEO"]);
        assert_eq!(rows[0].usd_value, Some(dec!(200)));
        assert_eq!(rows[1].balance.formatted_amount, "3.00");
    }

    #[test]
    fn test_missing_price_is_unavailable() {
        let mut view = WalletView::new(sample_balances(), default_priorities());
        let rows = view.rows();
        assert!(rows.iter().all(|r| r.usd_value.is_none()));
        assert_eq!(rows[0].usd_display(), "n/a");
    }

    #[test]
    fn test_usd_display_two_decimals() {
        let mut view = WalletView::new(sample_balances(), default_priorities());
        view.set_prices(Versioned::new(sample_prices()));
        assert_eq!(view.rows()[0].usd_display(), "$200.00");
    }

    #[test]
    fn test_rows_memoized_until_input_changes() {
        let mut view = WalletView::new(sample_balances(), default_priorities());
        let _ = view.rows();
        let _ = view.rows();
        assert_eq!(view.recomputations(), 1);
        assert!(view.cached_rows().is_some());

        view.set_prices(Versioned::new(sample_prices()));
        assert!(view.cached_rows().is_none());
        let _ = view.rows();
        assert_eq!(view.recomputations(), 2);

        view.set_balances(sample_balances());
        let _ = view.rows();
        assert_eq!(view.recomputations(), 3);
    }

    #[test]
    fn test_total_usd() {
        let mut view = WalletView::new(sample_balances(), default_priorities());
        view.set_prices(Versioned::new(sample_prices()));
        // 200 + 9000 + 5 + 400
        assert_eq!(view.total_usd(), dec!(9605));
    }

    #[tokio::test]
    async fn test_load_balances_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(
            &path,
            r#"[{"blockchain":"Osmosis","currency":"ATOM","amount":10.5}]"#,
        )
        .unwrap();
        let balances = load_balances(&path).await.unwrap();
        assert_eq!(balances, vec![BalanceEntry::new("Osmosis", "ATOM", dec!(10.5))]);
    }
}
