//! Price feed access and fetch bookkeeping
//!
//! The feed is a one-shot read of a JSON array of [`PriceRecord`]s. Results
//! become immutable [`Versioned`] snapshots; a [`FetchGate`] decides whether a
//! finished fetch may still be applied.

use super::error::{FetchError, Result};
use super::pipeline::Versioned;
use super::prices::{PriceRecord, PriceTable};
use std::path::Path;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Reads the feed over HTTP.
pub async fn fetch_records(url: &str) -> std::result::Result<Vec<PriceRecord>, FetchError> {
    tracing::info!("Fetching prices from {url}");
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Price feed answered {status}");
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_records(&body)
}

/// Reads the feed and collapses it into a price table.
pub async fn fetch_table(url: &str) -> std::result::Result<PriceTable, FetchError> {
    let records = fetch_records(url).await?;
    let table = PriceTable::from_records(&records);
    if table.is_empty() {
        return Err(FetchError::Empty);
    }
    tracing::info!("Loaded {} prices from {} records", table.len(), records.len());
    Ok(table)
}

pub fn parse_records(json: &str) -> std::result::Result<Vec<PriceRecord>, FetchError> {
    serde_json::from_str(json).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Loads a feed dump saved to disk.
pub async fn load_table_from_file(path: &Path) -> Result<PriceTable> {
    let json = tokio::fs::read_to_string(path).await?;
    let records = parse_records(&json)?;
    let table = PriceTable::from_records(&records);
    if table.is_empty() {
        return Err(FetchError::Empty.into());
    }
    Ok(table)
}

/// Identifies one fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Tracks the fetch a consumer is waiting on.
///
/// Only the most recently issued ticket is accepted, and nothing is accepted
/// after [`FetchGate::close`].
#[derive(Debug, Default)]
pub struct FetchGate {
    issued: u64,
    pending: Option<u64>,
    closed: bool,
}

impl FetchGate {
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        FetchTicket(self.issued)
    }

    /// Consumes the pending slot if `ticket` is current.
    pub fn accept(&mut self, ticket: FetchTicket) -> bool {
        if self.closed || self.pending != Some(ticket.0) {
            tracing::debug!("Discarding stale fetch result #{}", ticket.0);
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some() && !self.closed
    }

    /// The consumer is going away; late results are dropped.
    pub fn close(&mut self) {
        self.closed = true;
        self.pending = None;
    }
}

/// Wraps a freshly fetched table as a new immutable snapshot.
pub fn publish(table: PriceTable) -> Versioned<PriceTable> {
    Versioned::new(table)
}
