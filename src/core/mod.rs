//! Headless token-swap functionality
//!
//! Everything here runs without a window and is shared by the desktop host
//! and the command line:
//!
//! - [`item`]: selectable entries and icon references
//! - [`filter`]: case-insensitive label filtering
//! - [`candidates`]: the source list plus its current narrowing
//! - [`selection`]: the open/closed picker controller and its outside-pointer seam
//! - [`prices`]: price records collapsed into a lookup table
//! - [`feed`]: HTTP/file price loading and stale-result gating
//! - [`convert`]: cross-rate conversion and amount validation
//! - [`swap`]: the converter form built from two pickers
//! - [`pipeline`]: derived balance list with versioned inputs and memoization
//! - [`wallet`]: balance entries and price-aware wallet rows
//! - [`error`]: error types shared across the crate

pub mod candidates;
pub mod convert;
pub mod error;
pub mod feed;
pub mod filter;
pub mod item;
pub mod pipeline;
pub mod prices;
pub mod selection;
pub mod swap;
pub mod wallet;
