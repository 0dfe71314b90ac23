//! tokswap - token price converter and wallet viewer
//!
//! A searchable currency picker, a cross-rate converter and a prioritised
//! wallet balance list, driven by a live price feed.
//!
//! # Architecture
//!
//! - [`core`] - Picker state machine, filtering, price tables, conversion and
//!   the derived balance pipeline
//! - [`config`] - Configuration persistence
//! - [`utils`] - Utility functions (XDG directories, etc.)
//!
//! The desktop host and the command line live in the binary and only drive
//! the types exported here.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export commonly used types
pub use core::convert::{ConversionRequest, Quote};
pub use core::error::{Error, Result};
pub use core::item::Item;
pub use core::prices::PriceTable;
pub use core::selection::{SelectionController, SelectionEvents};
