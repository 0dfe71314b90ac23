//! Message handlers organized by domain
//!
//! Each submodule owns the handlers for one part of the window; `update()`
//! in `app/mod.rs` only dispatches.

pub mod converter;
pub mod picker;
pub mod prices;
pub mod ui_state;
pub mod wallet;

#[cfg(test)]
pub mod test_utils;

// Re-export all handlers for clean imports in app/mod.rs
pub(crate) use converter::*;
pub(crate) use picker::*;
pub(crate) use prices::*;
pub(crate) use ui_state::*;
pub(crate) use wallet::*;
