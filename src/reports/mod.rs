//! Reports module for the savings ledger
//!
//! Provides read-only views computed from the ledger state.

pub mod summary;

pub use summary::{CategoryTotal, LedgerSummary};
