//! Export module for the savings ledger
//!
//! Provides spreadsheet-friendly CSV export of transactions and goals.

pub mod csv;

pub use self::csv::{export_goals_csv, export_transactions_csv};
