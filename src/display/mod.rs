//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger entries and goals for the
//! terminal.

pub mod goal;
pub mod transaction;

pub use goal::{format_goal_list, format_goal_row, format_progress_bar};
pub use transaction::{format_transaction_register, format_transaction_row};
