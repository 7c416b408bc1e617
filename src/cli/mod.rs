//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer. Every
//! mutating command loads the ledger, applies one service call and saves.

pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_balance_command, handle_categories_command, handle_report_command};
pub use transaction::{handle_transaction_command, parse_kind, TransactionCommands};
