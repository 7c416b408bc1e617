//! Core data models for the savings ledger
//!
//! This module contains the data structures of the ledger domain:
//! money amounts, transactions, savings goals, the category table and the
//! in-memory ledger state that ties them together.

pub mod category;
pub mod goal;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use category::{allowed_categories, is_goal_funding, GOAL_FUNDING_CATEGORY, OTHER_CATEGORY};
pub use goal::Goal;
pub use ledger::LedgerState;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
