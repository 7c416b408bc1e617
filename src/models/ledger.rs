//! In-memory ledger state
//!
//! `LedgerState` owns everything the engine operates on. It is passed
//! explicitly to each service, so independent ledgers can coexist.

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::money::Money;
use super::transaction::Transaction;

/// The ordered transaction list plus the goal collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Transactions in insertion order
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(transactions: Vec<Transaction>, goals: Vec<Goal>) -> Self {
        Self {
            transactions,
            goals,
        }
    }

    /// Find a goal by exact name; the first match wins on duplicates
    pub fn find_goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name == name)
    }

    /// Current balance of all transactions
    pub fn balance(&self) -> Money {
        crate::services::compute_balance(&self.transactions)
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.goals.is_empty()
    }
}
