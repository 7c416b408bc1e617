//! Storage layer for the savings ledger
//!
//! Persists the ledger as two semicolon-delimited text files, written
//! atomically, with automatic directory creation.

pub mod delimited;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use delimited::{DelimitedRecord, DELIMITER};
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::LedgerState;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load the whole ledger from disk
    ///
    /// Never fails: each file that cannot be read or parsed contributes an
    /// empty collection and a warning.
    pub fn load_all(&self) -> LedgerState {
        LedgerState::with_data(self.transactions.load(), self.goals.load())
    }

    /// Save the whole ledger to disk
    pub fn save_all(&self, state: &LedgerState) -> Result<(), LedgerError> {
        self.transactions.save(&state.transactions)?;
        self.goals.save(&state.goals)?;
        Ok(())
    }
}
