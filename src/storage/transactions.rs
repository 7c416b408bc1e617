//! Transaction repository for delimited text storage
//!
//! Manages loading and saving the ordered transaction list to the
//! transactions file. Line layout: `kind;amount;category;goalName`, where
//! the goal field may be missing on lines written by older versions.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::models::{Money, Transaction, TransactionKind};

use super::delimited::{parse_records, DelimitedRecord};
use super::file_io::{read_lines, write_lines_atomic};

impl DelimitedRecord for Transaction {
    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let (kind, amount, category, goal_name) = match fields {
            [kind, amount, category] => (*kind, *amount, *category, ""),
            [kind, amount, category, goal_name] => (*kind, *amount, *category, *goal_name),
            _ => return Err(format!("expected 3 or 4 fields, found {}", fields.len())),
        };

        let kind = TransactionKind::parse(kind)
            .ok_or_else(|| format!("unknown transaction kind '{}'", kind))?;
        let amount = Money::parse(amount).map_err(|e| e.to_string())?;
        if amount.is_negative() {
            return Err(format!("negative amount {}", amount));
        }

        Ok(Transaction::new(kind, amount, category).with_goal(goal_name))
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.kind.ledger_token().to_string(),
            self.amount.to_string(),
            self.category.clone(),
            self.goal_name.clone(),
        ]
    }
}

/// Repository for transaction persistence
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    path: PathBuf,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load transactions, failing on unreadable files or malformed lines
    pub fn try_load(&self) -> LedgerResult<Vec<Transaction>> {
        match read_lines(&self.path)? {
            Some(lines) => parse_records(&self.path, &lines),
            None => Ok(Vec::new()),
        }
    }

    /// Load transactions, never failing
    ///
    /// Any error discards the whole file's contents and is logged.
    pub fn load(&self) -> Vec<Transaction> {
        match self.try_load() {
            Ok(transactions) => {
                debug!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded transactions"
                );
                transactions
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding transactions file contents"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the transactions file
    pub fn save(&self, transactions: &[Transaction]) -> LedgerResult<()> {
        write_lines_atomic(&self.path, transactions.iter().map(|t| t.to_line()))?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}
