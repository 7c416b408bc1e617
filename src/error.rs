//! Custom error types for the savings ledger
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (permissions, full disk, ...)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Amount text that is not a finite, non-negative number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A required input field was absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No goal with the given name exists
    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    /// The goal has no room left for funding
    #[error("Goal already reached: {0}")]
    GoalAlreadyReached(String),

    /// Nothing available in the balance to move into a goal
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Money, available: Money },

    /// Position outside the transaction list
    #[error("Index {index} out of range for ledger of {len} transactions")]
    IndexOutOfRange { index: usize, len: usize },

    /// A malformed line in one of the ledger files
    #[error("Parse error in {path} at line {line}: {reason}")]
    FileParse {
        path: String,
        line: usize,
        reason: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a parse error for a line of a ledger file
    pub fn file_parse(path: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::FileParse {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is an input error the user can correct and retry
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount(_) | Self::MissingField(_))
    }

    /// Check if this is an engine failure that left the ledger untouched
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::MissingField(_)
                | Self::GoalNotFound(_)
                | Self::GoalAlreadyReached(_)
                | Self::InsufficientBalance { .. }
                | Self::IndexOutOfRange { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
