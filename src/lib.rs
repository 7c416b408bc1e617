//! Savings Ledger - personal finance ledger with savings goals
//!
//! This library records income and expense transactions, derives a running
//! balance from them and lets the user move money from that balance into
//! savings goals. The whole ledger persists as two semicolon-delimited text
//! files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goals, categories)
//! - `storage`: Flat-file storage layer
//! - `services`: Business logic layer (recording, balance, goal funding)
//! - `reports`: Read-only summaries
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use savings_ledger::config::LedgerPaths;
//! use savings_ledger::models::Money;
//! use savings_ledger::services::GoalService;
//! use savings_ledger::storage::Storage;
//!
//! let storage = Storage::new(LedgerPaths::new()?)?;
//! let mut state = storage.load_all();
//! let allocation = GoalService::new(&mut state).fund("Viagem", Money::from_cents(50_000))?;
//! storage.save_all(&state)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
