//! Configuration module for the savings ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{LedgerPaths, DATA_DIR_ENV};
pub use settings::Settings;
