//! Service layer for the savings ledger
//!
//! The service layer is the finance engine: it applies validation and the
//! goal-funding rules to an explicit [`LedgerState`](crate::models::LedgerState).
//! Services never touch the disk; persisting is up to the caller.

pub mod balance;
pub mod goal;
pub mod transaction;

pub use balance::compute_balance;
pub use goal::{Allocation, GoalService};
pub use transaction::{parse_amount, CreateTransactionInput, RecordOutcome, TransactionService};
