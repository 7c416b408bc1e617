//! Balance computation
//!
//! The balance is always derived from the transaction list, never stored.
//! Goal funding is recorded as an expense, so money moved into a goal leaves
//! the balance through the same path as any other spending.

use crate::models::{Money, Transaction};

/// Sum of income amounts minus sum of expense amounts
///
/// Order-independent and pure; an empty slice yields zero.
pub fn compute_balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}
