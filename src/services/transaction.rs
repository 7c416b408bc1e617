//! Transaction service
//!
//! Provides business logic for appending and removing ledger entries, and
//! the single `record` entry point that routes goal-funding requests to the
//! goal service. None of these operations persist; callers save the ledger
//! after each successful mutation.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{is_goal_funding, LedgerState, Money, Transaction, TransactionKind};

use super::balance::compute_balance;
use super::goal::{Allocation, GoalService};

/// Raw input for a new transaction, as collected by a form or the CLI
#[derive(Debug, Clone, Default)]
pub struct CreateTransactionInput {
    pub kind: Option<TransactionKind>,
    /// Amount as typed; parsed and validated by the service
    pub amount: String,
    pub category: Option<String>,
    pub goal_name: Option<String>,
}

impl CreateTransactionInput {
    pub fn new(
        kind: TransactionKind,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind: Some(kind),
            amount: amount.into(),
            category: Some(category.into()),
            goal_name: None,
        }
    }

    pub fn goal(mut self, goal_name: impl Into<String>) -> Self {
        self.goal_name = Some(goal_name.into());
        self
    }
}

/// What `record` did with an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A plain transaction was appended
    Added(Transaction),
    /// The entry was a goal-funding request
    Funded(Allocation),
}

/// Service for transaction management
pub struct TransactionService<'a> {
    state: &'a mut LedgerState,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(state: &'a mut LedgerState) -> Self {
        Self { state }
    }

    /// Validate and append a new transaction
    pub fn add(&mut self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let kind = input.kind.ok_or(LedgerError::MissingField("kind"))?;
        let amount = parse_amount(&input.amount)?;
        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(LedgerError::MissingField("category"))?;
        let goal_name = input
            .goal_name
            .map(|g| g.trim().to_string())
            .unwrap_or_default();

        let txn = Transaction::new(kind, amount, category).with_goal(goal_name);
        self.state.transactions.push(txn.clone());

        debug!(kind = %txn.kind, amount = %txn.amount, "added transaction");
        Ok(txn)
    }

    /// Remove the transaction at `index`, preserving the order of the rest
    ///
    /// Goal progress is left untouched even when the removed entry was a
    /// goal-funding expense.
    pub fn remove_at(&mut self, index: usize) -> LedgerResult<Transaction> {
        let len = self.state.transactions.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }

        let removed = self.state.transactions.remove(index);
        debug!(index, "removed transaction");
        Ok(removed)
    }

    /// Record an entry the way the entry form submits it
    ///
    /// An income entry in the goal-funding category moves money from the
    /// balance into the named goal; everything else is appended as-is.
    pub fn record(&mut self, input: CreateTransactionInput) -> LedgerResult<RecordOutcome> {
        let is_funding = input.kind == Some(TransactionKind::Income)
            && input.category.as_deref().is_some_and(is_goal_funding);

        if !is_funding {
            return self.add(input).map(RecordOutcome::Added);
        }

        let amount = parse_amount(&input.amount)?;
        let goal_name = input
            .goal_name
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .ok_or(LedgerError::MissingField("goal"))?;

        GoalService::new(&mut *self.state)
            .fund(&goal_name, amount)
            .map(RecordOutcome::Funded)
    }

    pub fn list(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn count(&self) -> usize {
        self.state.transactions.len()
    }

    pub fn balance(&self) -> Money {
        compute_balance(&self.state.transactions)
    }
}

/// Parse user-entered amount text into a non-negative amount
pub fn parse_amount(text: &str) -> LedgerResult<Money> {
    let amount =
        Money::parse(text).map_err(|_| LedgerError::InvalidAmount(text.trim().to_string()))?;
    if amount.is_negative() {
        return Err(LedgerError::InvalidAmount(format!(
            "{} (must not be negative)",
            text.trim()
        )));
    }
    Ok(amount)
}
