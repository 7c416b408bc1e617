//! Transaction model
//!
//! Represents a single income or expense entry in the ledger, optionally
//! labelled with the name of the savings goal it relates to.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in ("Entrada")
    Income,
    /// Money going out ("Saída")
    Expense,
}

impl TransactionKind {
    /// Token used in the transactions file
    pub const fn ledger_token(&self) -> &'static str {
        match self {
            Self::Income => "Entrada",
            Self::Expense => "Saída",
        }
    }

    /// Parse a kind from a string
    ///
    /// Accepts the ledger tokens case-insensitively ("Entrada", "Saída",
    /// "Saida") as well as "income" and "expense".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "entrada" | "income" | "in" => Some(Self::Income),
            "saída" | "saida" | "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [TransactionKind] {
        &[Self::Income, Self::Expense]
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ledger_token())
    }
}

/// A ledger entry
///
/// Transactions are immutable once created; the ledger only ever appends
/// or removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,

    /// Always non-negative; the sign comes from `kind`
    pub amount: Money,

    /// Free-text category label
    pub category: String,

    /// Name of the related goal, empty if none
    #[serde(default)]
    pub goal_name: String,
}

impl Transaction {
    /// Create a new transaction with no goal reference
    pub fn new(kind: TransactionKind, amount: Money, category: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            goal_name: String::new(),
        }
    }

    pub fn income(amount: Money, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Income, amount, category)
    }

    pub fn expense(amount: Money, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Expense, amount, category)
    }

    /// Attach a goal name to this transaction
    pub fn with_goal(mut self, goal_name: impl Into<String>) -> Self {
        self.goal_name = goal_name.into();
        self
    }

    /// Amount with the sign implied by the kind
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn references_goal(&self) -> bool {
        !self.goal_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tokens() {
        assert_eq!(TransactionKind::Income.ledger_token(), "Entrada");
        assert_eq!(TransactionKind::Expense.ledger_token(), "Saída");
        assert_eq!(TransactionKind::Expense.to_string(), "Saída");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("Entrada"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("ENTRADA"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("Saída"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("SAÍDA"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("saida"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("transfer"), None);
        assert_eq!(TransactionKind::parse(""), None);
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::income(Money::from_cents(100000), "Salário");
        let expense = Transaction::expense(Money::from_cents(30000), "Aluguel");

        assert_eq!(income.signed_amount().cents(), 100000);
        assert_eq!(expense.signed_amount().cents(), -30000);
    }

    #[test]
    fn test_goal_reference() {
        let plain = Transaction::expense(Money::from_cents(100), "Compras");
        assert!(!plain.references_goal());

        let tagged = plain.with_goal("Viagem");
        assert!(tagged.references_goal());
        assert_eq!(tagged.goal_name, "Viagem");
    }
}
