//! Ledger Summary Report
//!
//! Totals by kind and category, plus how much of the balance has been moved
//! into goals.

use std::collections::HashMap;

use crate::models::{is_goal_funding, LedgerState, Money, TransactionKind};
use crate::services::compute_balance;

/// Totals for one (kind, category) pair
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub kind: TransactionKind,
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the total for this kind, in percent
    pub percentage: f64,
}

/// Ledger Summary
#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub total_income: Money,
    /// Total of all expenses, goal funding included
    pub total_expenses: Money,
    /// Expenses recorded by goal funding
    pub goal_funding: Money,
    pub balance: Money,
    /// Sum of every goal's accumulated amount
    pub allocated_to_goals: Money,
    pub goals_reached: usize,
    pub goal_count: usize,
    pub transaction_count: usize,
    /// Income categories first, then expenses; each sorted by total descending
    pub categories: Vec<CategoryTotal>,
}

impl LedgerSummary {
    /// Generate a summary of the ledger
    pub fn generate(state: &LedgerState) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut goal_funding = Money::zero();

        // (kind, category) -> (total, count, first position)
        let mut by_category: HashMap<(TransactionKind, &str), (Money, usize, usize)> =
            HashMap::new();

        for (position, txn) in state.transactions.iter().enumerate() {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => {
                    total_expenses += txn.amount;
                    if is_goal_funding(&txn.category) && txn.references_goal() {
                        goal_funding += txn.amount;
                    }
                }
            }

            let entry = by_category
                .entry((txn.kind, txn.category.as_str()))
                .or_insert((Money::zero(), 0, position));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let mut rows: Vec<_> = by_category.into_iter().collect();
        rows.sort_by(|((kind_a, _), (total_a, _, pos_a)), ((kind_b, _), (total_b, _, pos_b))| {
            kind_order(*kind_a)
                .cmp(&kind_order(*kind_b))
                .then(total_b.cmp(total_a))
                .then(pos_a.cmp(pos_b))
        });

        let categories = rows
            .into_iter()
            .map(|((kind, category), (total, count, _))| {
                let kind_total = match kind {
                    TransactionKind::Income => total_income,
                    TransactionKind::Expense => total_expenses,
                };
                CategoryTotal {
                    kind,
                    category: category.to_string(),
                    total,
                    transaction_count: count,
                    percentage: total.ratio(kind_total).map(|r| r * 100.0).unwrap_or(0.0),
                }
            })
            .collect();

        Self {
            total_income,
            total_expenses,
            goal_funding,
            balance: compute_balance(&state.transactions),
            allocated_to_goals: state.goals.iter().map(|g| g.current).sum(),
            goals_reached: state.goals.iter().filter(|g| g.is_reached()).count(),
            goal_count: state.goals.len(),
            transaction_count: state.transactions.len(),
            categories,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("Ledger Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Income:     {:>16}\n", money(self.total_income)));
        output.push_str(&format!("Total Expenses:   {:>16}\n", money(self.total_expenses)));
        output.push_str(&format!("  to goals:       {:>16}\n", money(self.goal_funding)));
        output.push_str(&format!("Balance:          {:>16}\n", money(self.balance)));
        output.push_str(&format!(
            "Goals:            {} ({} reached), {} allocated\n",
            self.goal_count,
            self.goals_reached,
            money(self.allocated_to_goals)
        ));
        output.push_str(&format!("Transactions:     {}\n\n", self.transaction_count));

        if self.categories.is_empty() {
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:<24} {:>14} {:>6} {:>7}\n",
            "Kind", "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<8} {:<24} {:>14} {:>6} {:>6.1}%\n",
                row.kind.ledger_token(),
                row.category,
                money(row.total),
                row.transaction_count,
                row.percentage
            ));
        }

        output
    }
}

fn kind_order(kind: TransactionKind) -> u8 {
    match kind {
        TransactionKind::Income => 0,
        TransactionKind::Expense => 1,
    }
}
