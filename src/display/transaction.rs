//! Transaction display formatting
//!
//! Formats ledger entries for terminal output. Positions shown to the user
//! are 1-based.

use crate::models::Transaction;

/// Format a single transaction for display
///
/// `Saída - R$ 500.00 (Adicionar à Meta → Meta: Viagem)`
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    let amount = txn.amount.format_with_symbol(currency_symbol);
    if txn.references_goal() {
        format!(
            "{} - {} ({} → Meta: {})",
            txn.kind, amount, txn.category, txn.goal_name
        )
    } else {
        format!("{} - {} ({})", txn.kind, amount, txn.category)
    }
}

/// Format the transaction list with positions
pub fn format_transaction_register(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let width = transactions.len().to_string().len();
    let mut output = String::new();

    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format!(
            "{:>width$}. {}\n",
            i + 1,
            format_transaction_row(txn, currency_symbol),
            width = width
        ));
    }

    output
}
