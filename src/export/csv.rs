//! CSV Export functionality
//!
//! Exports transactions and goals to CSV for spreadsheets. Unlike the
//! ledger files, CSV output quotes fields, so categories and goal names
//! containing the ledger delimiter survive export intact.

use std::io::Write;

use crate::error::LedgerResult;
use crate::models::{Goal, Transaction};

/// Export transactions to CSV, in ledger order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["kind", "amount", "category", "goal"])?;
    for txn in transactions {
        let amount = txn.amount.to_string();
        csv_writer.write_record([
            txn.kind.ledger_token(),
            amount.as_str(),
            txn.category.as_str(),
            txn.goal_name.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export goals to CSV
///
/// Open-ended goals have an empty target; progress is a percentage.
pub fn export_goals_csv<W: Write>(goals: &[Goal], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["name", "target", "current", "progress"])?;
    for goal in goals {
        let target = goal.target.map(|t| t.to_string()).unwrap_or_default();
        let progress = format!("{:.1}", goal.progress_fraction() * 100.0);
        let current = goal.current.to_string();
        csv_writer.write_record([
            goal.name.as_str(),
            target.as_str(),
            current.as_str(),
            progress.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
