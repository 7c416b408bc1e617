//! Report CLI commands
//!
//! Balance, summary report and the category table.

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::{allowed_categories, TransactionKind};
use crate::reports::LedgerSummary;
use crate::storage::Storage;

/// Print the current balance
pub fn handle_balance_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let state = storage.load_all();
    println!(
        "Balance: {}",
        state.balance().format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Print the ledger summary report
pub fn handle_report_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let state = storage.load_all();
    let summary = LedgerSummary::generate(&state);
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the categories offered for one kind, or for both
pub fn handle_categories_command(kind: Option<TransactionKind>) -> LedgerResult<()> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => TransactionKind::all().to_vec(),
    };

    for kind in kinds {
        println!("{}:", kind);
        for category in allowed_categories(kind) {
            println!("  {}", category);
        }
    }
    Ok(())
}
