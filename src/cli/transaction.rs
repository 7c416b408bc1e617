//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing and removing entries.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::format_transaction_register;
use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionKind;
use crate::services::{CreateTransactionInput, RecordOutcome, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new entry
    ///
    /// An income entry in the "Adicionar à Meta" category moves money from
    /// the balance into the goal given with --goal.
    Add {
        /// Entrada (income) or Saída (expense)
        #[arg(value_parser = parse_kind)]
        kind: TransactionKind,
        /// Amount (e.g., "150" or "150.00")
        amount: String,
        /// Category label (see `ledger categories`)
        category: String,
        /// Goal the entry relates to
        #[arg(short, long)]
        goal: Option<String>,
    },
    /// List all entries with their positions
    List,
    /// Remove the entry at a position shown by `list`
    Remove {
        /// 1-based position
        position: usize,
    },
}

/// Parse a transaction kind argument
pub fn parse_kind(s: &str) -> Result<TransactionKind, String> {
    TransactionKind::parse(s)
        .ok_or_else(|| format!("invalid kind '{}': use Entrada or Saída", s))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let mut state = storage.load_all();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            goal,
        } => {
            let input = CreateTransactionInput {
                kind: Some(kind),
                amount,
                category: Some(category),
                goal_name: goal,
            };

            let outcome = TransactionService::new(&mut state).record(input)?;
            storage.save_all(&state)?;

            match outcome {
                RecordOutcome::Added(txn) => {
                    println!(
                        "Recorded {} of {} ({})",
                        txn.kind,
                        txn.amount.format_with_symbol(symbol),
                        txn.category
                    );
                }
                RecordOutcome::Funded(allocation) => {
                    println!(
                        "Moved {} into goal '{}'",
                        allocation.applied.format_with_symbol(symbol),
                        allocation.transaction.goal_name
                    );
                }
            }
            println!("Balance: {}", state.balance().format_with_symbol(symbol));
        }

        TransactionCommands::List => {
            print!("{}", format_transaction_register(&state.transactions, symbol));
            println!("Balance: {}", state.balance().format_with_symbol(symbol));
        }

        TransactionCommands::Remove { position } => {
            let len = state.transactions.len();
            let index = position
                .checked_sub(1)
                .ok_or(LedgerError::IndexOutOfRange { index: 0, len })?;

            let removed = TransactionService::new(&mut state).remove_at(index)?;
            storage.save_all(&state)?;

            println!(
                "Removed {} of {} ({})",
                removed.kind,
                removed.amount.format_with_symbol(symbol),
                removed.category
            );
            if removed.references_goal() {
                println!(
                    "Note: goal '{}' keeps the amount already allocated to it.",
                    removed.goal_name
                );
            }
            println!("Balance: {}", state.balance().format_with_symbol(symbol));
        }
    }

    Ok(())
}
