//! CLI commands for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_goals_csv, export_transactions_csv};
use crate::storage::Storage;

/// What to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Transactions,
    Goals,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export to a CSV file
    Csv {
        /// Output file path
        output: PathBuf,

        /// Data set to export
        #[arg(short, long, value_enum, default_value = "transactions")]
        what: ExportTarget,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> LedgerResult<()> {
    match cmd {
        ExportCommands::Csv { output, what } => {
            let state = storage.load_all();

            let file = File::create(&output).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", output.display(), e))
            })?;
            let writer = BufWriter::new(file);

            let count = match what {
                ExportTarget::Transactions => {
                    export_transactions_csv(&state.transactions, writer)?;
                    state.transactions.len()
                }
                ExportTarget::Goals => {
                    export_goals_csv(&state.goals, writer)?;
                    state.goals.len()
                }
            };

            println!("Exported {} rows to {}", count, output.display());
        }
    }

    Ok(())
}
