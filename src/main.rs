use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use savings_ledger::cli::{
    handle_balance_command, handle_categories_command, handle_export_command,
    handle_goal_command, handle_report_command, handle_transaction_command, ExportCommands,
    GoalCommands, TransactionCommands,
};
use savings_ledger::config::{LedgerPaths, Settings, DATA_DIR_ENV};
use savings_ledger::models::TransactionKind;
use savings_ledger::storage::Storage;
use savings_ledger::LedgerError;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger with savings goals",
    long_about = "Records income and expenses, keeps a running balance and moves \
                  money from the balance into savings goals. Data lives in plain \
                  semicolon-delimited text files."
)]
struct Cli {
    /// Directory holding the ledger files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log level written to stderr (RUST_LOG overrides it)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show the current balance
    Balance,

    /// Show income, expense and goal totals
    Report,

    /// List the categories offered for each kind
    Categories {
        /// Only show categories for this kind
        #[arg(value_parser = savings_ledger::cli::parse_kind)]
        kind: Option<TransactionKind>,
    },

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Validation errors exit with 2, other rejected operations with 3
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<LedgerError>() {
        Some(e) if e.is_validation() => ExitCode::from(2),
        Some(e) if e.is_recoverable() => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Balance) => {
            handle_balance_command(&storage, &settings)?;
        }
        Some(Commands::Report) => {
            handle_report_command(&storage, &settings)?;
        }
        Some(Commands::Categories { kind }) => {
            handle_categories_command(kind)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            settings.save(paths)?;
            println!("Savings Ledger Configuration");
            println!("============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Goals file:        {}", paths.goals_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Progress bar width: {}", settings.progress_bar_width);
        }
        None => {
            println!("Savings Ledger - income, expenses and savings goals");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "savings_ledger={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
