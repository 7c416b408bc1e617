//! Goal CLI commands
//!
//! Implements CLI commands for creating, listing and funding savings goals.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::goal::{format_goal_list, format_goal_row};
use crate::error::LedgerResult;
use crate::services::{parse_amount, GoalService};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new goal
    Create {
        /// Goal name
        name: String,
        /// Target amount; omit for an open-ended savings jar
        #[arg(short, long)]
        target: Option<String>,
    },
    /// List goals and their progress
    List,
    /// Move money from the balance into a goal
    Fund {
        /// Goal name
        name: String,
        /// Amount to move; capped by the balance and by what the goal still needs
        amount: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    let mut state = storage.load_all();
    let symbol = settings.currency_symbol.as_str();
    let bar_width = settings.progress_bar_width;

    match cmd {
        GoalCommands::Create { name, target } => {
            let goal = GoalService::new(&mut state).create(&name, target.as_deref())?;
            storage.save_all(&state)?;

            println!("Created goal: {}", format_goal_row(&goal, symbol, bar_width));
        }

        GoalCommands::List => {
            print!("{}", format_goal_list(&state.goals, symbol, bar_width));
        }

        GoalCommands::Fund { name, amount } => {
            let requested = parse_amount(&amount)?;
            let allocation = GoalService::new(&mut state).fund(&name, requested)?;
            storage.save_all(&state)?;

            println!(
                "Moved {} into goal '{}'",
                allocation.applied.format_with_symbol(symbol),
                name
            );
            if allocation.applied < requested {
                println!(
                    "  (requested {}, capped by balance or goal target)",
                    requested.format_with_symbol(symbol)
                );
            }
            if let Some(goal) = state.find_goal(&name) {
                println!("  {}", format_goal_row(goal, symbol, bar_width));
            }
            println!("Balance: {}", state.balance().format_with_symbol(symbol));
        }
    }

    Ok(())
}
