//! Budget CLI commands
//!
//! Implements `budget set`, `budget list` and `budget delete`.

use clap::Subcommand;
use rust_decimal::Decimal;

use crate::display::{format_base, format_budget_usage};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetId, Period};
use crate::reports::usage_for_all;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget for a month, replacing any existing amount
    Set {
        /// Budget amount in the base currency
        amount: Decimal,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// List budgets with their usage, newest first
    List,

    /// Delete a budget by ID
    Delete {
        /// Budget ID (e.g. "bud-1700000000000")
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &mut Storage, cmd: BudgetCommands) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set {
            amount,
            year,
            month,
        } => {
            let current = Period::current();
            let budget = BudgetService::new(storage).upsert(
                year.unwrap_or(current.year),
                month.unwrap_or(current.month),
                amount,
            )?;
            println!(
                "Budget for {} set to {} ({})",
                budget.period(),
                format_base(budget.amount),
                budget.id
            );
        }

        BudgetCommands::List => {
            let budgets = storage.budgets.get_all();
            let rows = usage_for_all(&budgets, storage.records.get_all());
            print!("{}", format_budget_usage(&rows));
        }

        BudgetCommands::Delete { id } => {
            let budget_id: BudgetId = id
                .parse()
                .map_err(|_| LedgerError::Validation(format!("Invalid budget ID: {}", id)))?;

            if BudgetService::new(storage).remove(budget_id)? {
                println!("Deleted budget {}", budget_id);
            } else {
                println!("No budget with ID {}", budget_id);
            }
        }
    }

    Ok(())
}
