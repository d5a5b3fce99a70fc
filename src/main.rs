use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger::cli::{
    handle_audit_command, handle_budget_command, handle_category_command, handle_export_command,
    handle_record_command, handle_summary_command, BudgetCommands, CategoryCommands, FilterArgs,
    RecordCommands,
};
use ledger::config::{LedgerPaths, Settings};
use ledger::models::Currency;
use ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal bookkeeping ledger",
    long_about = "ledger keeps income and expense records in several currencies, \
                  a category list and monthly budgets, and reports totals and \
                  budget usage in the base currency (TWD)."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record management commands
    #[command(subcommand, alias = "rec")]
    Record(RecordCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show income, expense and net income totals
    Summary {
        #[command(flatten)]
        filter: FilterArgs,

        /// Also break expenses down by category
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Export the ledger to a file
    Export {
        /// Output file (defaults to a dated file in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export records as CSV instead of the full JSON document
        #[arg(long)]
        csv: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Set the currency preselected for new records
        #[arg(long)]
        default_currency: Option<Currency>,

        /// Turn audit logging on or off
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Load every store once; each command writes through on mutation
    let mut storage = Storage::open(&paths, &settings)?;

    match cli.command {
        Some(Commands::Record(cmd)) => {
            handle_record_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut storage, cmd)?;
        }
        Some(Commands::Summary { filter, breakdown }) => {
            handle_summary_command(&storage, filter.into(), breakdown);
        }
        Some(Commands::Export { output, csv }) => {
            handle_export_command(&storage, &paths, output, csv)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&paths, limit)?;
        }
        Some(Commands::Config {
            default_currency,
            audit,
        }) => {
            if default_currency.is_some() || audit.is_some() {
                if let Some(currency) = default_currency {
                    settings.default_currency = currency;
                }
                if let Some(enabled) = audit {
                    settings.audit_enabled = enabled;
                }
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Audit logging:    {}", settings.audit_enabled);
        }
        None => {
            println!("ledger - Terminal personal bookkeeping ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
