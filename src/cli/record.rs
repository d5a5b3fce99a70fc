//! Record CLI commands
//!
//! Implements `record add`, `record list` and `record delete`.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::display::{format_record_added, format_record_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Currency, EntryType, NewRecord, Period, RecordFilter, RecordId};
use crate::services::RecordService;
use crate::storage::Storage;

/// Year/month/category filters shared by listing commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only records of this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only records of this month (1-12)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Only records in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

impl From<FilterArgs> for RecordFilter {
    fn from(args: FilterArgs) -> Self {
        Self {
            year: args.year,
            month: args.month,
            category: args.category,
        }
    }
}

/// Record subcommands
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add an income or expense record
    Add {
        /// Amount in the record's currency (e.g. "100" or "12.50")
        amount: Decimal,

        /// Category name
        #[arg(short, long)]
        category: String,

        /// Record type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        entry_type: EntryType,

        /// Currency code (defaults to the configured currency)
        #[arg(long)]
        currency: Option<Currency>,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List records, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Delete a record by ID
    Delete {
        /// Record ID (e.g. "rec-1700000000000")
        id: String,
    },
}

/// Handle a record command
pub fn handle_record_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> LedgerResult<()> {
    let mut service = RecordService::new(storage);

    match cmd {
        RecordCommands::Add {
            amount,
            category,
            entry_type,
            currency,
            year,
            month,
            description,
        } => {
            let current = Period::current();
            let record = service.add(NewRecord {
                year: year.unwrap_or(current.year),
                month: month.unwrap_or(current.month),
                entry_type,
                currency: currency.unwrap_or_else(|| settings.default_currency.clone()),
                amount,
                category,
                description,
            })?;
            print!("{}", format_record_added(&record));
        }

        RecordCommands::List { filter } => {
            let records = service.query(&filter.into());
            print!("{}", format_record_list(&records));
        }

        RecordCommands::Delete { id } => {
            let record_id: RecordId = id
                .parse()
                .map_err(|_| LedgerError::Validation(format!("Invalid record ID: {}", id)))?;

            if service.remove(record_id)? {
                println!("Deleted record {}", record_id);
            } else {
                println!("No record with ID {}", record_id);
            }
        }
    }

    Ok(())
}
