//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod category;
pub mod export;
pub mod record;
pub mod report;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::handle_export_command;
pub use record::{handle_record_command, FilterArgs, RecordCommands};
pub use report::handle_summary_command;
