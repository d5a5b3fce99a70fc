//! Display formatting for terminal output
//!
//! Turns records, budgets and report results into text. Nothing here reads
//! or writes the stores.

pub mod budget;
pub mod category;
pub mod format;
pub mod record;
pub mod summary;

pub use budget::format_budget_usage;
pub use category::{format_category_breakdown, format_category_list};
pub use format::{format_base, format_money, format_percentage};
pub use record::{format_record_added, format_record_list};
pub use summary::{format_filter, format_summary};
