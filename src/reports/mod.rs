//! Reports for the ledger
//!
//! Pure derivations over the current snapshot of the stores: filtered views,
//! totals and budget usage. Nothing here mutates or persists.

pub mod budget_usage;
pub mod summary;

pub use budget_usage::{usage, usage_for_all, BudgetUsage, UsageLevel};
pub use summary::{
    category_breakdown, convert_to_base, distinct_years, filter_records, summarize,
    CategoryTotal, Summary,
};
