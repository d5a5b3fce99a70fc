//! Service layer for the ledger
//!
//! The service layer provides the mutating operations on top of the storage
//! layer: validate the input, mutate the in-memory store, persist it, then
//! write the audit entry.

pub mod budget;
pub mod category;
pub mod record;

pub use budget::BudgetService;
pub use category::{CategoryRemoval, CategoryService};
pub use record::RecordService;
