//! ledger-cli - Terminal personal bookkeeping ledger
//!
//! This library provides the core of a personal bookkeeping ledger: income
//! and expense records in several currencies, a user-editable category list,
//! monthly budgets, and the summaries derived from them. Totals are always
//! expressed in the base currency (TWD) using a static rate table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Records, budgets, categories, currencies and periods
//! - `storage`: Key-value persistence and the session `Storage` context
//! - `services`: Validated mutations (validate, mutate, persist, audit)
//! - `reports`: Pure aggregation (filters, totals, budget usage)
//! - `export`: JSON and CSV export
//! - `audit`: Audit logging system
//! - `display`, `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::models::{Currency, EntryType, NewRecord};
//! use ledger::services::RecordService;
//! use ledger::storage::Storage;
//!
//! let mut storage = Storage::in_memory();
//! let record = RecordService::new(&mut storage).add(NewRecord {
//!     year: 2024,
//!     month: 3,
//!     entry_type: EntryType::Expense,
//!     currency: Currency::Usd,
//!     amount: 100.into(),
//!     category: "飲食".into(),
//!     description: None,
//! })?;
//! assert_eq!(record.base_amount(), 3125.into());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
