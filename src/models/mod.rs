//! Core data models for the ledger
//!
//! This module contains the data structures of the bookkeeping domain:
//! records, budgets, category labels, currencies and periods, together with
//! the field-level validation rules applied before any store is mutated.

pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod period;
pub mod record;

pub use budget::{validate_budget, Budget, BudgetValidationError};
pub use category::{
    is_fallback, normalize_category_name, CategoryValidationError, DEFAULT_CATEGORIES,
    FALLBACK_CATEGORY,
};
pub use currency::{Currency, CurrencyParseError, BASE_CURRENCY};
pub use ids::{BudgetId, RecordId};
pub use period::{validate_period, Period, PeriodValidationError, MAX_YEAR, MIN_YEAR};
pub use record::{EntryType, NewRecord, Record, RecordFilter, RecordValidationError};
