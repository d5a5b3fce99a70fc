//! Year/month period shared by records and budgets

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Earliest accepted year
pub const MIN_YEAR: i32 = 1900;

/// Latest accepted year
pub const MAX_YEAR: i32 = 2100;

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Create a validated period
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodValidationError> {
        validate_period(year, month)?;
        Ok(Self { year, month })
    }

    /// The current local month
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.month)
    }
}

/// Check year and month bounds
pub fn validate_period(year: i32, month: u32) -> Result<(), PeriodValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(PeriodValidationError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(PeriodValidationError::MonthOutOfRange(month));
    }
    Ok(())
}

/// Validation errors for periods
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodValidationError {
    YearOutOfRange(i32),
    MonthOutOfRange(u32),
}

impl fmt::Display for PeriodValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOutOfRange(year) => write!(
                f,
                "Year must be between {} and {} (got {})",
                MIN_YEAR, MAX_YEAR, year
            ),
            Self::MonthOutOfRange(month) => {
                write!(f, "Month must be between 1 and 12 (got {})", month)
            }
        }
    }
}

impl std::error::Error for PeriodValidationError {}
