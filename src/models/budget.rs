//! Monthly budget model
//!
//! A budget caps base-currency spending for one (year, month). There is at
//! most one budget per period; setting it again overwrites the amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::MAX_AMOUNT;
use super::ids::BudgetId;
use super::period::{validate_period, Period, PeriodValidationError};

/// A spending budget for a single month, in base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,
    pub year: i32,
    pub month: u32,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(id: BudgetId, period: Period, amount: Decimal, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            year: period.year,
            month: period.month,
            amount,
            created_at,
        }
    }

    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }

    /// Replace the amount; id and creation time are kept
    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budget", self.period())
    }
}

/// Validate the fields of a budget upsert
pub fn validate_budget(
    year: i32,
    month: u32,
    amount: Decimal,
) -> Result<Period, BudgetValidationError> {
    validate_period(year, month).map_err(BudgetValidationError::Period)?;
    if amount <= Decimal::ZERO {
        return Err(BudgetValidationError::NonPositiveAmount);
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(BudgetValidationError::AmountTooLarge);
    }
    Ok(Period { year, month })
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    Period(PeriodValidationError),
    NonPositiveAmount,
    AmountTooLarge,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Period(e) => write!(f, "{}", e),
            Self::NonPositiveAmount => write!(f, "Budget amount must be greater than 0"),
            Self::AmountTooLarge => write!(f, "Budget amount must not exceed {}", MAX_AMOUNT),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_budget() {
        assert_eq!(
            validate_budget(2024, 3, Decimal::from(5000)),
            Ok(Period {
                year: 2024,
                month: 3
            })
        );
        assert_eq!(
            validate_budget(2024, 3, Decimal::ZERO),
            Err(BudgetValidationError::NonPositiveAmount)
        );
        assert!(matches!(
            validate_budget(2024, 13, Decimal::ONE),
            Err(BudgetValidationError::Period(_))
        ));
        assert_eq!(
            validate_budget(2024, 3, Decimal::from(MAX_AMOUNT) + Decimal::ONE),
            Err(BudgetValidationError::AmountTooLarge)
        );
    }

    #[test]
    fn test_amount_stored_as_number() {
        let budget = Budget::new(
            BudgetId::from_raw(7),
            Period::new(2024, 3).unwrap(),
            Decimal::new(50005, 1),
            Utc::now(),
        );
        let value = serde_json::to_value(&budget).unwrap();
        assert!(value["amount"].is_number());
        assert_eq!(value["amount"].to_string(), "5000.5");

        let back: Budget = serde_json::from_value(value).unwrap();
        assert_eq!(back, budget);
    }

    #[test]
    fn test_set_amount_keeps_identity() {
        let created = Utc::now();
        let mut budget = Budget::new(
            BudgetId::from_raw(7),
            Period::new(2024, 3).unwrap(),
            Decimal::from(100),
            created,
        );
        budget.set_amount(Decimal::from(200));
        assert_eq!(budget.id, BudgetId::from_raw(7));
        assert_eq!(budget.created_at, created);
        assert_eq!(budget.amount, Decimal::from(200));
    }
}
