//! Budget usage
//!
//! Compares a monthly budget with the base-currency expenses recorded for
//! the same month.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{Budget, Record};

/// Usage above this percentage is a warning
pub const WARNING_THRESHOLD: u32 = 70;

/// Usage above this percentage is over the danger line
pub const DANGER_THRESHOLD: u32 = 90;

/// How close a budget is to being exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Safe,
    Warning,
    Danger,
}

/// A budget together with what was spent against it
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub budget: Budget,
    pub actual_expense: Decimal,
    /// Negative when the budget is overspent
    pub remaining: Decimal,
    /// Percentage of the budget spent; not capped at 100
    pub usage_rate: Decimal,
}

impl BudgetUsage {
    /// Usage clamped to 0-100, for sizing a progress bar
    pub fn progress_width(&self) -> Decimal {
        self.usage_rate.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    pub fn level(&self) -> UsageLevel {
        if self.usage_rate > Decimal::from(DANGER_THRESHOLD) {
            UsageLevel::Danger
        } else if self.usage_rate > Decimal::from(WARNING_THRESHOLD) {
            UsageLevel::Warning
        } else {
            UsageLevel::Safe
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining < Decimal::ZERO
    }

    /// Usage rate as a float, for formatting
    pub fn usage_percent(&self) -> f64 {
        self.usage_rate.to_f64().unwrap_or(0.0)
    }
}

/// Usage of `budget` by the expense records of its month
pub fn usage(budget: &Budget, records: &[Record]) -> BudgetUsage {
    let period = budget.period();
    let actual_expense = records
        .iter()
        .filter(|r| r.is_expense() && r.period() == period)
        .map(Record::base_amount)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    // Stored data is not re-validated: a zero budget reads as unused, and a
    // rate too large to represent saturates
    let usage_rate = if budget.amount > Decimal::ZERO {
        actual_expense
            .checked_div(budget.amount)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };

    BudgetUsage {
        budget: budget.clone(),
        actual_expense,
        remaining: budget.amount.saturating_sub(actual_expense),
        usage_rate,
    }
}

/// Usage rows for each budget, in the order given
pub fn usage_for_all(budgets: &[Budget], records: &[Record]) -> Vec<BudgetUsage> {
    budgets.iter().map(|b| usage(b, records)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, Currency, EntryType, Period, RecordId};
    use chrono::Utc;

    fn budget(amount: i64) -> Budget {
        Budget::new(
            BudgetId::from_raw(1),
            Period::new(2024, 3).unwrap(),
            Decimal::from(amount),
            Utc::now(),
        )
    }

    fn record(
        entry_type: EntryType,
        currency: Currency,
        amount: i64,
        year: i32,
        month: u32,
    ) -> Record {
        Record {
            id: RecordId::from_raw(1),
            year,
            month,
            entry_type,
            currency,
            amount: Decimal::from(amount),
            category: "飲食".into(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_usage_of_usd_expense() {
        let records = vec![record(EntryType::Expense, Currency::Usd, 100, 2024, 3)];
        let usage = usage(&budget(5000), &records);

        assert_eq!(usage.actual_expense, Decimal::from(3125));
        assert_eq!(usage.remaining, Decimal::from(1875));
        assert_eq!(usage.usage_rate, Decimal::new(625, 1));
        assert_eq!(usage.level(), UsageLevel::Safe);
    }

    #[test]
    fn test_no_expense_means_zero_usage() {
        let records = vec![
            record(EntryType::Income, Currency::Twd, 8000, 2024, 3),
            record(EntryType::Expense, Currency::Twd, 500, 2024, 4),
            record(EntryType::Expense, Currency::Twd, 500, 2023, 3),
        ];
        let usage = usage(&budget(5000), &records);

        assert_eq!(usage.actual_expense, Decimal::ZERO);
        assert_eq!(usage.usage_rate, Decimal::ZERO);
        assert_eq!(usage.remaining, Decimal::from(5000));
    }

    #[test]
    fn test_overspent_is_not_clamped() {
        let records = vec![record(EntryType::Expense, Currency::Twd, 1500, 2024, 3)];
        let usage = usage(&budget(1000), &records);

        assert_eq!(usage.usage_rate, Decimal::from(150));
        assert_eq!(usage.progress_width(), Decimal::from(100));
        assert_eq!(usage.remaining, Decimal::from(-500));
        assert!(usage.is_overspent());
        assert_eq!(usage.level(), UsageLevel::Danger);
    }

    #[test]
    fn test_tiny_budget_saturates_instead_of_overflowing() {
        let mut spent = record(EntryType::Expense, Currency::Twd, 1, 2024, 3);
        spent.amount = Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0);
        let mut tiny = budget(1);
        tiny.amount = Decimal::new(1, 2);

        let usage = usage(&tiny, &[spent]);
        assert_eq!(usage.usage_rate, Decimal::MAX);
        assert_eq!(usage.progress_width(), Decimal::ONE_HUNDRED);
        assert_eq!(usage.level(), UsageLevel::Danger);
        assert!(usage.is_overspent());
    }

    #[test]
    fn test_levels_at_thresholds() {
        let at = |spent: i64| {
            let records = vec![record(EntryType::Expense, Currency::Twd, spent, 2024, 3)];
            usage(&budget(100), &records).level()
        };

        assert_eq!(at(70), UsageLevel::Safe);
        assert_eq!(at(71), UsageLevel::Warning);
        assert_eq!(at(90), UsageLevel::Warning);
        assert_eq!(at(91), UsageLevel::Danger);
    }

    #[test]
    fn test_usage_for_all_keeps_order() {
        let mut april = budget(100);
        april.month = 4;
        let rows = usage_for_all(&[april, budget(200)], &[]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].budget.month, 4);
        assert_eq!(rows[1].budget.month, 3);
    }
}
