//! Budget display formatting
//!
//! Budget rows show a progress bar capped at 100% next to the real,
//! uncapped usage percentage.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_bar, format_base, format_percentage};
use crate::reports::{BudgetUsage, UsageLevel};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Usage")]
    usage: String,
    #[tabled(rename = "")]
    level: &'static str,
}

impl From<&BudgetUsage> for BudgetRow {
    fn from(usage: &BudgetUsage) -> Self {
        let bar = format_bar(usage.usage_percent(), BAR_WIDTH);
        Self {
            id: usage.budget.id.to_string(),
            period: usage.budget.period().to_string(),
            budget: format_base(usage.budget.amount),
            spent: format_base(usage.actual_expense),
            remaining: format_base(usage.remaining),
            usage: format!("{} {}", bar, format_percentage(usage.usage_percent())),
            level: level_label(usage.level()),
        }
    }
}

fn level_label(level: UsageLevel) -> &'static str {
    match level {
        UsageLevel::Safe => "ok",
        UsageLevel::Warning => "warning",
        UsageLevel::Danger => "over 90%",
    }
}

/// Format budgets with their usage as a table
pub fn format_budget_usage(rows: &[BudgetUsage]) -> String {
    if rows.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut table = Table::new(rows.iter().map(BudgetRow::from));
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetId, Period};
    use crate::reports::usage;
    use chrono::Utc;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty() {
        assert_eq!(format_budget_usage(&[]), "No budgets set.\n");
    }

    #[test]
    fn test_overspent_label_is_uncapped() {
        let budget = Budget::new(
            BudgetId::from_raw(7),
            Period::new(2024, 3).unwrap(),
            Decimal::from(1000),
            Utc::now(),
        );
        let mut row = usage(&budget, &[]);
        row.actual_expense = Decimal::from(1500);
        row.remaining = Decimal::from(-500);
        row.usage_rate = Decimal::from(150);

        let output = format_budget_usage(&[row]);
        assert!(output.contains("150.0%"));
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
        assert!(output.contains("NT$ -500"));
        assert!(output.contains("over 90%"));
    }
}
