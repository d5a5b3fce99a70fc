//! Ledger summary
//!
//! Totals, net income and per-category breakdowns over a slice of records.
//! Every amount is converted to the base currency before it is summed.
//! Sums saturate instead of overflowing, since stored documents are not
//! re-validated on load.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{Currency, Record, RecordFilter};

/// Convert `amount` of `currency` into base-currency units
///
/// Currencies missing from the table convert at rate 1.
pub fn convert_to_base(amount: Decimal, currency: &Currency) -> Decimal {
    currency.to_base(amount)
}

/// Records matching `filter`, newest first
pub fn filter_records(records: &[Record], filter: &RecordFilter) -> Vec<Record> {
    filter.apply(records)
}

/// Totals over a set of records, in base currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Income minus expense; negative when spending exceeds income
    pub net_income: Decimal,
    pub count: usize,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Sum income and expense over `records`
pub fn summarize(records: &[Record]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for record in records {
        let amount = convert_to_base(record.amount, &record.currency);
        if record.is_income() {
            total_income = total_income.saturating_add(amount);
        } else {
            total_expense = total_expense.saturating_add(amount);
        }
    }

    Summary {
        total_income,
        total_expense,
        net_income: total_income.saturating_sub(total_expense),
        count: records.len(),
    }
}

/// Years that have at least one record, newest first
pub fn distinct_years(records: &[Record]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub record_count: usize,
    /// Share of all expenses, 0-100
    pub percentage: Decimal,
}

/// Base-currency expense totals per category, largest first
///
/// Ties are broken by category name so the order is stable.
pub fn category_breakdown(records: &[Record]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, (Decimal, usize)> = HashMap::new();
    let mut grand_total = Decimal::ZERO;

    for record in records.iter().filter(|r| r.is_expense()) {
        let amount = record.base_amount();
        let entry = totals
            .entry(record.category.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.saturating_add(amount);
        entry.1 += 1;
        grand_total = grand_total.saturating_add(amount);
    }

    let mut rows: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, (total, record_count))| CategoryTotal {
            category: category.to_string(),
            total,
            record_count,
            percentage: total
                .checked_div(grand_total)
                .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}
