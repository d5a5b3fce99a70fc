//! Summary display formatting

use super::format::format_base;
use crate::models::RecordFilter;
use crate::reports::Summary;

/// Describe which records a filter selects, e.g. `2024/03, 飲食`
pub fn format_filter(filter: &RecordFilter) -> String {
    if filter.is_empty() {
        return "all records".to_string();
    }

    let mut parts = Vec::new();
    match (filter.year, filter.month) {
        (Some(year), Some(month)) => parts.push(format!("{}/{:02}", year, month)),
        (Some(year), None) => parts.push(year.to_string()),
        (None, Some(month)) => parts.push(format!("month {:02}", month)),
        (None, None) => {}
    }
    if let Some(category) = &filter.category {
        parts.push(category.clone());
    }
    parts.join(", ")
}

/// Format totals for the filtered view
pub fn format_summary(summary: &Summary, filter: &RecordFilter) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary ({})\n", format_filter(filter)));
    output.push_str(&format!("  Records:  {}\n", summary.count));
    output.push_str(&format!("  Income:   {}\n", format_base(summary.total_income)));
    output.push_str(&format!("  Expense:  {}\n", format_base(summary.total_expense)));
    output.push_str(&format!("  Net:      {}\n", format_base(summary.net_income)));
    output
}
