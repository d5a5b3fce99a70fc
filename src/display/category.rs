//! Category display formatting

use super::format::{format_bar, format_base, format_percentage};
use crate::models::is_fallback;
use crate::reports::CategoryTotal;
use rust_decimal::prelude::ToPrimitive;

/// Format the category list with how many records use each category
///
/// `counts` pairs each category with its record count, in registry order.
pub fn format_category_list(counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = counts
        .iter()
        .map(|(name, _)| display_width(name))
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>7}\n",
        "Category",
        "Records",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->7}\n",
        "",
        "",
        width = name_width
    ));

    for (name, count) in counts {
        let marker = if is_fallback(name) { "  (fallback)" } else { "" };
        // CJK glyphs are two columns wide; pad by display width, not chars
        let pad = name_width.saturating_sub(display_width(name));
        output.push_str(&format!(
            "{}{}  {:>7}{}\n",
            name,
            " ".repeat(pad),
            count,
            marker
        ));
    }

    output
}

/// Format per-category expense totals with a proportional bar
pub fn format_category_breakdown(rows: &[CategoryTotal]) -> String {
    if rows.is_empty() {
        return "No expenses.\n".to_string();
    }

    let mut output = String::new();
    for row in rows {
        let pct = row.percentage.to_f64().unwrap_or(0.0);
        output.push_str(&format!(
            "  {} {:>8}  {}  {}\n",
            format_bar(pct, 10),
            format_percentage(pct),
            row.category,
            format_base(row.total)
        ));
    }
    output
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
