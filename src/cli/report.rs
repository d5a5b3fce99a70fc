//! Summary CLI command

use crate::display::{format_category_breakdown, format_summary};
use crate::models::RecordFilter;
use crate::reports::{category_breakdown, distinct_years, filter_records, summarize};
use crate::storage::Storage;

/// Print totals for the records selected by `filter`
pub fn handle_summary_command(storage: &Storage, filter: RecordFilter, breakdown: bool) {
    let all = storage.records.get_all();
    let records = filter_records(all, &filter);

    print!("{}", format_summary(&summarize(&records), &filter));

    if breakdown {
        println!();
        println!("Expenses by category:");
        print!("{}", format_category_breakdown(&category_breakdown(&records)));
    }

    let years = distinct_years(all);
    if !years.is_empty() {
        let years: Vec<String> = years.iter().map(i32::to_string).collect();
        println!();
        println!("Years with records: {}", years.join(", "));
    }
}
