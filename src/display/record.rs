//! Record display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_base, format_money, truncate};
use crate::models::{EntryType, Record};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Type")]
    entry_type: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        let entry_type = match record.entry_type {
            EntryType::Income => "+ income",
            EntryType::Expense => "- expense",
        };

        Self {
            id: record.id.to_string(),
            period: record.period().to_string(),
            entry_type: entry_type.to_string(),
            category: record.category.clone(),
            amount: format_money(record.amount, &record.currency),
            base: format_base(record.base_amount()),
            description: truncate(&record.description, 24),
        }
    }
}

/// Format records as a table, in the order given
pub fn format_record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut table = Table::new(records.iter().map(RecordRow::from));
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// One-line confirmation for a newly added record
pub fn format_record_added(record: &Record) -> String {
    format!(
        "Added {} {} {} in {} ({})\n",
        record.entry_type,
        format_money(record.amount, &record.currency),
        record.period(),
        record.category,
        record.id
    )
}
