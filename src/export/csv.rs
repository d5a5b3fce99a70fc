//! CSV export
//!
//! One row per record, with the amount in its own currency and converted to
//! the base currency.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Record;
use crate::reports::convert_to_base;

#[derive(Debug, Serialize)]
struct RecordRow<'a> {
    id: i64,
    period: String,
    #[serde(rename = "type")]
    entry_type: String,
    currency: &'a str,
    amount: String,
    base_amount: String,
    category: &'a str,
    description: &'a str,
    created_at: String,
}

impl<'a> From<&'a Record> for RecordRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: record.id.value(),
            period: record.period().to_string(),
            entry_type: record.entry_type.to_string(),
            currency: record.currency.code(),
            amount: record.amount.normalize().to_string(),
            base_amount: convert_to_base(record.amount, &record.currency)
                .round_dp(2)
                .normalize()
                .to_string(),
            category: &record.category,
            description: &record.description,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Write `records` as CSV with a header row
pub fn export_records_csv<W: Write>(records: &[Record], writer: &mut W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer
            .serialize(RecordRow::from(record))
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// File name for a records CSV taken on `date`
pub fn default_csv_file_name(date: NaiveDate) -> String {
    format!("accounting_records_{}.csv", date.format("%Y-%m-%d"))
}
