//! JSON export
//!
//! Writes the whole ledger as one document: every record, the category
//! list, every budget and the export timestamp. Exports are write-only;
//! nothing reads them back.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Record};
use crate::storage::Storage;

/// Full ledger export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// All records in insertion order
    pub records: Vec<Record>,

    /// Category names in registry order
    pub categories: Vec<String>,

    /// All budgets, newest period first
    pub budgets: Vec<Budget>,

    /// When the export was taken (ISO-8601)
    pub export_date: DateTime<Utc>,
}

impl FullExport {
    /// Snapshot the current contents of `storage`
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            records: storage.records.get_all().to_vec(),
            categories: storage.categories.list().to_vec(),
            budgets: storage.budgets.get_all(),
            export_date: Utc::now(),
        }
    }
}

/// Write the full ledger as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// File name for an export taken on `date`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("accounting_data_{}.json", date.format("%Y-%m-%d"))
}
