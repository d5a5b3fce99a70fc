//! Export for the ledger
//!
//! - JSON: the full ledger (records, categories, budgets) in one document
//! - CSV: records only, spreadsheet-compatible

pub mod csv;
pub mod json;

pub use self::csv::{default_csv_file_name, export_records_csv};
pub use self::json::{default_file_name, export_full_json, FullExport};
