//! Export CLI command
//!
//! Writes the JSON export (or the records CSV) to a file. Without an output
//! path the file goes into the export directory with a dated name.

use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{default_csv_file_name, default_file_name, export_full_json, export_records_csv};
use crate::storage::Storage;

/// Handle `export`, returning the path written
pub fn handle_export_command(
    storage: &Storage,
    paths: &LedgerPaths,
    output: Option<PathBuf>,
    csv: bool,
) -> LedgerResult<PathBuf> {
    let today = Local::now().date_naive();
    let output = match output {
        Some(path) => path,
        None => {
            let name = if csv {
                default_csv_file_name(today)
            } else {
                default_file_name(today)
            };
            paths.export_dir().join(name)
        }
    };

    let file = File::create(&output).map_err(|e| {
        LedgerError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    if csv {
        export_records_csv(storage.records.get_all(), &mut writer)?;
    } else {
        export_full_json(storage, &mut writer, true)?;
    }
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    println!(
        "Exported {} record(s), {} categories, {} budget(s) to {}",
        storage.records.len(),
        storage.categories.len(),
        storage.budgets.len(),
        output.display()
    );

    Ok(output)
}
