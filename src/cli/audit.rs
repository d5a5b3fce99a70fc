//! Audit CLI command

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::LedgerPaths;
use crate::error::LedgerResult;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_audit_command(paths: &LedgerPaths, limit: usize) -> LedgerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_all()?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    let shown = most_recent(&entries, limit);
    for entry in shown {
        println!("{}", entry.format_human_readable());
    }
    if shown.len() < entries.len() {
        println!();
        println!(
            "Showing {} of {} entries from {}",
            shown.len(),
            entries.len(),
            logger.path().display()
        );
    }

    Ok(())
}

/// The last `limit` entries of an oldest-first log
fn most_recent(entries: &[AuditEntry], limit: usize) -> &[AuditEntry] {
    &entries[entries.len().saturating_sub(limit)..]
}
