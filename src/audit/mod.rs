//! Audit logging for the ledger
//!
//! Every create, update and delete of a record, category or budget is
//! appended to a line-delimited JSON log with before/after snapshots.
//!
//! - `AuditEntry`: one log line (timestamp, operation, entity, snapshots)
//! - `AuditLogger`: appends entries to and reads them back from the log file
//! - `generate_diff`: human-readable summary of changed top-level fields

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
