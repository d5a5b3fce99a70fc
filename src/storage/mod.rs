//! Storage layer for the ledger
//!
//! `Storage` is the single in-memory snapshot of the ledger for a session. It
//! owns the three stores, the key-value backend they persist to and the
//! optional audit logger. Data is loaded once on open and written through to
//! the backend after every mutation.

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod kv;
pub mod records;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore, BUDGETS_KEY, CATEGORIES_KEY, RECORDS_KEY};
pub use records::RecordRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Session context owning all stores
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
    pub records: RecordRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a storage over `backend` with empty stores and default categories
    ///
    /// Nothing is read until [`Storage::load_all`] is called.
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            records: RecordRepository::new(),
            categories: CategoryRepository::new(),
            budgets: BudgetRepository::new(),
            audit: None,
        }
    }

    /// An empty storage backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Open the on-disk ledger under `paths` and load everything
    pub fn open(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let mut storage = Self::new(Box::new(FileStore::new(paths.data_dir())));
        if settings.audit_enabled {
            storage = storage.with_audit(AuditLogger::new(paths.audit_log()));
        }
        storage.load_all()?;
        Ok(storage)
    }

    /// Enable audit logging
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Load all three stores from the backend
    ///
    /// Categories used by stored records but missing from the stored registry
    /// are registered, so no loaded record points at an unknown category.
    /// They are persisted with the next category save.
    pub fn load_all(&mut self) -> LedgerResult<()> {
        self.records.load(self.backend.as_ref())?;
        self.categories.load(self.backend.as_ref())?;
        self.budgets.load(self.backend.as_ref())?;

        let records = &self.records;
        self.categories
            .register_missing(records.get_all().iter().map(|r| r.category.as_str()));
        Ok(())
    }

    pub fn save_records(&mut self) -> LedgerResult<()> {
        self.records.save(self.backend.as_mut())
    }

    pub fn save_categories(&mut self) -> LedgerResult<()> {
        self.categories.save(self.backend.as_mut())
    }

    pub fn save_budgets(&mut self) -> LedgerResult<()> {
        self.budgets.save(self.backend.as_mut())
    }

    /// Save all three stores, attempting every one even if an earlier one fails
    pub fn save_all(&mut self) -> LedgerResult<()> {
        let records = self.save_records();
        let categories = self.save_categories();
        let budgets = self.save_budgets();
        records.and(categories).and(budgets)
    }

    // === Audit helpers ===
    //
    // Audit failures are reported but never undo a mutation.

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ));
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.log(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ));
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::delete(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ));
    }

    pub fn log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                eprintln!("warning: audit log not written: {}", e);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::error::LedgerError;
    use serde_json::Value;

    /// Backend whose writes always fail, like a full or unavailable store
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn load(&self, _key: &str) -> LedgerResult<Option<Value>> {
            Ok(None)
        }

        fn save(&mut self, key: &str, _value: &Value) -> LedgerResult<()> {
            Err(LedgerError::Storage(format!("quota exceeded writing {}", key)))
        }
    }
}
