//! Record service
//!
//! Adds, removes, queries and re-categorizes ledger records. Input is fully
//! validated before the store is touched, so a rejected call changes nothing.

use chrono::Utc;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewRecord, Record, RecordFilter, RecordId};
use crate::storage::Storage;

/// Service for record management
pub struct RecordService<'a> {
    storage: &'a mut Storage,
}

impl<'a> RecordService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new record, then persist
    pub fn add(&mut self, input: NewRecord) -> LedgerResult<Record> {
        input
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let category = input.category.trim();
        if !self.storage.categories.contains(category) {
            return Err(LedgerError::Validation(format!(
                "Unknown category: {}",
                category
            )));
        }

        let id = RecordId::next_after(self.storage.records.max_id());
        let record = Record::new(id, input, Utc::now());

        self.storage.records.insert(record.clone());
        self.storage.save_records()?;

        self.storage.log_create(
            EntityType::Record,
            record.id.to_string(),
            Some(record.category.clone()),
            &record,
        );

        Ok(record)
    }

    /// Remove a record; a missing id is not an error and returns false
    pub fn remove(&mut self, id: RecordId) -> LedgerResult<bool> {
        let Some(record) = self.storage.records.remove(id) else {
            return Ok(false);
        };

        self.storage.save_records()?;

        self.storage.log_delete(
            EntityType::Record,
            record.id.to_string(),
            Some(record.category.clone()),
            &record,
        );

        Ok(true)
    }

    /// Records matching `filter`, newest first
    pub fn query(&self, filter: &RecordFilter) -> Vec<Record> {
        self.storage.records.query(filter)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.storage.records.get(id)
    }

    /// Move every record in category `from` to category `to`
    ///
    /// `to` must be registered. Returns how many records changed; nothing is
    /// persisted when none did.
    pub fn reassign_category(&mut self, from: &str, to: &str) -> LedgerResult<usize> {
        if !self.storage.categories.contains(to) {
            return Err(LedgerError::Validation(format!("Unknown category: {}", to)));
        }
        if from == to {
            return Ok(0);
        }

        let count = self.storage.records.reassign_category(from, to);
        if count > 0 {
            self.storage.save_records()?;
        }
        Ok(count)
    }
}
