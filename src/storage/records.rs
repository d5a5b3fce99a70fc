//! Record repository
//!
//! Holds every ledger record in insertion order and serializes them as the
//! `accountingRecords` document.

use crate::error::LedgerResult;
use crate::models::{Record, RecordFilter, RecordId};

use super::kv::{decode, encode, KeyValueStore, RECORDS_KEY};

/// In-memory record collection
#[derive(Debug, Clone, Default)]
pub struct RecordRepository {
    records: Vec<Record>,
}

impl RecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with the stored document (missing = empty)
    pub fn load(&mut self, store: &dyn KeyValueStore) -> LedgerResult<()> {
        self.records = match store.load(RECORDS_KEY)? {
            Some(value) => decode(RECORDS_KEY, value)?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Write the current contents to the store
    pub fn save(&self, store: &mut dyn KeyValueStore) -> LedgerResult<()> {
        let value = encode(RECORDS_KEY, &self.records)?;
        store.save(RECORDS_KEY, &value)
    }

    /// All records in insertion order
    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records matching `filter`, newest first
    pub fn query(&self, filter: &RecordFilter) -> Vec<Record> {
        filter.apply(&self.records)
    }

    /// Largest id in use, for allocating the next one
    pub fn max_id(&self) -> Option<RecordId> {
        self.records.iter().map(|r| r.id).max()
    }

    pub fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Remove a record by id, returning it if it existed
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Rewrite the category of every record in `from` to `to`
    pub fn reassign_category(&mut self, from: &str, to: &str) -> usize {
        let mut count = 0;
        for record in self.records.iter_mut().filter(|r| r.category == from) {
            record.category = to.to_string();
            count += 1;
        }
        count
    }

    pub fn count_in_category(&self, category: &str) -> usize {
        self.records.iter().filter(|r| r.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
