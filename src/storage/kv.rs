//! Key-value persistence backends
//!
//! The stores only ever need two operations: load a JSON document by key and
//! save one under a key. Anything that can do that can back the ledger.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_json, write_json_atomic};

/// Key under which the record list is stored
pub const RECORDS_KEY: &str = "accountingRecords";

/// Key under which the category list is stored
pub const CATEGORIES_KEY: &str = "accountingCategories";

/// Key under which the budget list is stored
pub const BUDGETS_KEY: &str = "accountingBudgets";

/// A local key-value store of JSON documents
pub trait KeyValueStore {
    /// Load the document stored under `key`, if any
    fn load(&self, key: &str) -> LedgerResult<Option<Value>>;

    /// Replace the document stored under `key`
    fn save(&mut self, key: &str, value: &Value) -> LedgerResult<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Value>> {
        read_json(self.path_for(key))
    }

    fn save(&mut self, key: &str, value: &Value) -> LedgerResult<()> {
        write_json_atomic(self.path_for(key), value)
    }
}

/// In-process store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document, e.g. data written by an earlier session
    pub fn with_document(mut self, key: &str, value: Value) -> Self {
        self.documents.insert(key.to_string(), value);
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Value>> {
        Ok(self.documents.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> LedgerResult<()> {
        self.documents.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// Decode a stored document into `T`, mapping failures to storage errors
pub(crate) fn decode<T: serde::de::DeserializeOwned>(key: &str, value: Value) -> LedgerResult<T> {
    serde_json::from_value(value)
        .map_err(|e| LedgerError::Storage(format!("Failed to decode '{}': {}", key, e)))
}

/// Encode `data` for storage under `key`
pub(crate) fn encode<T: serde::Serialize + ?Sized>(key: &str, data: &T) -> LedgerResult<Value> {
    serde_json::to_value(data)
        .map_err(|e| LedgerError::Storage(format!("Failed to encode '{}': {}", key, e)))
}
