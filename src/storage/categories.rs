//! Category registry repository
//!
//! Category labels in insertion order, stored as the `accountingCategories`
//! document (a plain array of strings).

use crate::error::LedgerResult;
use crate::models::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY};

use super::kv::{decode, encode, KeyValueStore, CATEGORIES_KEY};

/// In-memory category list
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    names: Vec<String>,
}

impl Default for CategoryRepository {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl CategoryRepository {
    /// A registry holding the default category set
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the stored list; a missing document yields the default set
    ///
    /// The fallback category is re-appended if a stored list lacks it, so
    /// deletions always have somewhere to move records to.
    pub fn load(&mut self, store: &dyn KeyValueStore) -> LedgerResult<()> {
        match store.load(CATEGORIES_KEY)? {
            Some(value) => {
                self.names = decode(CATEGORIES_KEY, value)?;
                if !self.contains(FALLBACK_CATEGORY) {
                    self.names.push(FALLBACK_CATEGORY.to_string());
                }
            }
            None => *self = Self::default(),
        }
        Ok(())
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> LedgerResult<()> {
        let value = encode(CATEGORIES_KEY, &self.names)?;
        store.save(CATEGORIES_KEY, &value)
    }

    /// Category names in insertion order
    pub fn list(&self) -> &[String] {
        &self.names
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a name; returns false if it was already present
    pub fn insert(&mut self, name: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Register every name not yet present, in order; returns how many were added
    pub fn register_missing<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> usize {
        let mut added = 0;
        for name in names {
            if self.insert(name.to_string()) {
                added += 1;
            }
        }
        added
    }

    /// Remove a name; returns false if it was not present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
