//! Category service
//!
//! Manages the category registry. Deleting a category first moves its
//! records to the fallback category, so no record is ever left pointing at
//! a category that no longer exists.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{is_fallback, normalize_category_name, FALLBACK_CATEGORY};
use crate::storage::Storage;

/// Outcome of deleting a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRemoval {
    pub category: String,
    /// Records moved to the fallback category
    pub reassigned_count: usize,
}

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a category (trimmed); empty and duplicate names are rejected
    pub fn add(&mut self, name: &str) -> LedgerResult<String> {
        let name =
            normalize_category_name(name).map_err(|e| LedgerError::Validation(e.to_string()))?;

        if !self.storage.categories.insert(name.clone()) {
            return Err(LedgerError::duplicate_category(name));
        }

        self.storage.save_categories()?;
        self.storage
            .log_create(EntityType::Category, name.clone(), Some(name.clone()), &name);

        Ok(name)
    }

    /// Delete a category, moving its records to the fallback category
    ///
    /// The fallback category itself cannot be deleted.
    pub fn remove(&mut self, name: &str) -> LedgerResult<CategoryRemoval> {
        if is_fallback(name) {
            return Err(LedgerError::ProtectedCategory(name.to_string()));
        }
        if !self.storage.categories.contains(name) {
            return Err(LedgerError::category_not_found(name));
        }

        let reassigned_count = self
            .storage
            .records
            .reassign_category(name, FALLBACK_CATEGORY);
        self.storage.categories.remove(name);

        // Persist both stores even if the first write fails
        let records_saved = if reassigned_count > 0 {
            self.storage.save_records()
        } else {
            Ok(())
        };
        let categories_saved = self.storage.save_categories();
        records_saved.and(categories_saved)?;

        self.storage.log(
            AuditEntry::delete(
                EntityType::Category,
                name,
                Some(name.to_string()),
                &name,
            )
            .with_summary(format!(
                "{} records moved to {}",
                reassigned_count, FALLBACK_CATEGORY
            )),
        );

        Ok(CategoryRemoval {
            category: name.to_string(),
            reassigned_count,
        })
    }

    /// Category names in insertion order
    pub fn list(&self) -> Vec<String> {
        self.storage.categories.list().to_vec()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.storage.categories.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, EntryType, NewRecord, RecordFilter, DEFAULT_CATEGORIES};
    use crate::services::RecordService;
    use crate::storage::{CATEGORIES_KEY, RECORDS_KEY};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn add_record(storage: &mut Storage, category: &str) {
        RecordService::new(storage)
            .add(NewRecord {
                year: 2024,
                month: 5,
                entry_type: EntryType::Expense,
                currency: Currency::Twd,
                amount: Decimal::from(250),
                category: category.into(),
                description: None,
            })
            .unwrap();
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut storage = Storage::in_memory();
        let mut service = CategoryService::new(&mut storage);

        assert_eq!(service.add("  旅遊  ").unwrap(), "旅遊");
        assert_eq!(service.list().last().map(String::as_str), Some("旅遊"));
        assert_eq!(service.list().len(), DEFAULT_CATEGORIES.len() + 1);
    }

    #[test]
    fn test_add_rejects_empty_and_duplicate() {
        let mut storage = Storage::in_memory();
        let mut service = CategoryService::new(&mut storage);

        assert!(service.add("   ").unwrap_err().is_validation());
        assert!(matches!(
            service.add("飲食").unwrap_err(),
            LedgerError::Duplicate { .. }
        ));
        assert_eq!(service.list().len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_add_persists() {
        let mut storage = Storage::in_memory();
        CategoryService::new(&mut storage).add("旅遊").unwrap();

        let stored = storage.backend().load(CATEGORIES_KEY).unwrap().unwrap();
        assert!(stored.as_array().unwrap().contains(&json!("旅遊")));
    }

    #[test]
    fn test_remove_reassigns_records_to_fallback() {
        let mut storage = Storage::in_memory();
        add_record(&mut storage, "娛樂");
        add_record(&mut storage, "娛樂");
        add_record(&mut storage, "飲食");

        let removal = CategoryService::new(&mut storage).remove("娛樂").unwrap();
        assert_eq!(removal.reassigned_count, 2);

        assert!(!storage.categories.contains("娛樂"));
        assert_eq!(storage.records.count_in_category("娛樂"), 0);
        assert_eq!(storage.records.count_in_category(FALLBACK_CATEGORY), 2);

        let stored = storage.backend().load(RECORDS_KEY).unwrap().unwrap();
        assert!(stored
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["category"] != "娛樂"));
    }

    #[test]
    fn test_every_record_category_stays_registered() {
        let mut storage = Storage::in_memory();
        for category in ["飲食", "交通", "購物", "娛樂"] {
            add_record(&mut storage, category);
        }

        let mut service = CategoryService::new(&mut storage);
        service.remove("交通").unwrap();
        service.remove("購物").unwrap();

        let records = storage.records.query(&RecordFilter::default());
        assert!(records
            .iter()
            .all(|r| storage.categories.contains(&r.category)));
    }

    #[test]
    fn test_fallback_cannot_be_removed() {
        let mut storage = Storage::in_memory();
        add_record(&mut storage, FALLBACK_CATEGORY);

        let err = CategoryService::new(&mut storage)
            .remove(FALLBACK_CATEGORY)
            .unwrap_err();

        assert!(matches!(err, LedgerError::ProtectedCategory(_)));
        assert!(storage.categories.contains(FALLBACK_CATEGORY));
        assert_eq!(storage.records.count_in_category(FALLBACK_CATEGORY), 1);
    }

    #[test]
    fn test_remove_unknown_category() {
        let mut storage = Storage::in_memory();
        let err = CategoryService::new(&mut storage)
            .remove("不存在")
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
