//! Budget service
//!
//! Sets, lists and deletes monthly budgets. Setting a budget for a period
//! that already has one updates its amount in place.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::audit::{generate_diff, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{validate_budget, Budget, BudgetId, Period};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create the budget for (year, month), or overwrite its amount
    ///
    /// An existing budget keeps its id and creation time.
    pub fn upsert(&mut self, year: i32, month: u32, amount: Decimal) -> LedgerResult<Budget> {
        let period = validate_budget(year, month, amount)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if let Some(existing) = self.storage.budgets.get_for_period_mut(period) {
            let before = existing.clone();
            existing.set_amount(amount);
            let updated = existing.clone();

            self.storage.save_budgets()?;

            let diff = match (serde_json::to_value(&before), serde_json::to_value(&updated)) {
                (Ok(b), Ok(a)) => generate_diff(&b, &a),
                _ => None,
            };
            self.storage.log_update(
                EntityType::Budget,
                updated.id.to_string(),
                Some(period.to_string()),
                &before,
                &updated,
                diff,
            );

            return Ok(updated);
        }

        let id = BudgetId::next_after(self.storage.budgets.max_id());
        let budget = Budget::new(id, period, amount, Utc::now());

        self.storage.budgets.insert(budget.clone());
        self.storage.save_budgets()?;

        self.storage.log_create(
            EntityType::Budget,
            budget.id.to_string(),
            Some(period.to_string()),
            &budget,
        );

        Ok(budget)
    }

    /// Delete a budget; a missing id returns false
    pub fn remove(&mut self, id: BudgetId) -> LedgerResult<bool> {
        let Some(budget) = self.storage.budgets.remove(id) else {
            return Ok(false);
        };

        self.storage.save_budgets()?;

        self.storage.log_delete(
            EntityType::Budget,
            budget.id.to_string(),
            Some(budget.period().to_string()),
            &budget,
        );

        Ok(true)
    }

    /// All budgets, newest period first
    pub fn list(&self) -> Vec<Budget> {
        self.storage.budgets.get_all()
    }

    pub fn find(&self, period: Period) -> Option<&Budget> {
        self.storage.budgets.get_for_period(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::audit::Operation;
    use crate::storage::BUDGETS_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_creates_then_updates_in_place() {
        let mut storage = Storage::in_memory();
        let mut service = BudgetService::new(&mut storage);

        let first = service.upsert(2024, 3, Decimal::from(5000)).unwrap();
        let second = service.upsert(2024, 3, Decimal::from(8000)).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);

        let budgets = service.list();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, Decimal::from(8000));
    }

    #[test]
    fn test_upsert_rejects_invalid_input() {
        let mut storage = Storage::in_memory();
        let mut service = BudgetService::new(&mut storage);

        assert!(service
            .upsert(2024, 3, Decimal::ZERO)
            .unwrap_err()
            .is_validation());
        assert!(service
            .upsert(2024, 13, Decimal::ONE)
            .unwrap_err()
            .is_validation());
        assert!(service
            .upsert(1899, 1, Decimal::ONE)
            .unwrap_err()
            .is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_rejected_update_keeps_old_amount() {
        let mut storage = Storage::in_memory();
        let mut service = BudgetService::new(&mut storage);
        service.upsert(2024, 3, Decimal::from(5000)).unwrap();

        assert!(service.upsert(2024, 3, Decimal::new(-1, 0)).is_err());
        assert_eq!(service.list()[0].amount, Decimal::from(5000));
    }

    #[test]
    fn test_list_sorted_descending() {
        let mut storage = Storage::in_memory();
        let mut service = BudgetService::new(&mut storage);
        service.upsert(2023, 12, Decimal::ONE).unwrap();
        service.upsert(2024, 6, Decimal::ONE).unwrap();
        service.upsert(2024, 1, Decimal::ONE).unwrap();

        let periods: Vec<Period> = service.list().iter().map(Budget::period).collect();
        assert_eq!(
            periods,
            vec![
                Period::new(2024, 6).unwrap(),
                Period::new(2024, 1).unwrap(),
                Period::new(2023, 12).unwrap(),
            ]
        );
    }

    #[test]
    fn test_remove() {
        let mut storage = Storage::in_memory();
        let mut service = BudgetService::new(&mut storage);
        let budget = service.upsert(2024, 3, Decimal::from(5000)).unwrap();

        assert!(service.remove(budget.id).unwrap());
        assert!(!service.remove(budget.id).unwrap());
        assert!(service.find(Period::new(2024, 3).unwrap()).is_none());

        let stored = storage.backend().load(BUDGETS_KEY).unwrap().unwrap();
        assert_eq!(stored.as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_update_is_audited_with_diff() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(&paths, &Settings::default()).unwrap();

        let mut service = BudgetService::new(&mut storage);
        service.upsert(2024, 3, Decimal::from(5000)).unwrap();
        service.upsert(2024, 3, Decimal::from(6000)).unwrap();

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].entity_name.as_deref(), Some("2024/03"));
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .starts_with("amount: 5000 -> 6000"));
    }
}
