//! Budget repository
//!
//! Monthly budgets keyed by (year, month), stored as the `accountingBudgets`
//! document.

use crate::error::LedgerResult;
use crate::models::{Budget, BudgetId, Period};

use super::kv::{decode, encode, KeyValueStore, BUDGETS_KEY};

/// In-memory budget collection
#[derive(Debug, Clone, Default)]
pub struct BudgetRepository {
    budgets: Vec<Budget>,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, store: &dyn KeyValueStore) -> LedgerResult<()> {
        self.budgets = match store.load(BUDGETS_KEY)? {
            Some(value) => decode(BUDGETS_KEY, value)?,
            None => Vec::new(),
        };
        Ok(())
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> LedgerResult<()> {
        let value = encode(BUDGETS_KEY, &self.budgets)?;
        store.save(BUDGETS_KEY, &value)
    }

    /// All budgets, newest period first
    pub fn get_all(&self) -> Vec<Budget> {
        let mut budgets = self.budgets.clone();
        budgets.sort_by(|a, b| b.period().cmp(&a.period()));
        budgets
    }

    pub fn get(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn get_for_period(&self, period: Period) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.period() == period)
    }

    pub fn get_for_period_mut(&mut self, period: Period) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.period() == period)
    }

    pub fn max_id(&self) -> Option<BudgetId> {
        self.budgets.iter().map(|b| b.id).max()
    }

    /// Append a budget; callers guarantee its period is not taken
    pub fn insert(&mut self, budget: Budget) {
        self.budgets.push(budget);
    }

    pub fn remove(&mut self, id: BudgetId) -> Option<Budget> {
        let index = self.budgets.iter().position(|b| b.id == id)?;
        Some(self.budgets.remove(index))
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}
