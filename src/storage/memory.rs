//! In-memory backend
//!
//! Holds expenses in a map for the lifetime of the process. Useful for tests
//! and for embedding the ledger without touching disk.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseId};

use super::ExpenseStore;

/// Expense store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<ExpenseId, Expense>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with expenses
    pub fn with_expenses(expenses: impl IntoIterator<Item = Expense>) -> Self {
        let data = expenses.into_iter().map(|e| (e.id, e)).collect();
        Self {
            data: RwLock::new(data),
        }
    }

    fn insert(&self, expense: Expense) -> LedgerResult<Expense> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Repository(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(expense.id, expense.clone());
        Ok(expense)
    }
}

impl ExpenseStore for MemoryStore {
    fn save(&self, expense: Expense) -> LedgerResult<Expense> {
        self.insert(expense)
    }

    fn get(&self, id: ExpenseId) -> LedgerResult<Option<Expense>> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Repository(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(&id).cloned())
    }

    /// Expenses in ascending ID order
    fn get_all(&self) -> LedgerResult<Vec<Expense>> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Repository(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.values().cloned().collect())
    }

    fn update(&self, expense: Expense) -> LedgerResult<Expense> {
        self.insert(expense)
    }

    fn delete(&self, id: ExpenseId) -> LedgerResult<bool> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Repository(format!("Failed to acquire write lock: {}", e))
        })?;
        Ok(data.remove(&id).is_some())
    }
}
