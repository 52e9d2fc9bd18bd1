//! JSON file backend
//!
//! The file holds a single top-level array of expenses. Every read
//! deserializes the whole file and every write re-serializes the whole
//! collection, so each operation is O(n).

use std::path::{Path, PathBuf};

use crate::error::LedgerResult;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_lenient, write_json_atomic};
use super::ExpenseStore;

/// Expense store backed by a flat JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file; nothing is read until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or corrupt files read back as an empty collection
    fn load(&self) -> LedgerResult<Vec<Expense>> {
        read_json_lenient(&self.path)
    }

    fn store(&self, mut expenses: Vec<Expense>) -> LedgerResult<()> {
        expenses.sort_by_key(|e| e.id);
        write_json_atomic(&self.path, &expenses)
    }

    fn put(&self, expense: Expense) -> LedgerResult<Expense> {
        let mut expenses = self.load()?;
        match expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => *slot = expense.clone(),
            None => expenses.push(expense.clone()),
        }
        self.store(expenses)?;
        Ok(expense)
    }
}

impl ExpenseStore for JsonFileStore {
    fn save(&self, expense: Expense) -> LedgerResult<Expense> {
        self.put(expense)
    }

    fn get(&self, id: ExpenseId) -> LedgerResult<Option<Expense>> {
        Ok(self.load()?.into_iter().find(|e| e.id == id))
    }

    /// Expenses in ascending ID order
    fn get_all(&self) -> LedgerResult<Vec<Expense>> {
        let mut expenses = self.load()?;
        expenses.sort_by_key(|e| e.id);
        Ok(expenses)
    }

    fn update(&self, expense: Expense) -> LedgerResult<Expense> {
        self.put(expense)
    }

    fn delete(&self, id: ExpenseId) -> LedgerResult<bool> {
        let mut expenses = self.load()?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);

        if expenses.len() == before {
            return Ok(false);
        }

        self.store(expenses)?;
        Ok(true)
    }
}
