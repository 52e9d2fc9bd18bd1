//! Storage layer for the expense ledger
//!
//! The [`ExpenseStore`] trait is the whole contract the ledger service relies
//! on. Two backends implement it: a JSON file that is fully re-read and
//! re-written on every call, and an in-memory map for tests and embedding.
//!
//! Neither backend locks. Two processes writing the same JSON file race and
//! the last writer wins.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json_lenient, write_json_atomic};
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::LedgerResult;
use crate::models::{Expense, ExpenseId};

/// Durable keyed collection of expenses
pub trait ExpenseStore {
    /// Persist a new expense, replacing any stored expense with the same ID
    fn save(&self, expense: Expense) -> LedgerResult<Expense>;

    /// Fetch one expense, `None` if absent
    fn get(&self, id: ExpenseId) -> LedgerResult<Option<Expense>>;

    /// Snapshot of every stored expense
    fn get_all(&self) -> LedgerResult<Vec<Expense>>;

    /// Overwrite an expense by ID, inserting it if absent
    fn update(&self, expense: Expense) -> LedgerResult<Expense>;

    /// Remove an expense; `true` if something was removed
    fn delete(&self, id: ExpenseId) -> LedgerResult<bool>;
}
