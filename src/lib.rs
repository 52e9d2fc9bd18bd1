//! Expense Ledger - a command-line expense tracker
//!
//! This library records personal expenses, validates every field before it
//! reaches storage, and answers questions about them: totals per month or
//! year, spending over the last N days, text search and descriptive
//! statistics.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, IDs, summaries and date windows
//! - `storage`: The store abstraction with JSON file and in-memory backends
//! - `services`: Validation and the ledger service
//! - `audit`: Audit logging of every mutation
//! - `display`: Terminal rendering for the CLI
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::{ExpenseService, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let service = ExpenseService::new(&store);
//! service.add("Groceries", "42.10")?;
//! let summary = service.summary(None)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use models::{Expense, ExpenseId, Statistics, Summary, Window};
pub use services::{ExpenseFilter, ExpenseService, ExpenseUpdate, NewExpense};
pub use storage::{ExpenseStore, JsonFileStore, MemoryStore};
