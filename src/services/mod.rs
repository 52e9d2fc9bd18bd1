//! Service layer for the expense ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! field validation, ID assignment, date-window queries and aggregation.

pub mod expense;
pub mod validation;

pub use expense::{ExpenseFilter, ExpenseService, ExpenseUpdate, NewExpense};
