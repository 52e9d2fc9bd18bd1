//! Core data models for the expense ledger
//!
//! Expenses, their identifiers, derived aggregates, and the calendar
//! windows used to select expenses by date.

pub mod expense;
pub mod ids;
pub mod summary;
pub mod window;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use summary::{Statistics, Summary};
pub use window::{is_same_month, last_n_days, month_range, year_range, Window};
