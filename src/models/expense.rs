//! Expense model
//!
//! A single persisted expense entry. Instances are only built from values
//! that already passed the validation service.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the ledger service
    pub id: ExpenseId,

    /// Trimmed, validated description
    pub description: String,

    /// Strictly positive amount
    pub amount: Decimal,

    /// When the expense happened (local time)
    pub date: NaiveDateTime,

    /// Optional free-text category
    #[serde(default)]
    pub category: Option<String>,
}

impl Expense {
    /// Create a new expense without a category
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
            category: None,
        }
    }

    /// Set the category, builder style
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Calendar year of the expense date
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month (1-12) of the expense date
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Case-insensitive substring match against the description
    pub fn matches_query(&self, query: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    /// Case-insensitive category equality
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category.trim()))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {:.2}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
