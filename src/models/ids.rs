//! Strongly-typed expense identifier
//!
//! Expense IDs are positive integers assigned by the ledger service. The
//! newtype keeps them from being mixed up with counts, months or years.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The first ID handed out in an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw integer
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The ID following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Next ID after the largest of `ids`, or [`ExpenseId::FIRST`] when empty
    pub fn after_max<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        ids.into_iter()
            .max()
            .map(|max| max.next())
            .unwrap_or(Self::FIRST)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
