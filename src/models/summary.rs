//! Derived aggregates over a set of expenses
//!
//! Neither type is persisted; both are recomputed on every query.

use rust_decimal::Decimal;
use serde::Serialize;

use super::expense::Expense;
use crate::error::{LedgerError, LedgerResult};

/// Total and count of expenses within a labelled period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of amounts
    pub total: Decimal,
    /// Number of expenses
    pub count: usize,
    /// Human-readable label of the window that was summarized
    pub period: String,
}

impl Summary {
    /// Aggregate the given expenses under a period label
    ///
    /// # Errors
    ///
    /// Returns a validation error on `amount` if the total exceeds the
    /// range of `Decimal`.
    pub fn from_expenses(expenses: &[Expense], period: impl Into<String>) -> LedgerResult<Self> {
        Ok(Self {
            total: checked_total(expenses.iter().map(|e| e.amount))?,
            count: expenses.len(),
            period: period.into(),
        })
    }
}

/// Descriptive statistics over expense amounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
    pub max: Decimal,
    pub min: Decimal,
    pub median: Decimal,
}

impl Statistics {
    /// Compute statistics over expenses; empty input yields all zeros
    pub fn from_expenses(expenses: &[Expense]) -> LedgerResult<Self> {
        Self::from_amounts(expenses.iter().map(|e| e.amount).collect())
    }

    /// Compute statistics over raw amounts
    pub fn from_amounts(mut amounts: Vec<Decimal>) -> LedgerResult<Self> {
        if amounts.is_empty() {
            return Ok(Self::default());
        }

        amounts.sort();

        let count = amounts.len();
        let total = checked_total(amounts.iter().copied())?;
        let mid = count / 2;
        let median = if count % 2 == 0 {
            let (low, high) = (amounts[mid - 1], amounts[mid]);
            low.checked_add(high)
                .and_then(|pair| pair.checked_div(Decimal::TWO))
                .ok_or_else(|| out_of_range(high))?
        } else {
            amounts[mid]
        };
        let average = total
            .checked_div(Decimal::from(count))
            .ok_or_else(|| out_of_range(total))?;

        Ok(Self {
            total,
            count,
            average,
            max: amounts[count - 1],
            min: amounts[0],
            median,
        })
    }
}

fn checked_total(amounts: impl IntoIterator<Item = Decimal>) -> LedgerResult<Decimal> {
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).ok_or_else(|| out_of_range(amount))
    })
}

fn out_of_range(amount: Decimal) -> LedgerError {
    LedgerError::validation("amount", amount.to_string(), "total is out of range")
}
