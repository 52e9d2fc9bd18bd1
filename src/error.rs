//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ExpenseId;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed input for a single field
    #[error("Validation error: {field} with value '{value}' is invalid: {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Referenced expense does not exist
    #[error("Expense with id {id} not found")]
    NotFound { id: ExpenseId },

    /// Durable storage failure (write errors, unexpected I/O)
    #[error("Repository error: {0}")]
    Repository(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the store
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors outside the store
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create a validation error for a field
    pub fn validation(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for an expense
    pub fn not_found(id: ExpenseId) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Name of the offending field, for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
