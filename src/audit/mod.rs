//! Audit logging for the expense ledger
//!
//! Records every add, update and delete with before/after snapshots in an
//! append-only, line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&expense))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::{diff_of, generate_diff};
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
