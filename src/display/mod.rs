//! Display formatting for terminal output
//!
//! Turns expenses, summaries and statistics into text for the CLI. The core
//! services never print; only the binary calls into this module.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_table};
pub use summary::{format_statistics, format_summary};

use rust_decimal::Decimal;

use crate::config::Settings;

/// Format an amount with the configured currency symbol and two decimals
pub fn format_amount(amount: Decimal, settings: &Settings) -> String {
    format!("{}{:.2}", settings.currency_symbol, amount.round_dp(2))
}

/// Shorten text to `max` characters, ending in "..." when cut
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
