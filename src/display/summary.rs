//! Summary and statistics formatting

use chrono::Month;

use crate::config::Settings;
use crate::models::{Statistics, Summary};

use super::format_amount;

/// Format a summary as a one-line total plus count
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let total = format_amount(summary.total, settings);
    let heading = match summary.period.as_str() {
        "All time" => "Total expenses".to_string(),
        period => format!("Total expenses for {}", month_only_name(period).unwrap_or(period)),
    };

    format!(
        "{}: {} ({} {})",
        heading,
        total,
        summary.count,
        if summary.count == 1 { "expense" } else { "expenses" }
    )
}

/// Format statistics as an aligned block
pub fn format_statistics(stats: &Statistics, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Count:   {}\n", stats.count));
    output.push_str(&format!("Total:   {}\n", format_amount(stats.total, settings)));
    output.push_str(&format!("Average: {}\n", format_amount(stats.average, settings)));
    output.push_str(&format!("Median:  {}\n", format_amount(stats.median, settings)));
    output.push_str(&format!("Min:     {}\n", format_amount(stats.min, settings)));
    output.push_str(&format!("Max:     {}\n", format_amount(stats.max, settings)));

    output
}

/// "Month 3" -> "March"
fn month_only_name(period: &str) -> Option<&'static str> {
    let number: u8 = period.strip_prefix("Month ")?.parse().ok()?;
    Month::try_from(number).ok().map(|m| m.name())
}
