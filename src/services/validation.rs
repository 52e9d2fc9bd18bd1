//! Field validation
//!
//! Stateless functions that take one raw value, normalize it and either
//! return the typed value or a [`LedgerError::Validation`]. Raw inputs are
//! accepted as anything displayable so CLI strings and typed values go
//! through the same checks.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseId;

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Longest accepted category, in characters
pub const MAX_CATEGORY_LEN: usize = 100;

/// Punctuation allowed in descriptions besides letters, digits and whitespace
const DESCRIPTION_PUNCTUATION: &[char] = &['-', '_', '.', ',', '!', '?'];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Validate an amount: numeric and strictly positive
pub fn validate_amount(raw: impl Display) -> LedgerResult<Decimal> {
    let text = raw.to_string();
    let trimmed = text.trim();

    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::validation("amount", trimmed, "not numeric"))?;

    validate_amount_value(amount)
}

/// Validate an already-parsed amount
pub fn validate_amount_value(amount: Decimal) -> LedgerResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::validation(
            "amount",
            amount.to_string(),
            "must be positive",
        ));
    }
    Ok(amount.normalize())
}

/// Validate a description and return its trimmed form
pub fn validate_description(raw: &str) -> LedgerResult<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(LedgerError::validation("description", raw, "cannot be empty"));
    }

    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(LedgerError::validation(
            "description",
            trimmed,
            format!("too long (max {} characters)", MAX_DESCRIPTION_LEN),
        ));
    }

    let permitted = |c: char| {
        c.is_ascii_alphanumeric() || c.is_whitespace() || DESCRIPTION_PUNCTUATION.contains(&c)
    };
    if let Some(bad) = trimmed.chars().find(|&c| !permitted(c)) {
        return Err(LedgerError::validation(
            "description",
            trimmed,
            format!("contains invalid character '{}'", bad),
        ));
    }

    Ok(trimmed.to_string())
}

/// Validate an expense ID: integer and strictly positive
pub fn validate_id(raw: impl Display) -> LedgerResult<ExpenseId> {
    let value = parse_integer("id", raw)?;
    u64::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .map(ExpenseId::new)
        .ok_or_else(|| LedgerError::validation("id", value.to_string(), "must be positive"))
}

/// Validate a month number in 1..=12
pub fn validate_month(raw: impl Display) -> LedgerResult<u32> {
    let value = parse_integer("month", raw)?;
    if !(1..=12).contains(&value) {
        return Err(LedgerError::validation(
            "month",
            value.to_string(),
            "must be between 1 and 12",
        ));
    }
    Ok(value as u32)
}

/// Validate a calendar year in 1..=9999
pub fn validate_year(raw: impl Display) -> LedgerResult<i32> {
    let value = parse_integer("year", raw)?;
    if !(1..=9999).contains(&value) {
        return Err(LedgerError::validation(
            "year",
            value.to_string(),
            "must be between 1 and 9999",
        ));
    }
    Ok(value as i32)
}

/// Validate a day count for "last N days" windows
pub fn validate_days(raw: impl Display) -> LedgerResult<u32> {
    let value = parse_integer("days", raw)?;
    u32::try_from(value)
        .ok()
        .filter(|&v| v >= 1)
        .ok_or_else(|| LedgerError::validation("days", value.to_string(), "must be at least 1"))
}

/// Normalize a category; blank input means "no category"
pub fn validate_category(raw: &str) -> LedgerResult<Option<String>> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.chars().count() > MAX_CATEGORY_LEN {
        return Err(LedgerError::validation(
            "category",
            trimmed,
            format!("too long (max {} characters)", MAX_CATEGORY_LEN),
        ));
    }

    Ok(Some(trimmed.to_string()))
}

/// Parse a date or date-time in one of the accepted formats
///
/// Date-only inputs resolve to midnight. Formats are tried in order, so
/// `01/02/2024` reads as 1 February.
pub fn parse_date(raw: &str) -> LedgerResult<NaiveDateTime> {
    let trimmed = raw.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(at);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    Err(LedgerError::validation(
        "date",
        trimmed,
        "date format not recognized",
    ))
}

fn parse_integer(field: &'static str, raw: impl Display) -> LedgerResult<i64> {
    let text = raw.to_string();
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| LedgerError::validation(field, trimmed, "must be an integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reason(err: LedgerError) -> String {
        match err {
            LedgerError::Validation { reason, .. } => reason,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_amount_accepts_numbers() {
        assert_eq!(validate_amount("10").unwrap(), dec!(10));
        assert_eq!(validate_amount(" 12.50 ").unwrap(), dec!(12.5));
        assert_eq!(validate_amount("1e2").unwrap(), dec!(100));
        assert_eq!(validate_amount(dec!(0.01)).unwrap(), dec!(0.01));
        assert_eq!(validate_amount(7).unwrap(), dec!(7));
    }

    #[test]
    fn test_amount_rejects_non_numeric() {
        let err = validate_amount("abc").unwrap_err();
        assert_eq!(err.field(), Some("amount"));
        assert_eq!(reason(err), "not numeric");
        assert!(validate_amount("").is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_amount_rejects_non_positive() {
        assert_eq!(reason(validate_amount("-5").unwrap_err()), "must be positive");
        assert_eq!(reason(validate_amount("0").unwrap_err()), "must be positive");
        assert_eq!(reason(validate_amount("0.00").unwrap_err()), "must be positive");
    }

    #[test]
    fn test_description_trimmed() {
        assert_eq!(
            validate_description("  Buy groceries!  ").unwrap(),
            "Buy groceries!"
        );
        assert_eq!(
            validate_description("Taxi - airport, 2nd_trip?").unwrap(),
            "Taxi - airport, 2nd_trip?"
        );
    }

    #[test]
    fn test_description_rejects_empty() {
        assert!(validate_description("").unwrap_err().is_validation());
        assert!(validate_description("   \t ").unwrap_err().is_validation());
    }

    #[test]
    fn test_description_length_limit() {
        let max = "a".repeat(MAX_DESCRIPTION_LEN);
        assert!(validate_description(&max).is_ok());

        let too_long = "a".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(validate_description(&too_long).is_err());

        // Surrounding whitespace doesn't count
        assert!(validate_description(&format!("  {}  ", max)).is_ok());
    }

    #[test]
    fn test_description_rejects_invalid_characters() {
        for bad in ["Rent $500", "Lunch @ work", "a/b", "café", "50%"] {
            let err = validate_description(bad).unwrap_err();
            assert_eq!(err.field(), Some("description"), "input: {bad}");
        }
    }

    #[test]
    fn test_id() {
        assert_eq!(validate_id("3").unwrap(), ExpenseId::new(3));
        assert_eq!(validate_id(ExpenseId::new(8)).unwrap(), ExpenseId::new(8));
        assert_eq!(reason(validate_id("x").unwrap_err()), "must be an integer");
        assert_eq!(reason(validate_id("2.5").unwrap_err()), "must be an integer");
        assert_eq!(reason(validate_id(0).unwrap_err()), "must be positive");
        assert_eq!(reason(validate_id(-4).unwrap_err()), "must be positive");
    }

    #[test]
    fn test_month() {
        assert_eq!(validate_month("1").unwrap(), 1);
        assert_eq!(validate_month(12).unwrap(), 12);
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
        assert!(validate_month("march").is_err());
    }

    #[test]
    fn test_year_and_days() {
        assert_eq!(validate_year("2024").unwrap(), 2024);
        assert!(validate_year(0).is_err());
        assert!(validate_year(10000).is_err());

        assert_eq!(validate_days("30").unwrap(), 30);
        assert!(validate_days(0).is_err());
        assert!(validate_days(-1).is_err());
    }

    #[test]
    fn test_category() {
        assert_eq!(validate_category(" Food ").unwrap(), Some("Food".to_string()));
        assert_eq!(validate_category("   ").unwrap(), None);
        assert!(validate_category(&"c".repeat(MAX_CATEGORY_LEN + 1)).is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let feb_first = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_time(NaiveTime::MIN);

        assert_eq!(parse_date("2024-02-01").unwrap(), feb_first);
        assert_eq!(parse_date("01/02/2024").unwrap(), feb_first);
        assert_eq!(parse_date("01-02-2024").unwrap(), feb_first);
        assert_eq!(parse_date("2024/02/01").unwrap(), feb_first);
        // Month-first only wins when day-first is impossible
        assert_eq!(parse_date("02/13/2024").unwrap().date(), NaiveDate::from_ymd_opt(2024, 2, 13).unwrap());

        let with_time = parse_date("2024-02-01T13:45:10.5").unwrap();
        assert_eq!(with_time.format("%H:%M:%S").to_string(), "13:45:10");
        assert!(parse_date("2024-02-01 08:00:00").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("yesterday").unwrap_err();
        assert_eq!(err.field(), Some("date"));
        assert!(parse_date("2024-02-30").is_err());
    }
}
