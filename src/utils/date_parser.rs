use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Layout accepted for every calendar date in a booking payload
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse \"{input}\" as YYYY-MM-DD: {reason}")]
pub struct DateParseError {
    pub input: String,
    pub reason: String,
}

impl DateParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// chrono alone is lenient about zero padding, so the shape is checked first:
/// ten ASCII characters, digits everywhere except the two `-` separators.
pub fn to_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(DateParseError::new(input, "expected 10 characters"));
    }

    for (i, b) in bytes.iter().enumerate() {
        let ok = match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return Err(DateParseError::new(
                input,
                format!("unexpected character at position {}", i),
            ));
        }
    }

    NaiveDate::parse_from_str(input, DATE_LAYOUT)
        .map_err(|err| DateParseError::new(input, err.to_string()))
}

/// Add a (possibly negative) number of days, saturating at chrono's date range
pub fn add_days(date: NaiveDate, days: i32) -> NaiveDate {
    match date.checked_add_signed(Duration::days(days as i64)) {
        Some(shifted) => shifted,
        None if days < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}

/// `true` when `a` falls strictly after `b`
pub fn is_after(a: NaiveDate, b: NaiveDate) -> bool {
    a > b
}

/// `true` when `a` falls strictly before `b`
pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}
