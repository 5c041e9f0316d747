//! Calendar date helpers.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Calendar date without a time component, used for `date_applied`.
pub type Date = NaiveDate;

/// Wire and storage format for [`Date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date.
///
/// The input must re-format to exactly the same text, which rejects
/// unpadded components such as `2024-1-5` that chrono would otherwise accept.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `value` is not a valid
/// zero-padded calendar date.
pub fn parse_date(value: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidDate(value.to_owned());
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
    if format_date(date) != value {
        return Err(invalid());
    }
    Ok(date)
}

/// Format a [`Date`] as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).to_string()
}
