//! Requested-date resolution and canonical formatting.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::PageError;

/// Resolves an optional user-supplied date string against the system clock.
///
/// Absent input means "today". See [`resolve_date_with_today`] for the
/// parsing rules.
///
/// # Errors
///
/// Returns [`PageError::NotFound`] when the input does not parse as a
/// calendar date.
pub fn resolve_date(raw: Option<&str>) -> Result<NaiveDate, PageError> {
    resolve_date_with_today(raw, Local::now().date_naive())
}

/// Resolves an optional date string against an injected "today".
///
/// - `None` resolves to `today`.
/// - `Some` must be a strict `YYYY-MM-DD` calendar date. A parsed date
///   outside the stored range is valid input; it simply yields an empty
///   listing downstream.
///
/// # Errors
///
/// Returns [`PageError::NotFound`] for malformed input, impossible
/// calendar dates, and empty-but-present strings.
pub fn resolve_date_with_today(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, PageError> {
    match raw {
        None => Ok(today),
        Some(input) => {
            NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| PageError::NotFound {
                input: String::from(input),
            })
        }
    }
}

/// Canonical textual key for repository queries (`YYYY-MM-DD`).
///
/// Both the explicit-date path and the "today" path go through this one
/// formatter so they produce identical query keys.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-readable date without leading zeros (`15.3.2024`).
#[must_use]
pub fn human_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}
