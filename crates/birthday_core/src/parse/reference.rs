//! Reference ("today") date parsing for callers that accept it as text.

use crate::parse::date_parser::parse_date;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for a caller-supplied reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceDateError {
    /// Text did not match any supported date layout.
    Unrecognized(String),
    /// Text parsed, but the day does not exist in that month/year.
    NotACalendarDay(String),
}

impl Display for ReferenceDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized(raw) => write!(f, "unrecognized reference date: `{raw}`"),
            Self::NotACalendarDay(raw) => {
                write!(f, "reference date is not a calendar day: `{raw}`")
            }
        }
    }
}

impl Error for ReferenceDateError {}

/// Parses a reference date with the catalogue date rules.
///
/// Unlike catalogue dates, the reference must be a real day, so `2024-02-30`
/// is rejected.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, ReferenceDateError> {
    let date = parse_date(raw).ok_or_else(|| ReferenceDateError::Unrecognized(raw.to_string()))?;
    date.to_naive_date()
        .ok_or_else(|| ReferenceDateError::NotACalendarDay(raw.to_string()))
}
