//! Calendar date value produced by the date parser.
//!
//! # Responsibility
//! - Hold one fully-resolved day/month/year triple plus its source text.
//! - Render dates in the catalogue display form (`YYYY-MM-DD`, `MM-DD`).
//!
//! # Invariants
//! - `month` is always in `1..=12` and `day` in `1..=31`.
//! - `day` is not checked against the length of `month` (`31.02` is kept).
//! - Negative `year` means BC; the magnitude is the conventional year number.
//! - There is no partial date: absence is `Option::None` at the call site.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Placeholder rendered for an absent date.
pub const UNKNOWN_DATE_LABEL: &str = "Nežinoma";

/// Suffix appended to the year magnitude of BC dates.
const BC_YEAR_SUFFIX: &str = " pr. Kr.";

/// Fully-resolved calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    /// Negative for BC years.
    pub year: i32,
    /// Verbatim input the date was parsed from.
    pub original: String,
}

impl CalendarDate {
    /// Builds a date from already-validated components.
    ///
    /// Returns `None` when `month` or `day` is outside the accepted range.
    pub fn new(day: u32, month: u32, year: i32, original: impl Into<String>) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self {
            day,
            month,
            year,
            original: original.into(),
        })
    }

    /// Whether the year is before the common era.
    pub fn is_bc(&self) -> bool {
        self.year < 0
    }

    /// Year `0` counts as no year at all.
    pub fn has_year(&self) -> bool {
        self.year != 0
    }

    /// `(month, day)` key used for anniversary ordering.
    pub fn month_day(&self) -> (u32, u32) {
        (self.month, self.day)
    }

    /// Converts to a real calendar day.
    ///
    /// Strict: `31.02` or years outside chrono's range yield `None`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Renders the date for display.
    ///
    /// `show_full` prefixes the year (`1990-01-10`, `500 pr. Kr.-03-05`);
    /// otherwise only `MM-DD` is produced. Year `0` has no prefix.
    pub fn format(&self, show_full: bool) -> String {
        let mut formatted = String::new();
        if show_full && self.year != 0 {
            formatted.push_str(&self.year.unsigned_abs().to_string());
            if self.is_bc() {
                formatted.push_str(BC_YEAR_SUFFIX);
            }
            formatted.push('-');
        }
        formatted.push_str(&format!("{:02}-{:02}", self.month, self.day));
        formatted
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(true))
    }
}

/// Renders an optional date, using [`UNKNOWN_DATE_LABEL`] for absence.
pub fn format_date(date: Option<&CalendarDate>, show_full: bool) -> String {
    match date {
        Some(date) => date.format(show_full),
        None => UNKNOWN_DATE_LABEL.to_string(),
    }
}
