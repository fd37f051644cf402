//! Free-form date string parsing.
//!
//! # Responsibility
//! - Turn catalogue date text into a [`CalendarDate`] or a clean absence.
//! - Recognize BC markers and mixed English/Lithuanian month names.
//!
//! # Invariants
//! - Formats are tried in [`FORMAT_PRIORITY`] order; the first valid match wins.
//! - A format whose month name does not resolve, or whose month/day fall
//!   outside `1..=12`/`1..=31`, is skipped rather than failing the parse.
//! - Day is never checked against the month length.
//! - The returned date keeps the untouched input as `original`.

use crate::model::calendar_date::CalendarDate;
use crate::parse::month_name::resolve_month_name;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BC_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)bc").expect("valid bc regex"));

static ISO_DASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})").expect("valid iso dash regex")
});
static ISO_DOT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})\.([0-9]{1,2})\.([0-9]{1,2})").expect("valid iso dot regex")
});
static ISO_SLASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})").expect("valid iso slash regex")
});
static DMY_DOT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})").expect("valid dmy dot regex")
});
static DMY_SLASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").expect("valid dmy slash regex")
});
static DMY_DASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})").expect("valid dmy dash regex")
});
// Month-name layouts take short years so ancient dates (`March 5 500 BC`) parse.
static MONTH_NAME_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\p{L}+)\s+([0-9]{1,2})\s+([0-9]{1,4})").expect("valid month-first regex")
});
static DAY_FIRST_MONTH_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})\s+(\p{L}+)\s+([0-9]{1,4})").expect("valid day-first regex")
});

/// Supported date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYY-MM-DD`, the native catalogue format.
    IsoDash,
    /// `YYYY.MM.DD`
    IsoDot,
    /// `YYYY/MM/DD`
    IsoSlash,
    /// `DD.MM.YYYY`
    DmyDot,
    /// `DD/MM/YYYY`
    DmySlash,
    /// `DD-MM-YYYY`
    DmyDash,
    /// `<MonthName> D YYYY`
    MonthNameFirst,
    /// `D <MonthName> YYYY`
    DayFirstMonthName,
}

/// Order in which layouts are tried.
pub const FORMAT_PRIORITY: [DateFormat; 8] = [
    DateFormat::IsoDash,
    DateFormat::IsoDot,
    DateFormat::IsoSlash,
    DateFormat::DmyDot,
    DateFormat::DmySlash,
    DateFormat::DmyDash,
    DateFormat::MonthNameFirst,
    DateFormat::DayFirstMonthName,
];

/// Capture-group positions of one layout.
struct FieldLayout {
    year: usize,
    month: usize,
    day: usize,
    month_is_name: bool,
}

/// Fields pulled out of one layout match, before the BC sign is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Successful parse together with the layout that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    pub date: CalendarDate,
    pub format: DateFormat,
    pub is_bc: bool,
}

impl DateFormat {
    /// Stable lowercase label for logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsoDash => "yyyy-mm-dd",
            Self::IsoDot => "yyyy.mm.dd",
            Self::IsoSlash => "yyyy/mm/dd",
            Self::DmyDot => "dd.mm.yyyy",
            Self::DmySlash => "dd/mm/yyyy",
            Self::DmyDash => "dd-mm-yyyy",
            Self::MonthNameFirst => "month d yyyy",
            Self::DayFirstMonthName => "d month yyyy",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::IsoDash => &*ISO_DASH_RE,
            Self::IsoDot => &*ISO_DOT_RE,
            Self::IsoSlash => &*ISO_SLASH_RE,
            Self::DmyDot => &*DMY_DOT_RE,
            Self::DmySlash => &*DMY_SLASH_RE,
            Self::DmyDash => &*DMY_DASH_RE,
            Self::MonthNameFirst => &*MONTH_NAME_FIRST_RE,
            Self::DayFirstMonthName => &*DAY_FIRST_MONTH_NAME_RE,
        }
    }

    fn layout(self) -> FieldLayout {
        let (year, month, day, month_is_name) = match self {
            Self::IsoDash | Self::IsoDot | Self::IsoSlash => (1, 2, 3, false),
            Self::DmyDot | Self::DmySlash | Self::DmyDash => (3, 2, 1, false),
            Self::MonthNameFirst => (3, 1, 2, true),
            Self::DayFirstMonthName => (3, 2, 1, true),
        };
        FieldLayout {
            year,
            month,
            day,
            month_is_name,
        }
    }

    /// Extracts fields from the first occurrence of this layout in `text`.
    ///
    /// Returns `None` when the layout does not occur or its month name is
    /// unknown. Range checks are left to [`CalendarDate::new`].
    pub fn match_fields(self, text: &str) -> Option<MatchedFields> {
        let caps = self.regex().captures(text)?;
        let layout = self.layout();

        let month: u32 = if layout.month_is_name {
            resolve_month_name(capture(&caps, layout.month)?)?
        } else {
            capture(&caps, layout.month)?.parse().ok()?
        };

        Some(MatchedFields {
            year: capture(&caps, layout.year)?.parse().ok()?,
            month,
            day: capture(&caps, layout.day)?.parse().ok()?,
        })
    }
}

fn capture<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

/// Parses a catalogue date string.
///
/// Empty input and the markers `none`/`unknown` (any case) are absent.
/// A `bc` marker anywhere in the text negates the year.
pub fn parse_date(raw: &str) -> Option<CalendarDate> {
    parse_date_detailed(raw).map(|parsed| parsed.date)
}

/// Same as [`parse_date`] but also reports which layout matched.
pub fn parse_date_detailed(raw: &str) -> Option<ParsedDate> {
    let trimmed = raw.trim();
    if is_absence_marker(trimmed) {
        return None;
    }

    let is_bc = BC_MARKER_RE.is_match(trimmed);
    let stripped = BC_MARKER_RE.replace_all(trimmed, "");
    let cleaned = stripped.trim();

    FORMAT_PRIORITY.iter().find_map(|&format| {
        let fields = format.match_fields(cleaned)?;
        let year = if is_bc { -fields.year } else { fields.year };
        let date = CalendarDate::new(fields.day, fields.month, year, raw)?;
        Some(ParsedDate {
            date,
            format,
            is_bc,
        })
    })
}

fn is_absence_marker(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("unknown")
}

#[cfg(test)]
mod tests {
    use super::{parse_date, parse_date_detailed, DateFormat, MatchedFields, FORMAT_PRIORITY};

    #[test]
    fn priority_starts_with_native_format() {
        assert_eq!(FORMAT_PRIORITY[0], DateFormat::IsoDash);
        assert_eq!(FORMAT_PRIORITY[7], DateFormat::DayFirstMonthName);
    }

    #[test]
    fn dash_layout_prefers_year_first() {
        let parsed = parse_date_detailed("2020-01-02").expect("iso date");
        assert_eq!(parsed.format, DateFormat::IsoDash);
        assert_eq!((parsed.date.day, parsed.date.month), (2, 1));

        let parsed = parse_date_detailed("01-02-2020").expect("dmy date");
        assert_eq!(parsed.format, DateFormat::DmyDash);
        assert_eq!((parsed.date.day, parsed.date.month), (1, 2));
    }

    #[test]
    fn match_fields_skips_unknown_month_name() {
        assert_eq!(DateFormat::MonthNameFirst.match_fields("Smarch 5 1990"), None);
        assert_eq!(
            DateFormat::MonthNameFirst.match_fields("March 5 1990"),
            Some(MatchedFields {
                year: 1990,
                month: 3,
                day: 5
            })
        );
    }

    #[test]
    fn out_of_range_match_falls_through_to_next_layout() {
        // `2020-13-01` is not a valid ISO date; no later layout matches either.
        assert_eq!(parse_date("2020-13-01"), None);

        let parsed = parse_date_detailed("2020-13-01 01.02.2020").expect("dmy fallback");
        assert_eq!(parsed.format, DateFormat::DmyDot);
        assert_eq!((parsed.date.day, parsed.date.month, parsed.date.year), (1, 2, 2020));
    }

    #[test]
    fn bc_marker_is_stripped_before_matching() {
        let parsed = parse_date_detailed("BC 12 March 44").expect("bc date");
        assert!(parsed.is_bc);
        assert_eq!(parsed.format, DateFormat::DayFirstMonthName);
        assert_eq!(parsed.date.year, -44);
    }

    #[test]
    fn keeps_untrimmed_original() {
        let date = parse_date("  1999-12-31 ").expect("padded date");
        assert_eq!(date.original, "  1999-12-31 ");
    }
}
