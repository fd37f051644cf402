//! Calendar age, next anniversary and countdown derivation.
//!
//! # Responsibility
//! - Compute whole-year calendar age for living and deceased entities.
//! - Find the next anniversary and the distance to it in calendar days.
//!
//! # Invariants
//! - Age drops by one while `(month, day)` of the reference precedes the
//!   birth `(month, day)`; the same rule applies to age at death.
//! - The reference day itself counts as "already celebrated": on the
//!   birthday the next anniversary is one year ahead.
//! - Results are recomputed per call and never cached.

use crate::model::calendar_date::CalendarDate;
use crate::model::entity::Entity;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt::{Display, Formatter};

const DAYS_PER_WEEK: i64 = 7;
/// Fixed month length used by the coarse month countdown.
const DAYS_PER_COUNTDOWN_MONTH: i64 = 30;

/// Next occurrence of the birth month/day.
///
/// `month`/`day` are copied from the birth date verbatim, so `02-31` stays
/// `02-31` here even though the countdown treats it as early March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anniversary {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Anniversary {
    /// Calendar day the anniversary lands on.
    ///
    /// Days past the end of the month roll forward into the next month.
    pub fn landing_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)?
            .checked_add_days(Days::new(u64::from(self.day.saturating_sub(1))))
    }
}

impl Display for Anniversary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Time left until the next anniversary.
///
/// The three figures overlap: weeks and months are both derived from the same
/// day total, and [`Countdown::remainder_days`] is the days-mod-week part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days_until: i64,
    pub weeks_until: i64,
    pub months_until: i64,
}

impl Countdown {
    pub fn from_days(days_until: i64) -> Self {
        Self {
            days_until,
            weeks_until: days_until.div_euclid(DAYS_PER_WEEK),
            months_until: days_until.div_euclid(DAYS_PER_COUNTDOWN_MONTH),
        }
    }

    /// Days left over after whole weeks.
    pub fn remainder_days(&self) -> i64 {
        self.days_until.rem_euclid(DAYS_PER_WEEK)
    }
}

/// Age facts derived for one entity against a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DerivedAgeInfo {
    Living {
        age: i32,
        anniversary: Anniversary,
        turning_age: i32,
        countdown: Countdown,
    },
    Deceased {
        age_at_death: i32,
    },
}

impl DerivedAgeInfo {
    pub fn is_deceased(&self) -> bool {
        matches!(self, Self::Deceased { .. })
    }

    /// Current age, or age at death for deceased entities.
    pub fn age_at_reference(&self) -> i32 {
        match self {
            Self::Living { age, .. } => *age,
            Self::Deceased { age_at_death } => *age_at_death,
        }
    }
}

/// Whole-year age of `birth` on `(year, month, day)`.
pub fn calendar_age(birth: &CalendarDate, year: i32, month: u32, day: u32) -> i32 {
    let age = year - birth.year;
    if (month, day) < birth.month_day() {
        age - 1
    } else {
        age
    }
}

/// Next anniversary of `birth` strictly after `reference`.
pub fn next_anniversary(birth: &CalendarDate, reference: NaiveDate) -> Anniversary {
    let already_celebrated = (reference.month(), reference.day()) >= birth.month_day();
    let year = if already_celebrated {
        reference.year() + 1
    } else {
        reference.year()
    };
    Anniversary {
        year,
        month: birth.month,
        day: birth.day,
    }
}

/// Whole calendar days from `reference` to the anniversary.
///
/// Returns `0` only when the anniversary cannot be placed on chrono's
/// calendar, which happens at the edge of its supported year range.
pub fn days_until(anniversary: &Anniversary, reference: NaiveDate) -> i64 {
    anniversary
        .landing_date()
        .map_or(0, |date| date.signed_duration_since(reference).num_days())
}

/// Derives age facts for `birth` (and optional `death`) on `reference`.
///
/// A death date without a year leaves the entity living.
pub fn compute_age_info(
    birth: &CalendarDate,
    death: Option<&CalendarDate>,
    reference: NaiveDate,
) -> DerivedAgeInfo {
    if let Some(death) = death.filter(|death| death.has_year()) {
        return DerivedAgeInfo::Deceased {
            age_at_death: calendar_age(birth, death.year, death.month, death.day),
        };
    }

    let anniversary = next_anniversary(birth, reference);
    DerivedAgeInfo::Living {
        age: calendar_age(birth, reference.year(), reference.month(), reference.day()),
        anniversary,
        turning_age: anniversary.year - birth.year,
        countdown: Countdown::from_days(days_until(&anniversary, reference)),
    }
}

/// Convenience wrapper over [`compute_age_info`] for catalogue entities.
pub fn entity_age_info(entity: &Entity, reference: NaiveDate) -> DerivedAgeInfo {
    compute_age_info(&entity.birth_date, entity.death_date.as_ref(), reference)
}

#[cfg(test)]
mod tests {
    use super::{calendar_age, next_anniversary, Anniversary, Countdown};
    use crate::model::calendar_date::CalendarDate;
    use chrono::NaiveDate;

    fn birth(day: u32, month: u32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year, "").expect("valid birth")
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid reference")
    }

    #[test]
    fn calendar_age_handles_bc_birth_years() {
        assert_eq!(calendar_age(&birth(5, 3, -500), 2024, 3, 4), 2523);
        assert_eq!(calendar_age(&birth(5, 3, -500), 2024, 3, 5), 2524);
    }

    #[test]
    fn anniversary_stays_in_reference_year_before_birthday() {
        let anniversary = next_anniversary(&birth(15, 6, 2000), ymd(2024, 6, 14));
        assert_eq!(anniversary.year, 2024);
    }

    #[test]
    fn landing_date_rolls_overflowing_days_forward() {
        let leap = Anniversary {
            year: 2025,
            month: 2,
            day: 29,
        };
        assert_eq!(leap.landing_date(), Some(ymd(2025, 3, 1)));

        let short_month = Anniversary {
            year: 2024,
            month: 4,
            day: 31,
        };
        assert_eq!(short_month.landing_date(), Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn anniversary_display_is_zero_padded() {
        let anniversary = Anniversary {
            year: 2025,
            month: 1,
            day: 9,
        };
        assert_eq!(anniversary.to_string(), "2025-01-09");
    }

    #[test]
    fn countdown_breaks_days_into_overlapping_units() {
        let countdown = Countdown::from_days(45);
        assert_eq!(countdown.weeks_until, 6);
        assert_eq!(countdown.months_until, 1);
        assert_eq!(countdown.remainder_days(), 3);
    }
}
