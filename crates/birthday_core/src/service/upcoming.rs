//! "Upcoming birthday" classification within the reference month.
//!
//! # Responsibility
//! - Split entities born in the reference month into a short look-ahead
//!   window and the rest of the month.
//!
//! # Invariants
//! - Only entities whose birth month equals the reference month qualify.
//! - Window membership is `reference_day <= day <= reference_day + 7`; the
//!   upper bound does not wrap into the next month, so birthdays early next
//!   month never show up near month end.
//! - Both buckets are ordered by birth day; equal days keep input order.

use crate::model::entity::Entity;
use chrono::{Datelike, NaiveDate};

/// Width of the look-ahead window in days, inclusive of both ends.
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

/// Result of one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays<'a> {
    /// Birthdays from the reference day through `UPCOMING_WINDOW_DAYS` later.
    pub this_window: Vec<&'a Entity>,
    /// Birthdays after the window but still in the reference month.
    pub later_this_month: Vec<&'a Entity>,
}

impl UpcomingBirthdays<'_> {
    pub fn is_empty(&self) -> bool {
        self.this_window.is_empty() && self.later_this_month.is_empty()
    }
}

/// Classifies `entities` against `reference`.
pub fn classify_upcoming<'a, I>(entities: I, reference: NaiveDate) -> UpcomingBirthdays<'a>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let reference_month = reference.month();
    let window_start = reference.day();
    let window_end = window_start + UPCOMING_WINDOW_DAYS;

    let mut upcoming = UpcomingBirthdays::default();
    for entity in entities {
        let birth = &entity.birth_date;
        if birth.month != reference_month {
            continue;
        }
        if (window_start..=window_end).contains(&birth.day) {
            upcoming.this_window.push(entity);
        } else if birth.day > window_end {
            upcoming.later_this_month.push(entity);
        }
    }

    upcoming.this_window.sort_by_key(|entity| entity.birth_date.day);
    upcoming
        .later_this_month
        .sort_by_key(|entity| entity.birth_date.day);
    upcoming
}
