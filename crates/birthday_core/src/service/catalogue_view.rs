//! Read-only catalogue projections for the rendering layer.
//!
//! # Responsibility
//! - Group entities by birth month with Lithuanian month titles.
//! - Provide name search and a per-entity detail projection.
//!
//! # Invariants
//! - Month groups are in calendar order and skip months without entities.
//! - Entities inside a month are ordered by birth day, ties in catalogue order.
//! - Search is a case-insensitive substring match; an empty query finds nothing.

use crate::model::calendar_date::format_date;
use crate::model::entity::{Catalogue, Entity};
use crate::parse::month_name::LITHUANIAN_MONTHS;
use crate::service::age::{entity_age_info, DerivedAgeInfo};
use chrono::NaiveDate;
use serde::Serialize;

/// Message shown when the look-ahead window is empty.
pub const EMPTY_WINDOW_MESSAGE: &str = "Šią savaitę gimtadienių nėra";
/// Message shown when nothing remains later in the month.
pub const EMPTY_LATER_MESSAGE: &str = "Daugiau gimtadienių šį mėnesį nėra";
/// Message shown when a name search finds nothing.
pub const NO_SEARCH_RESULTS_MESSAGE: &str = "Veikėjų nerasta";

/// Entities sharing one birth month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    /// Month number, `1..=12`.
    pub month: u32,
    pub title: &'static str,
    pub entities: Vec<&'a Entity>,
}

/// Groups catalogue entities by birth month.
pub fn group_by_month(catalogue: &Catalogue) -> Vec<MonthGroup<'_>> {
    let mut buckets: [Vec<&Entity>; 12] = Default::default();
    for entity in catalogue.entities() {
        let bucket = usize::try_from(entity.birth_date.month)
            .ok()
            .and_then(|month| month.checked_sub(1))
            .and_then(|index| buckets.get_mut(index));
        if let Some(bucket) = bucket {
            bucket.push(entity);
        }
    }

    buckets
        .into_iter()
        .zip(LITHUANIAN_MONTHS)
        .enumerate()
        .filter(|(_, (entities, _))| !entities.is_empty())
        .map(|(index, (mut entities, title))| {
            entities.sort_by_key(|entity| entity.birth_date.day);
            MonthGroup {
                month: index as u32 + 1,
                title,
                entities,
            }
        })
        .collect()
}

/// Entities whose name contains `query`, ignoring case.
pub fn search_by_name<'a>(catalogue: &'a Catalogue, query: &str) -> Vec<&'a Entity> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalogue
        .entities()
        .iter()
        .filter(|entity| entity.name.to_lowercase().contains(&needle))
        .collect()
}

/// Detail projection for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDetail {
    pub name: String,
    pub image: String,
    /// Full birth date, e.g. `1990-01-10` or `500 pr. Kr.-03-05`.
    pub birth_date: String,
    /// Full death date when deceased.
    pub death_date: Option<String>,
    pub age_info: DerivedAgeInfo,
}

/// Builds the detail projection of `entity` on `reference`.
pub fn describe(entity: &Entity, reference: NaiveDate) -> EntityDetail {
    EntityDetail {
        name: entity.name.clone(),
        image: entity.image.clone(),
        birth_date: format_date(Some(&entity.birth_date), true),
        death_date: entity
            .recorded_death()
            .map(|death| format_date(Some(death), true)),
        age_info: entity_age_info(entity, reference),
    }
}

#[cfg(test)]
mod tests {
    use super::{group_by_month, search_by_name};
    use crate::model::calendar_date::CalendarDate;
    use crate::model::entity::{Catalogue, Entity, LoadStats};

    fn born(name: &str, month: u32, day: u32) -> Entity {
        Entity {
            name: name.to_string(),
            image: String::new(),
            birth_date: CalendarDate::new(day, month, 2001, "").expect("valid birth"),
            death_date: None,
        }
    }

    fn catalogue() -> Catalogue {
        Catalogue::new(
            vec![
                born("Ona", 5, 20),
                born("Jonas", 1, 3),
                born("Petras", 5, 2),
                born("Onutė", 12, 31),
            ],
            LoadStats::default(),
        )
    }

    #[test]
    fn groups_skip_empty_months_and_sort_by_day() {
        let catalogue = catalogue();
        let groups = group_by_month(&catalogue);
        let months: Vec<u32> = groups.iter().map(|group| group.month).collect();
        assert_eq!(months, vec![1, 5, 12]);

        let may = &groups[1];
        assert_eq!(may.title, "Gegužė");
        let names: Vec<&str> = may.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Petras", "Ona"]);
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let catalogue = catalogue();
        let names: Vec<&str> = search_by_name(&catalogue, "ON")
            .into_iter()
            .map(|entity| entity.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ona", "Jonas", "Onutė"]);
    }

    #[test]
    fn month_outside_calendar_is_left_out_of_groups() {
        let mut stray = born("Stray", 1, 1);
        stray.birth_date.month = 0;
        let catalogue = Catalogue::new(vec![stray, born("Ona", 5, 20)], LoadStats::default());
        let months: Vec<u32> = group_by_month(&catalogue)
            .iter()
            .map(|group| group.month)
            .collect();
        assert_eq!(months, vec![5]);
    }

    #[test]
    fn empty_query_finds_nothing() {
        assert!(search_by_name(&catalogue(), "").is_empty());
    }
}
