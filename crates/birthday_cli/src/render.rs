//! Text and JSON rendering of core views.

use birthday_core::{
    format_date, DerivedAgeInfo, Entity, EntityDetail, MonthGroup, ParsedDate, UpcomingBirthdays,
    EMPTY_LATER_MESSAGE, EMPTY_WINDOW_MESSAGE,
};
use serde::Serialize;
use serde_json::{json, Value};

const THIS_WINDOW_HEADING: &str = "Artimiausios 7 dienos";
const LATER_THIS_MONTH_HEADING: &str = "Vėliau šį mėnesį";

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|err| json!({ "error": err.to_string() }).to_string())
}

/// One `name  date` line per entity.
pub fn entity_lines(entities: &[&Entity], show_full: bool) -> String {
    entities
        .iter()
        .map(|entity| {
            format!(
                "{}  {}",
                entity.name,
                format_date(Some(&entity.birth_date), show_full)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn month_groups(groups: &[MonthGroup<'_>]) -> String {
    groups
        .iter()
        .map(|group| {
            let lines = group
                .entities
                .iter()
                .map(|entity| format!("  {}  {}", entity.name, entity.birth_date.format(false)))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{lines}", group.title)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn month_groups_json(groups: &[MonthGroup<'_>]) -> Value {
    groups
        .iter()
        .map(|group| {
            json!({
                "month": group.month,
                "title": group.title,
                "entities": group.entities,
            })
        })
        .collect()
}

pub fn upcoming(upcoming: &UpcomingBirthdays<'_>) -> String {
    let section = |heading: &str, entities: &[&Entity], empty: &str| {
        let body = if entities.is_empty() {
            format!("  {empty}")
        } else {
            entities
                .iter()
                .map(|entity| format!("  {}  {}", entity.name, entity.birth_date.format(false)))
                .collect::<Vec<_>>()
                .join("\n")
        };
        format!("{heading}:\n{body}")
    };

    format!(
        "{}\n\n{}",
        section(
            THIS_WINDOW_HEADING,
            upcoming.this_window.as_slice(),
            EMPTY_WINDOW_MESSAGE
        ),
        section(
            LATER_THIS_MONTH_HEADING,
            upcoming.later_this_month.as_slice(),
            EMPTY_LATER_MESSAGE
        )
    )
}

pub fn upcoming_json(upcoming: &UpcomingBirthdays<'_>) -> Value {
    json!({
        "this_window": upcoming.this_window,
        "later_this_month": upcoming.later_this_month,
    })
}

/// Detail view with Lithuanian labels.
pub fn detail(detail: &EntityDetail) -> String {
    let mut lines = vec![
        detail.name.clone(),
        format!("Gimimo data: {}", detail.birth_date),
    ];

    match detail.age_info {
        DerivedAgeInfo::Deceased { age_at_death } => {
            lines.push(format!("Amžius mirties metu: {age_at_death} metai"));
            if let Some(death_date) = &detail.death_date {
                lines.push(format!("Mirties data: {death_date}"));
            }
        }
        DerivedAgeInfo::Living {
            age,
            anniversary,
            turning_age,
            countdown,
        } => {
            lines.push(format!("Dabartinis amžius: {age} metai"));
            lines.push(format!(
                "Kitas gimtadienis: {anniversary} (sukaks {turning_age})"
            ));
            lines.push(format!(
                "Iki kito gimtadienio liko: {} mėn., {} sav., {} d.",
                countdown.months_until,
                countdown.weeks_until,
                countdown.remainder_days()
            ));
        }
    }

    lines.join("\n")
}

pub fn parsed_date(parsed: Option<&ParsedDate>) -> String {
    match parsed {
        Some(parsed) => format!(
            "{} (day={} month={} year={} format={})",
            parsed.date.format(true),
            parsed.date.day,
            parsed.date.month,
            parsed.date.year,
            parsed.format.as_str()
        ),
        None => format_date(None, true),
    }
}

#[cfg(test)]
mod tests {
    use super::{detail, parsed_date, upcoming};
    use birthday_core::{
        classify_upcoming, describe, parse_catalogue, parse_date_detailed, EMPTY_LATER_MESSAGE,
        UNKNOWN_DATE_LABEL,
    };
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
    }

    #[test]
    fn living_detail_shows_countdown_line() {
        let catalogue = parse_catalogue("Ona\to.png\tx\t2000-06-15\n");
        let entity = catalogue.find_by_name("ona").expect("entity");
        let text = detail(&describe(entity, reference()));
        assert!(text.contains("Dabartinis amžius: 24 metai"));
        assert!(text.contains("Kitas gimtadienis: 2025-06-15 (sukaks 25)"));
        assert!(text.contains("Iki kito gimtadienio liko: 12 mėn., 52 sav., 1 d."));
    }

    #[test]
    fn deceased_detail_shows_age_at_death() {
        let catalogue = parse_catalogue("Jonas\tj.png\tx\t1990-01-10\tx\t2020-01-09\n");
        let entity = catalogue.find_by_name("jonas").expect("entity");
        let text = detail(&describe(entity, reference()));
        assert!(text.contains("Amžius mirties metu: 29 metai"));
        assert!(text.contains("Mirties data: 2020-01-09"));
    }

    #[test]
    fn upcoming_prints_empty_state_messages() {
        let catalogue = parse_catalogue("Ona\to.png\tx\t2000-06-16\n");
        let text = upcoming(&classify_upcoming(catalogue.entities(), reference()));
        assert!(text.contains("Ona  06-16"));
        assert!(text.contains(EMPTY_LATER_MESSAGE));
    }

    #[test]
    fn parsed_date_labels_absence() {
        assert_eq!(parsed_date(None), UNKNOWN_DATE_LABEL);
        let parsed = parse_date_detailed("12/03/1999").expect("date parses");
        assert_eq!(
            parsed_date(Some(&parsed)),
            "1999-03-12 (day=12 month=3 year=1999 format=dd/mm/yyyy)"
        );
    }
}
