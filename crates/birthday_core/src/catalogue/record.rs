//! Tab-separated catalogue record parsing.
//!
//! # Responsibility
//! - Split catalogue text into records and build entities from them.
//! - Count dropped records instead of reporting them as errors.
//!
//! # Invariants
//! - Whitespace-only fields are discarded before positional lookup.
//! - Field positions after discarding: 0 name, 1 image, 3 birth, 5 death.
//! - Records with fewer than two fields, or without a resolvable birth date,
//!   never become entities. A birth year of `0` counts as unresolved.

use crate::model::calendar_date::CalendarDate;
use crate::model::entity::{Catalogue, Entity, LoadStats};
use crate::parse::date_parser::parse_date;
use log::debug;

const FIELD_SEPARATOR: char = '\t';
const MIN_FIELDS: usize = 2;
const NAME_FIELD: usize = 0;
const IMAGE_FIELD: usize = 1;
const BIRTH_FIELD: usize = 3;
const DEATH_FIELD: usize = 5;

/// Outcome of parsing one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Entity(Entity),
    /// Fewer than two non-empty fields.
    Malformed,
    /// Birth date missing or not parseable.
    IncompleteBirthDate,
}

/// Parses one catalogue line.
pub fn parse_record(line: &str) -> RecordOutcome {
    let fields: Vec<&str> = line
        .split(FIELD_SEPARATOR)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect();
    if fields.len() < MIN_FIELDS {
        return RecordOutcome::Malformed;
    }

    let field = |index: usize| fields.get(index).copied().unwrap_or("");
    let birth_date = parse_date(field(BIRTH_FIELD)).filter(CalendarDate::has_year);
    let Some(birth_date) = birth_date else {
        return RecordOutcome::IncompleteBirthDate;
    };

    RecordOutcome::Entity(Entity {
        name: field(NAME_FIELD).to_string(),
        image: field(IMAGE_FIELD).to_string(),
        birth_date,
        death_date: parse_date(field(DEATH_FIELD)),
    })
}

/// Builds a catalogue from the full source text.
pub fn parse_catalogue(text: &str) -> Catalogue {
    let mut entities = Vec::new();
    let mut stats = LoadStats::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;
        match parse_record(line) {
            RecordOutcome::Entity(entity) => entities.push(entity),
            RecordOutcome::Malformed => {
                stats.malformed += 1;
                debug!(
                    "event=record_skip module=catalogue reason=malformed line={}",
                    index + 1
                );
            }
            RecordOutcome::IncompleteBirthDate => {
                stats.incomplete += 1;
                debug!(
                    "event=record_skip module=catalogue reason=incomplete_birth_date line={}",
                    index + 1
                );
            }
        }
    }

    Catalogue::new(entities, stats)
}
