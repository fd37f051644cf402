//! Catalogue entity and the immutable collection built from one load.
//!
//! # Responsibility
//! - Define the record shape handed to age/upcoming computations.
//! - Own the entity collection together with its load statistics.
//!
//! # Invariants
//! - Every entity carries a complete birth date.
//! - A `Catalogue` is never mutated after construction; reload builds a new one.

use crate::model::calendar_date::CalendarDate;
use serde::Serialize;

/// One catalogue record with a resolved birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    /// Image reference exactly as found in the source record.
    pub image: String,
    pub birth_date: CalendarDate,
    pub death_date: Option<CalendarDate>,
}

impl Entity {
    /// Death date, ignoring one recorded without a year.
    pub fn recorded_death(&self) -> Option<&CalendarDate> {
        self.death_date.as_ref().filter(|death| death.has_year())
    }

    pub fn is_deceased(&self) -> bool {
        self.recorded_death().is_some()
    }
}

/// Counters collected while turning raw text into entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Non-blank lines seen.
    pub lines: usize,
    /// Lines dropped for having fewer than two non-empty fields.
    pub malformed: usize,
    /// Records dropped because the birth date did not resolve.
    pub incomplete: usize,
}

/// Entity collection produced by one catalogue load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    entities: Vec<Entity>,
    stats: LoadStats,
}

impl Catalogue {
    pub fn new(entities: Vec<Entity>, stats: LoadStats) -> Self {
        Self { entities, stats }
    }

    /// Empty collection used when the source cannot be read.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entities in source order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities ordered by lowercase name, ascending.
    ///
    /// Ties keep source order.
    pub fn sorted_by_name(&self) -> Vec<&Entity> {
        let mut sorted: Vec<&Entity> = self.entities.iter().collect();
        sorted.sort_by_cached_key(|entity| entity.name.to_lowercase());
        sorted
    }

    /// First entity whose name equals `name`, ignoring case and surrounding
    /// whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        let wanted = name.trim().to_lowercase();
        self.entities
            .iter()
            .find(|entity| entity.name.to_lowercase() == wanted)
    }
}
