//! Core date/calendar engine for the birthday catalogue.
//! This crate owns date parsing, age arithmetic and upcoming classification.

pub mod catalogue;
pub mod logging;
pub mod model;
pub mod parse;
pub mod service;

pub use catalogue::load::{load_catalogue, load_catalogue_or_empty};
pub use catalogue::record::{parse_catalogue, parse_record, RecordOutcome};
pub use catalogue::{CatalogueError, CatalogueResult};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::calendar_date::{format_date, CalendarDate, UNKNOWN_DATE_LABEL};
pub use model::entity::{Catalogue, Entity, LoadStats};
pub use parse::date_parser::{parse_date, parse_date_detailed, DateFormat, ParsedDate};
pub use parse::month_name::{lithuanian_month_title, resolve_month_name, LITHUANIAN_MONTHS};
pub use parse::reference::{parse_reference_date, ReferenceDateError};
pub use service::age::{
    calendar_age, compute_age_info, entity_age_info, next_anniversary, Anniversary, Countdown,
    DerivedAgeInfo,
};
pub use service::catalogue_view::{
    describe, group_by_month, search_by_name, EntityDetail, MonthGroup, EMPTY_LATER_MESSAGE,
    EMPTY_WINDOW_MESSAGE, NO_SEARCH_RESULTS_MESSAGE,
};
pub use service::upcoming::{classify_upcoming, UpcomingBirthdays, UPCOMING_WINDOW_DAYS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
