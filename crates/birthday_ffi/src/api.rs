//! FFI use-case API for the Flutter rendering layer.
//!
//! # Responsibility
//! - Expose catalogue views (cards, month groups, upcoming, detail, search)
//!   as flat, display-ready envelopes.
//! - Resolve the reference day at this boundary; core never reads a clock.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - The catalogue is loaded once per process; a failed load yields an empty
//!   catalogue for the rest of the process lifetime.

use birthday_core::{
    classify_upcoming, core_version as core_version_inner, describe, group_by_month,
    init_logging as init_logging_inner, load_catalogue_or_empty, parse_date_detailed,
    parse_reference_date, search_by_name, Catalogue, DerivedAgeInfo, Entity, EMPTY_LATER_MESSAGE,
    EMPTY_WINDOW_MESSAGE, NO_SEARCH_RESULTS_MESSAGE,
};
use chrono::{Local, NaiveDate};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const CATALOGUE_PATH_ENV: &str = "BIRTHDAY_CATALOGUE_PATH";
const CATALOGUE_DEFAULT_FILE_NAME: &str = "avatarai.txt";
static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Entity summary used by list, month and upcoming views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCard {
    pub name: String,
    pub image: String,
    /// `YYYY-MM-DD` (BC as `<year> pr. Kr.-MM-DD`).
    pub birth_date_full: String,
    /// `MM-DD`.
    pub birth_date_short: String,
}

/// One month section of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCard {
    pub month: u32,
    pub title: String,
    /// Sorted by birth day.
    pub entities: Vec<EntityCard>,
}

/// Everything the landing screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueOverview {
    /// All entities, alphabetical.
    pub cards: Vec<EntityCard>,
    pub months: Vec<MonthCard>,
    pub this_window: Vec<EntityCard>,
    pub later_this_month: Vec<EntityCard>,
    /// Empty-state text for `this_window`, empty when it has entries.
    pub this_window_message: String,
    /// Empty-state text for `later_this_month`, empty when it has entries.
    pub later_this_month_message: String,
    /// Diagnostics; empty on success.
    pub error: String,
}

/// Flattened detail projection of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetailView {
    pub name: String,
    pub image: String,
    pub birth_date: String,
    pub death_date: Option<String>,
    pub is_deceased: bool,
    /// Current age, or age at death.
    pub age: i32,
    /// Next anniversary `YYYY-MM-DD`, living entities only.
    pub next_anniversary: Option<String>,
    pub turning_age: Option<i32>,
    pub days_until: Option<i64>,
    pub weeks_until: Option<i64>,
    pub months_until: Option<i64>,
    pub remainder_days: Option<i64>,
}

/// Detail lookup envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetailResponse {
    pub ok: bool,
    pub detail: Option<EntityDetailView>,
    pub message: String,
}

/// Name search envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySearchResponse {
    /// Matching names in catalogue order.
    pub names: Vec<String>,
    /// Empty-state text when nothing matched a non-empty query.
    pub message: String,
}

/// Result of parsing free-form date text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDateView {
    pub day: u32,
    pub month: u32,
    /// Negative for BC.
    pub year: i32,
    /// Matched layout label, e.g. `yyyy-mm-dd`.
    pub format: String,
    pub formatted: String,
}

/// Builds the landing-screen overview.
///
/// `reference`: optional reference date text; `None` means today (local).
///
/// # FFI contract
/// - Sync call; first call reads the catalogue file.
/// - Never panics; invalid `reference` is reported through `error`.
#[flutter_rust_bridge::frb(sync)]
pub fn catalogue_overview(reference: Option<String>) -> CatalogueOverview {
    match resolve_reference(reference) {
        Ok(reference) => overview_for(shared_catalogue(), reference),
        Err(message) => CatalogueOverview {
            cards: Vec::new(),
            months: Vec::new(),
            this_window: Vec::new(),
            later_this_month: Vec::new(),
            this_window_message: EMPTY_WINDOW_MESSAGE.to_string(),
            later_this_month_message: EMPTY_LATER_MESSAGE.to_string(),
            error: message,
        },
    }
}

/// Looks up one entity by name (case-insensitive) and derives its age facts.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; unknown name or invalid reference returns `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn entity_detail(name: String, reference: Option<String>) -> EntityDetailResponse {
    match resolve_reference(reference) {
        Ok(reference) => detail_for(shared_catalogue(), name.as_str(), reference),
        Err(message) => EntityDetailResponse {
            ok: false,
            detail: None,
            message,
        },
    }
}

/// Case-insensitive substring search over entity names.
///
/// # FFI contract
/// - Sync call.
/// - Empty query returns no names and no message.
#[flutter_rust_bridge::frb(sync)]
pub fn entity_search(query: String) -> EntitySearchResponse {
    search_in(shared_catalogue(), query.as_str())
}

/// Parses one date string with the catalogue rules.
///
/// # FFI contract
/// - Sync call, pure.
/// - Returns `None` when the text is not a date.
#[flutter_rust_bridge::frb(sync)]
pub fn parse_date_text(raw: String) -> Option<ParsedDateView> {
    parse_date_detailed(raw.as_str()).map(|parsed| ParsedDateView {
        day: parsed.date.day,
        month: parsed.date.month,
        year: parsed.date.year,
        format: parsed.format.as_str().to_string(),
        formatted: parsed.date.format(true),
    })
}

fn shared_catalogue() -> &'static Catalogue {
    CATALOGUE.get_or_init(|| load_catalogue_or_empty(resolve_catalogue_path()))
}

fn resolve_catalogue_path() -> PathBuf {
    if let Ok(raw) = std::env::var(CATALOGUE_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(CATALOGUE_DEFAULT_FILE_NAME)
}

fn resolve_reference(reference: Option<String>) -> Result<NaiveDate, String> {
    match reference {
        Some(raw) if !raw.trim().is_empty() => parse_reference_date(raw.as_str()).map_err(|err| {
            warn!("event=reference_parse module=ffi status=error error={err}");
            err.to_string()
        }),
        _ => Ok(Local::now().date_naive()),
    }
}

fn overview_for(catalogue: &Catalogue, reference: NaiveDate) -> CatalogueOverview {
    let upcoming = classify_upcoming(catalogue.entities(), reference);
    let this_window = to_cards(&upcoming.this_window);
    let later_this_month = to_cards(&upcoming.later_this_month);
    CatalogueOverview {
        cards: to_cards(&catalogue.sorted_by_name()),
        months: group_by_month(catalogue)
            .into_iter()
            .map(|group| MonthCard {
                month: group.month,
                title: group.title.to_string(),
                entities: to_cards(&group.entities),
            })
            .collect(),
        this_window_message: empty_state_message(&this_window, EMPTY_WINDOW_MESSAGE),
        later_this_month_message: empty_state_message(&later_this_month, EMPTY_LATER_MESSAGE),
        this_window,
        later_this_month,
        error: String::new(),
    }
}

fn empty_state_message(cards: &[EntityCard], message: &str) -> String {
    if cards.is_empty() {
        message.to_string()
    } else {
        String::new()
    }
}

fn detail_for(catalogue: &Catalogue, name: &str, reference: NaiveDate) -> EntityDetailResponse {
    let Some(entity) = catalogue.find_by_name(name) else {
        return EntityDetailResponse {
            ok: false,
            detail: None,
            message: NO_SEARCH_RESULTS_MESSAGE.to_string(),
        };
    };

    let detail = describe(entity, reference);
    let mut view = EntityDetailView {
        name: detail.name,
        image: detail.image,
        birth_date: detail.birth_date,
        death_date: detail.death_date,
        is_deceased: detail.age_info.is_deceased(),
        age: detail.age_info.age_at_reference(),
        next_anniversary: None,
        turning_age: None,
        days_until: None,
        weeks_until: None,
        months_until: None,
        remainder_days: None,
    };
    if let DerivedAgeInfo::Living {
        anniversary,
        turning_age,
        countdown,
        ..
    } = detail.age_info
    {
        view.next_anniversary = Some(anniversary.to_string());
        view.turning_age = Some(turning_age);
        view.days_until = Some(countdown.days_until);
        view.weeks_until = Some(countdown.weeks_until);
        view.months_until = Some(countdown.months_until);
        view.remainder_days = Some(countdown.remainder_days());
    }

    EntityDetailResponse {
        ok: true,
        detail: Some(view),
        message: String::new(),
    }
}

fn search_in(catalogue: &Catalogue, query: &str) -> EntitySearchResponse {
    let names: Vec<String> = search_by_name(catalogue, query)
        .into_iter()
        .map(|entity| entity.name.clone())
        .collect();
    let message = if names.is_empty() && !query.is_empty() {
        NO_SEARCH_RESULTS_MESSAGE.to_string()
    } else {
        String::new()
    };
    EntitySearchResponse { names, message }
}

fn to_cards(entities: &[&Entity]) -> Vec<EntityCard> {
    entities
        .iter()
        .map(|entity| EntityCard {
            name: entity.name.clone(),
            image: entity.image.clone(),
            birth_date_full: entity.birth_date.format(true),
            birth_date_short: entity.birth_date.format(false),
        })
        .collect()
}
