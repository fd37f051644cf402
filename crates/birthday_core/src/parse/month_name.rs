//! Month name lookup for English and Lithuanian spellings.

/// Lithuanian month titles in calendar order, used for month-grouped views.
pub const LITHUANIAN_MONTHS: [&str; 12] = [
    "Sausis",
    "Vasaris",
    "Kovas",
    "Balandis",
    "Gegužė",
    "Birželis",
    "Liepa",
    "Rugpjūtis",
    "Rugsėjis",
    "Spalis",
    "Lapkritis",
    "Gruodis",
];

/// Resolves a month name to its number (`1..=12`).
///
/// Matching is case-insensitive. Accepted spellings:
/// - English full names and three-letter abbreviations (`march`, `mar`).
/// - Lithuanian names, with and without diacritics (`gegužė`, `geguze`).
///
/// Returns `None` for anything else.
pub fn resolve_month_name(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "january" | "jan" | "sausis" => 1,
        "february" | "feb" | "vasaris" => 2,
        "march" | "mar" | "kovas" => 3,
        "april" | "apr" | "balandis" => 4,
        "may" | "gegužė" | "geguze" => 5,
        "june" | "jun" | "birželis" | "birzelis" => 6,
        "july" | "jul" | "liepa" => 7,
        "august" | "aug" | "rugpjūtis" | "rugpjutis" => 8,
        "september" | "sep" | "rugsėjis" | "rugsejis" => 9,
        "october" | "oct" | "spalis" => 10,
        "november" | "nov" | "lapkritis" => 11,
        "december" | "dec" | "gruodis" => 12,
        _ => return None,
    };
    Some(month)
}

/// Lithuanian title for a month number, `None` outside `1..=12`.
pub fn lithuanian_month_title(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    LITHUANIAN_MONTHS.get(index).copied()
}
