use birthday_core::{format_date, parse_date, parse_date_detailed, DateFormat};

#[test]
fn absence_markers_yield_none() {
    for raw in ["", "   ", "unknown", "none", " NONE ", "Unknown"] {
        assert_eq!(parse_date(raw), None, "input `{raw}` should be absent");
    }
}

#[test]
fn iso_dates_format_back_to_the_same_text() {
    for (month, day) in [(1, 1), (2, 29), (6, 15), (9, 30), (12, 31)] {
        let raw = format!("1987-{month:02}-{day:02}");
        let date = parse_date(&raw).expect("iso date should parse");
        assert_eq!(date.format(false), format!("{month:02}-{day:02}"));
        assert_eq!(date.format(true), raw);
    }
}

#[test]
fn single_digit_fields_are_accepted() {
    let date = parse_date("1987-6-5").expect("short fields should parse");
    assert_eq!((date.year, date.month, date.day), (1987, 6, 5));
    assert_eq!(format_date(Some(&date), true), "1987-06-05");
}

#[test]
fn every_numeric_layout_is_recognized() {
    let cases = [
        ("1990.01.10", DateFormat::IsoDot),
        ("1990/01/10", DateFormat::IsoSlash),
        ("10.01.1990", DateFormat::DmyDot),
        ("10/01/1990", DateFormat::DmySlash),
        ("10-01-1990", DateFormat::DmyDash),
    ];
    for (raw, expected_format) in cases {
        let parsed = parse_date_detailed(raw).expect("numeric layout should parse");
        assert_eq!(parsed.format, expected_format, "{raw}");
        assert_eq!(
            (parsed.date.year, parsed.date.month, parsed.date.day),
            (1990, 1, 10),
            "{raw}"
        );
    }
}

#[test]
fn month_name_layouts_accept_both_languages() {
    let date = parse_date("March 5 1990").expect("english month first");
    assert_eq!((date.year, date.month, date.day), (1990, 3, 5));

    let date = parse_date("5 gegužė 1990").expect("lithuanian with diacritics");
    assert_eq!((date.year, date.month, date.day), (1990, 5, 5));

    let date = parse_date("17 Rugsejis 2001").expect("transliterated lithuanian");
    assert_eq!((date.year, date.month, date.day), (2001, 9, 17));

    let date = parse_date("dec 24 1999").expect("abbreviated english");
    assert_eq!((date.year, date.month, date.day), (1999, 12, 24));
}

#[test]
fn bc_dates_negate_the_year_wherever_the_marker_is() {
    let date = parse_date("March 5 500 BC").expect("bc suffix");
    assert_eq!((date.day, date.month, date.year), (5, 3, -500));
    assert_eq!(date.format(true), "500 pr. Kr.-03-05");

    let date = parse_date("bc 0753-04-21").expect("bc prefix");
    assert_eq!((date.day, date.month, date.year), (21, 4, -753));
    assert_eq!(date.original, "bc 0753-04-21");
}

#[test]
fn day_is_not_checked_against_month_length() {
    let date = parse_date("31.02.2020").expect("lenient day should be kept");
    assert_eq!((date.day, date.month, date.year), (31, 2, 2020));
}

#[test]
fn out_of_range_components_are_rejected() {
    assert_eq!(parse_date("2020-00-10"), None);
    assert_eq!(parse_date("32.01.2020"), None);
    assert_eq!(parse_date("Smarch 5 2020"), None);
    assert_eq!(parse_date("someday"), None);
}

#[test]
fn unknown_month_name_falls_through_to_next_layout() {
    // `Day 5 1990` matches month-first but `Day` is no month.
    let parsed = parse_date_detailed("Day 5 1990, 5 June 1990").expect("day-first fallback");
    assert_eq!(parsed.format, DateFormat::DayFirstMonthName);
    assert_eq!((parsed.date.day, parsed.date.month, parsed.date.year), (5, 6, 1990));
}
