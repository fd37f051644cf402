//! Command-line front end for the birthday catalogue.
//!
//! # Responsibility
//! - Resolve configuration (catalogue path, reference day, logging).
//! - Render core views as plain text or JSON.

mod render;

use birthday_core::{
    classify_upcoming, default_log_level, describe, group_by_month, init_logging, load_catalogue,
    parse_date_detailed, parse_reference_date, search_by_name, Catalogue,
    NO_SEARCH_RESULTS_MESSAGE,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "birthday_cli")]
#[command(about = "Birthday catalogue: month groups, upcoming birthdays and age details")]
struct Args {
    /// Tab-separated catalogue file
    #[arg(long, env = "BIRTHDAY_CATALOGUE_PATH", default_value = "avatarai.txt")]
    catalogue: PathBuf,

    /// Reference day instead of today (any supported date layout)
    #[arg(long)]
    today: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// All entities, alphabetical
    List,
    /// Entities grouped by birth month
    Months,
    /// Birthdays in the next days and later this month
    Upcoming,
    /// Case-insensitive name search
    Search { query: String },
    /// Age details for one entity
    Show { name: String },
    /// Parse one date string and show the result
    Parse { raw: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let reference = match resolve_reference(args.today.as_deref()) {
        Ok(reference) => reference,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if let Command::Parse { raw } = &args.command {
        return run_parse(raw, args.json);
    }

    let catalogue = match load_catalogue(&args.catalogue) {
        Ok(catalogue) => catalogue,
        Err(err) => {
            eprintln!("{err}; continuing with an empty catalogue");
            Catalogue::empty()
        }
    };

    run(&args.command, &catalogue, reference, args.json)
}

fn resolve_reference(raw: Option<&str>) -> Result<NaiveDate, String> {
    match raw {
        Some(raw) => parse_reference_date(raw).map_err(|err| err.to_string()),
        None => Ok(Local::now().date_naive()),
    }
}

fn run(command: &Command, catalogue: &Catalogue, reference: NaiveDate, json: bool) -> ExitCode {
    let output = match command {
        Command::List => {
            let entities = catalogue.sorted_by_name();
            if json {
                render::to_json(&entities)
            } else {
                render::entity_lines(&entities, true)
            }
        }
        Command::Months => {
            let groups = group_by_month(catalogue);
            if json {
                render::to_json(&render::month_groups_json(&groups))
            } else {
                render::month_groups(&groups)
            }
        }
        Command::Upcoming => {
            let upcoming = classify_upcoming(catalogue.entities(), reference);
            if json {
                render::to_json(&render::upcoming_json(&upcoming))
            } else {
                render::upcoming(&upcoming)
            }
        }
        Command::Search { query } => {
            let found = search_by_name(catalogue, query);
            if json {
                render::to_json(&found)
            } else if found.is_empty() {
                NO_SEARCH_RESULTS_MESSAGE.to_string()
            } else {
                render::entity_lines(&found, true)
            }
        }
        Command::Show { name } => {
            let Some(entity) = catalogue.find_by_name(name) else {
                eprintln!("{NO_SEARCH_RESULTS_MESSAGE}");
                return ExitCode::FAILURE;
            };
            let detail = describe(entity, reference);
            if json {
                render::to_json(&detail)
            } else {
                render::detail(&detail)
            }
        }
        Command::Parse { raw } => return run_parse(raw, json),
    };

    println!("{output}");
    ExitCode::SUCCESS
}

fn run_parse(raw: &str, json: bool) -> ExitCode {
    let parsed = parse_date_detailed(raw);
    if json {
        println!("{}", render::to_json(&parsed.as_ref().map(|p| &p.date)));
    } else {
        println!("{}", render::parsed_date(parsed.as_ref()));
    }
    if parsed.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
