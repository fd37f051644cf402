//! Text-to-date parsing.
//!
//! # Responsibility
//! - Resolve month names in the two supported languages.
//! - Parse catalogue date strings and caller-supplied reference dates.
//!
//! # Invariants
//! - Parsing is pure; no clock reads and no shared state.

pub mod date_parser;
pub mod month_name;
pub mod reference;
