//! Domain model for the birthday catalogue.
//!
//! # Responsibility
//! - Define the validated date value and the entity records built from it.
//! - Keep display formatting next to the value it renders.
//!
//! # Invariants
//! - Absent dates are `Option::None`, never a sentinel component value.

pub mod calendar_date;
pub mod entity;
