//! Pure computations over parsed catalogue data.
//!
//! # Responsibility
//! - Derive age/anniversary facts for a single entity.
//! - Classify and project the whole catalogue for display.
//!
//! # Invariants
//! - Every function takes the reference day as an argument; none reads a clock.

pub mod age;
pub mod catalogue_view;
pub mod upcoming;
