//! Flutter-facing bindings for the birthday catalogue core.

pub mod api;
