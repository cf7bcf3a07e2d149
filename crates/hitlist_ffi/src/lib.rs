//! Flutter-facing bindings for the hitlist core.

pub mod api;
