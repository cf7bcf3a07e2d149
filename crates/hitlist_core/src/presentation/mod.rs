//! Headless list screen driven by host UI events.
//!
//! # Responsibility
//! - Own the UI-side cache of people and project it into table rows.
//! - Run the add flow through a host-supplied prompt.
//!
//! # Invariants
//! - Store failures never escape as panics; they are logged and surfaced
//!   to the host view.
//! - The cache only changes after a successful store call.

pub mod list_screen;
pub mod prompt;
