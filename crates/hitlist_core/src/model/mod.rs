//! Domain model for the persisted name list.
//!
//! # Invariants
//! - Every record is identified by a stable `PersonId` assigned on creation.
//! - Records are never edited or deleted by this crate.

pub mod person;
