//! Core logic for the hitlist app: a locally persisted list of names and
//! the headless list screen that displays it.

pub mod db;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonId};
pub use presentation::list_screen::{
    AddOutcome, ListScreen, ListView, RefreshOutcome, RowView, LIST_TITLE,
};
pub use presentation::prompt::{
    FixedPrompt, NamePrompt, PromptOutcome, PromptRequest, ADD_NAME_PROMPT,
};
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository, StoreError, StoreResult};
pub use service::person_service::PersonService;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
