//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the list screen's store operations to Dart via FRB.
//! - Translate store failures into response envelopes the UI can show.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The Dart side owns the list cache; these calls are stateless apart
//!   from the resolved database path.

use hitlist_core::db::open_db;
use hitlist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Person, PersonService, SqlitePersonRepository, StoreResult, ADD_NAME_PROMPT, LIST_TITLE,
};
use log::error;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const DB_PATH_ENV: &str = "HITLIST_DB_PATH";
const DB_FILE_NAME: &str = "hitlist.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Title shown above the list.
#[flutter_rust_bridge::frb(sync)]
pub fn list_screen_title() -> String {
    LIST_TITLE.to_owned()
}

/// Texts of the add-name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPromptTexts {
    pub title: String,
    pub message: String,
    pub save_label: String,
    pub cancel_label: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn add_name_prompt() -> AddPromptTexts {
    AddPromptTexts {
        title: ADD_NAME_PROMPT.title.to_owned(),
        message: ADD_NAME_PROMPT.message.to_owned(),
        save_label: ADD_NAME_PROMPT.save_label.to_owned(),
        cancel_label: ADD_NAME_PROMPT.cancel_label.to_owned(),
    }
}

/// One list row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonItem {
    /// Stable person ID in string form.
    pub id: String,
    pub name: String,
}

/// Response envelope for `people_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleListResponse {
    pub ok: bool,
    /// All stored people in insertion order; empty on failure.
    pub items: Vec<PersonItem>,
    /// Human-readable message, shown to the user on failure.
    pub message: String,
}

/// Response envelope for `people_add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonAddResponse {
    pub ok: bool,
    /// Stored person on success; append it to the UI cache.
    pub person: Option<PersonItem>,
    pub message: String,
}

/// Reads every stored person; call when the list screen appears.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics. On failure `ok=false` and the caller keeps its cache.
#[flutter_rust_bridge::frb(sync)]
pub fn people_list() -> PeopleListResponse {
    people_list_in(&resolve_db_path())
}

fn people_list_in(db_path: &Path) -> PeopleListResponse {
    match with_person_service(db_path, |service| service.list_all()) {
        Ok(people) => PeopleListResponse {
            ok: true,
            message: format!("Loaded {} name(s).", people.len()),
            items: people.into_iter().map(to_person_item).collect(),
        },
        Err(err) => PeopleListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("Could not load names: {err}"),
        },
    }
}

/// Persists one name exactly as entered (empty allowed, no trimming).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics. On failure `ok=false` and `person=None`.
#[flutter_rust_bridge::frb(sync)]
pub fn people_add(name: String) -> PersonAddResponse {
    people_add_in(&resolve_db_path(), name)
}

fn people_add_in(db_path: &Path, name: String) -> PersonAddResponse {
    match with_person_service(db_path, |service| service.add(name)) {
        Ok(person) => PersonAddResponse {
            ok: true,
            person: Some(to_person_item(person)),
            message: "Name saved.".to_string(),
        },
        Err(err) => PersonAddResponse {
            ok: false,
            person: None,
            message: format!("Could not save name: {err}"),
        },
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_person_service<T>(
    db_path: &Path,
    f: impl FnOnce(&PersonService<SqlitePersonRepository<'_>>) -> StoreResult<T>,
) -> Result<T, String> {
    let conn = open_db(db_path).map_err(|err| {
        error!(
            "event=ffi_db_open module=ffi status=error path={} error={}",
            db_path.display(),
            err
        );
        format!("database unavailable: {err}")
    })?;
    let service = PersonService::new(SqlitePersonRepository::new(&conn));
    f(&service).map_err(|err| err.to_string())
}

fn to_person_item(person: Person) -> PersonItem {
    PersonItem {
        id: person.id.to_string(),
        name: person.name,
    }
}
