//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Durably insert person rows and read the full list back.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Inserts are single-statement and atomic: a failed insert leaves no row.
//! - Lists are returned in insertion order (`seq ASC`).
//! - Read paths reject undecodable rows instead of masking them.

use crate::db::DbError;
use crate::model::person::{Person, PersonId};
use log::{debug, error};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store read or write.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for person records.
pub trait PersonRepository {
    /// Persists one person row.
    fn insert_person(&self, person: &Person) -> StoreResult<PersonId>;
    /// Returns every stored person in insertion order.
    fn list_people(&self) -> StoreResult<Vec<Person>>;
}

/// SQLite-backed person repository over a host-owned connection.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps an opened and migrated connection (see `crate::db::open_db`).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn insert_person(&self, person: &Person) -> StoreResult<PersonId> {
        let started_at = Instant::now();
        let result = self.conn.execute(
            "INSERT INTO people (uuid, name) VALUES (?1, ?2);",
            params![person.id.to_string(), person.name.as_str()],
        );

        match result {
            Ok(_) => {
                debug!(
                    "event=person_insert module=repo status=ok duration_ms={} name_chars={}",
                    started_at.elapsed().as_millis(),
                    person.name.chars().count()
                );
                Ok(person.id)
            }
            Err(err) => {
                error!(
                    "event=person_insert module=repo status=error duration_ms={} error_code=insert_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    fn list_people(&self) -> StoreResult<Vec<Person>> {
        let started_at = Instant::now();
        let result = query_people(self.conn);

        match &result {
            Ok(people) => debug!(
                "event=person_list module=repo status=ok duration_ms={} count={}",
                started_at.elapsed().as_millis(),
                people.len()
            ),
            Err(err) => error!(
                "event=person_list module=repo status=error duration_ms={} error_code=list_failed error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

fn query_people(conn: &Connection) -> StoreResult<Vec<Person>> {
    let mut stmt = conn.prepare("SELECT uuid, name FROM people ORDER BY seq ASC;")?;
    let mut rows = stmt.query([])?;
    let mut people = Vec::new();

    while let Some(row) = rows.next()? {
        people.push(parse_person_row(row)?);
    }

    Ok(people)
}

fn parse_person_row(row: &Row<'_>) -> StoreResult<Person> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in people.uuid"))
    })?;

    Ok(Person::with_id(id, row.get::<_, String>("name")?))
}
