//! Person store use-case service.
//!
//! # Responsibility
//! - Provide the `add` / `list_all` entry points of the record store.
//! - Assign record identity before delegating persistence.
//!
//! # Invariants
//! - Names are stored verbatim; no validation happens here.
//! - A failed `add` returns `StoreError` and leaves storage unchanged.

use crate::model::person::Person;
use crate::repo::person_repo::{PersonRepository, StoreResult};

/// Durable store for person records.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists one person, returning the stored record.
    pub fn add(&self, name: impl Into<String>) -> StoreResult<Person> {
        let person = Person::new(name);
        self.repo.insert_person(&person)?;
        Ok(person)
    }

    /// Lists every stored person in insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<Person>> {
        self.repo.list_people()
    }
}
