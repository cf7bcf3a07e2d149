//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the add/list data access contract for person records.
//! - Isolate SQLite query details from service and presentation code.
//!
//! # Invariants
//! - No update or delete operations are exposed.
//! - Repository APIs return `StoreError` for both read and write failures.

pub mod person_repo;
