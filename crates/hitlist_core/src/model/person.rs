//! Person record.
//!
//! # Invariants
//! - `id` is generated once by the store and never reused.
//! - `name` is kept verbatim: empty and non-ASCII text are valid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque stable identifier assigned by the store.
pub type PersonId = Uuid;

/// One persisted name entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    /// Creates a new person with a freshly generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a person with a known ID, e.g. when decoding a stored row.
    pub fn with_id(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Person;

    #[test]
    fn new_assigns_distinct_ids() {
        let first = Person::new("Ned");
        let second = Person::new("Ned");
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn new_keeps_name_verbatim() {
        assert_eq!(Person::new("").name, "");
        assert_eq!(Person::new("  Sansa ").name, "  Sansa ");
    }
}
