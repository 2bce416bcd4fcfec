use serde::{Deserialize, Serialize};

/// Numeric identifier assigned to an animal on creation.
pub type AnimalId = i64;

/// The first ID handed out by an empty registry.
pub const FIRST_ANIMAL_ID: AnimalId = 1;

/// A single named entity held by the registry.
///
/// This is both the in-memory record and its wire/disk representation:
/// `{"id": 1, "name": "Cat"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    /// Unique, monotonically assigned identifier.
    pub id: AnimalId,
    /// Free-form name. Not validated; may be empty.
    pub name: String,
}
