//! In-memory animal collection and ID counter.

use super::types::{Animal, AnimalId, FIRST_ANIMAL_ID};

use anyhow::{Result, anyhow};
use std::collections::HashSet;

/// The collection of animals plus the counter that numbers new ones.
///
/// Invariants:
/// - every `id` in `animals` is unique;
/// - `next_id` is greater than any `id` created or restored by this registry, or `None`
///   once the id space is used up.
#[derive(Debug)]
pub struct AnimalRegistry {
    animals: Vec<Animal>,
    next_id: Option<AnimalId>,
}

impl AnimalRegistry {
    /// Creates an empty registry whose first animal will get `FIRST_ANIMAL_ID`.
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            next_id: Some(FIRST_ANIMAL_ID),
        }
    }

    /// Rebuilds a registry from previously persisted records.
    ///
    /// The counter resumes at `max(id) + 1` (never below `FIRST_ANIMAL_ID`). If the records
    /// contain the same `id` more than once only the first occurrence is kept.
    pub fn restore(records: Vec<Animal>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut animals = Vec::with_capacity(records.len());

        for animal in records {
            if seen.insert(animal.id) {
                animals.push(animal);
            } else {
                tracing::warn!("Dropping duplicate animal id {} from restored data", animal.id);
            }
        }

        let next_id = match animals.iter().map(|animal| animal.id).max() {
            Some(max_id) => max_id.checked_add(1).map(|id| id.max(FIRST_ANIMAL_ID)),
            None => Some(FIRST_ANIMAL_ID),
        };

        Self { animals, next_id }
    }

    /// Current collection, in insertion order.
    pub fn list(&self) -> &[Animal] {
        &self.animals
    }

    /// Assigns the next ID to `name` and appends the new animal.
    ///
    /// Fails without touching the collection once every id has been handed out.
    pub fn create(&mut self, name: String) -> Result<Animal> {
        let id = self
            .next_id
            .ok_or_else(|| anyhow!("animal id space exhausted"))?;

        let animal = Animal { id, name };
        self.next_id = id.checked_add(1);
        self.animals.push(animal.clone());
        Ok(animal)
    }

    /// Removes the first animal with the given `id`, if any.
    ///
    /// A missing `id` is not an error. The resulting collection is returned either way.
    pub fn delete(&mut self, id: AnimalId) -> &[Animal] {
        if let Some(index) = self.animals.iter().position(|animal| animal.id == id) {
            self.animals.remove(index);
        }
        &self.animals
    }

    /// The ID the next `create` will assign, `None` if ids are exhausted.
    pub fn next_id(&self) -> Option<AnimalId> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

impl Default for AnimalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
