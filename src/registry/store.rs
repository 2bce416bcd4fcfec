use super::records::AnimalRegistry;
use super::types::{Animal, AnimalId};
use crate::persistence::file::AnimalFile;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared, persisted handle to the animal registry.
///
/// Every mutating call updates the registry and then saves the whole collection while
/// the lock is still held. A failed save is reported to the caller but the in-memory
/// mutation is kept, so memory and disk may diverge until the next successful save.
pub struct AnimalStore {
    registry: Mutex<AnimalRegistry>,
    file: AnimalFile,
}

impl AnimalStore {
    pub fn new(registry: AnimalRegistry, file: AnimalFile) -> Arc<Self> {
        Arc::new(Self {
            registry: Mutex::new(registry),
            file,
        })
    }

    pub async fn list(&self) -> Vec<Animal> {
        self.registry.lock().await.list().to_vec()
    }

    /// Creates a new animal and persists the collection.
    pub async fn create(&self, name: String) -> Result<Animal> {
        let mut registry = self.registry.lock().await;
        let animal = registry.create(name)?;
        tracing::debug!("Created animal {} ({:?})", animal.id, animal.name);

        self.file.save(registry.list()).await?;
        Ok(animal)
    }

    /// Deletes the animal with `id` (no-op if absent), persists, and returns the
    /// resulting collection.
    pub async fn delete(&self, id: AnimalId) -> Result<Vec<Animal>> {
        let mut registry = self.registry.lock().await;
        let before = registry.len();
        let remaining = registry.delete(id).to_vec();

        if remaining.len() < before {
            tracing::debug!("Deleted animal {}", id);
        } else {
            tracing::debug!("Delete of unknown animal {} ignored", id);
        }

        self.file.save(&remaining).await?;
        Ok(remaining)
    }

    /// Persists the current collection without mutating it.
    pub async fn save(&self) -> Result<usize> {
        let registry = self.registry.lock().await;
        self.file.save(registry.list()).await?;
        Ok(registry.len())
    }
}
