use crate::registry::types::Animal;

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Name of the persisted collection inside the storage directory.
pub const ANIMALS_FILE: &str = "animals.json";

/// Handle to `<storage>/animals.json`.
#[derive(Debug, Clone)]
pub struct AnimalFile {
    dir: PathBuf,
    path: PathBuf,
}

impl AnimalFile {
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        let dir = storage_dir.as_ref().to_path_buf();
        let path = dir.join(ANIMALS_FILE);
        Self { dir, path }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the file contents with `animals`, serialized as a compact JSON array.
    pub async fn save(&self, animals: &[Animal]) -> Result<()> {
        let data = serde_json::to_vec(animals).context("failed to serialize animals")?;
        let tmp_path = self.temp_path();

        if let Err(e) = write_synced(&tmp_path, &data).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e);
        }

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e).with_context(|| {
                format!(
                    "failed to replace {} with {}",
                    self.path.display(),
                    tmp_path.display()
                )
            });
        }

        tracing::debug!("Saved {} animals to {}", animals.len(), self.path.display());
        Ok(())
    }

    /// Reads and deserializes the whole file.
    pub async fn load(&self) -> Result<Vec<Animal>> {
        let data = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        let animals: Vec<Animal> = serde_json::from_slice(&data)
            .with_context(|| format!("malformed animals file {}", self.path.display()))?;

        Ok(animals)
    }

    fn temp_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}.tmp", ANIMALS_FILE, uuid::Uuid::new_v4()))
    }
}

/// True if `err` was caused by the animals file not existing.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == ErrorKind::NotFound)
    })
}

async fn write_synced(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(data)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.sync_all()
        .await
        .with_context(|| format!("failed to sync {}", path.display()))?;
    Ok(())
}
