use crate::api;
use crate::config::ServiceConfig;
use crate::persistence::file::{AnimalFile, is_not_found};
use crate::registry::records::AnimalRegistry;
use crate::registry::store::AnimalStore;

use anyhow::{Context, Result};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Running,
    Draining,
    Stopped,
}

pub struct LifecycleController {
    config: ServiceConfig,
    phase: Phase,
}

impl LifecycleController {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            phase: Phase::Starting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn transition(&mut self, next: Phase) {
        tracing::info!("Lifecycle: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// Starting phase: prepares the storage directory and restores the store.
    pub async fn start(&mut self) -> Result<Arc<AnimalStore>> {
        let file = self.config.animals_file();
        tracing::info!("Using animals storage at {}", file.dir().display());

        prepare_storage(file.dir()).await?;
        Ok(open_store(file).await)
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind(self.config.bind)
            .await
            .with_context(|| format!("failed to bind {}", self.config.bind))
    }

    /// Runs the Running, Draining and Stopped phases.
    ///
    /// Serves until `shutdown` resolves, then performs the final save. Returns the phase
    /// the controller ended in, which is always `Stopped` unless serving itself failed.
    pub async fn run<F>(
        mut self,
        listener: TcpListener,
        store: Arc<AnimalStore>,
        shutdown: F,
    ) -> Result<Phase>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.transition(Phase::Running);
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("HTTP server listening on {}", addr);
        }
        tracing::info!("Press Ctrl+C to shutdown");

        axum::serve(listener, api::router(store.clone()))
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;

        self.transition(Phase::Draining);
        tracing::info!("Saving animals to file before exit...");
        match store.save().await {
            Ok(count) => tracing::info!("Saved {} animals", count),
            Err(e) => tracing::error!("Error saving animals: {:#}", e),
        }

        self.transition(Phase::Stopped);
        Ok(self.phase)
    }
}

/// Creates the storage directory (and parents) if it does not exist yet.
pub async fn prepare_storage(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create directory {}", dir.display()))
}

/// Restores the store from `file`, falling back to an empty collection.
pub async fn open_store(file: AnimalFile) -> Arc<AnimalStore> {
    let registry = match file.load().await {
        Ok(animals) => {
            let registry = AnimalRegistry::restore(animals);
            tracing::info!(
                "Loaded {} animals from {} (next id {:?})",
                registry.len(),
                file.path().display(),
                registry.next_id()
            );
            registry
        }
        Err(e) if is_not_found(&e) => {
            tracing::info!("No animals file at {}, starting empty", file.path().display());
            AnimalRegistry::new()
        }
        Err(e) => {
            tracing::warn!("Error loading animals from file: {:#}", e);
            AnimalRegistry::new()
        }
    };

    AnimalStore::new(registry, file)
}

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
