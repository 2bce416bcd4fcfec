//! Command line configuration.

use crate::persistence::file::AnimalFile;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "/animals-storage";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Parser)]
#[command(name = "animal-registry", about = "HTTP registry of named animals")]
pub struct ServiceConfig {
    /// Path to the animals storage directory.
    #[arg(long, default_value = DEFAULT_STORAGE_PATH)]
    pub animals_storage: PathBuf,
    /// Address the HTTP server listens on.
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,
    /// Log at DEBUG instead of INFO.
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl ServiceConfig {
    pub fn animals_file(&self) -> AnimalFile {
        AnimalFile::new(&self.animals_storage)
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
