//! Lifecycle Controller
//!
//! Drives the service through `Starting -> Running -> Draining -> Stopped`.
//!
//! ## Phases
//! - **Starting**: Creates the storage directory (fatal if that fails) and restores the
//!   collection from disk. A missing or malformed file is logged and the service starts
//!   with an empty collection.
//! - **Running**: Serves HTTP until a shutdown signal (SIGINT / SIGTERM) arrives.
//! - **Draining**: Stops accepting connections, waits for in-flight requests, then saves
//!   the collection once. A failed save is logged and not retried.
//! - **Stopped**: Terminal. The process exits cleanly whatever the drain save did.

pub mod controller;
