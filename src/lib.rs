//! Animal Registry Library
//!
//! A small HTTP service that keeps a list of named animals in memory and mirrors it to
//! a JSON file. The binary (`main.rs`) wires these modules together.
//!
//! ## Modules
//! - **`registry`**: The in-memory collection and its never-reused ID counter, guarded by
//!   a single async mutex.
//! - **`persistence`**: Reads and atomically rewrites `<storage>/animals.json`.
//! - **`api`**: Axum router and handlers for `GET/POST /animals` and `DELETE /animals/{id}`.
//! - **`lifecycle`**: Startup restore, serving, and the signal-triggered final save.
//! - **`config`**: Command line flags.

pub mod api;
pub mod config;
pub mod lifecycle;
pub mod persistence;
pub mod registry;
