//! Record Store Module
//!
//! Owns the in-memory collection of animals and the ID counter that numbers them.
//!
//! ## Core Concepts
//! - **Collection**: An ordered list of `Animal` records. Insertion order is kept;
//!   removals shift later records left.
//! - **ID Counter**: Starts at 1 and only ever grows. IDs are never reused, not even
//!   after the record holding them is deleted.
//! - **Serialized Access**: `AnimalStore` keeps the collection behind a single async
//!   mutex and persists every mutation while still holding it, so concurrent requests
//!   can neither interleave mutations nor interleave file writes.
//!
//! ## Submodules
//! - **`types`**: The `Animal` record.
//! - **`records`**: `AnimalRegistry`, the plain (synchronous) collection + counter.
//! - **`store`**: `AnimalStore`, the shared, persisted handle used by the HTTP layer.

pub mod records;
pub mod store;
pub mod types;
