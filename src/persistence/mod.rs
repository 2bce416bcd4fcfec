//! Persistence Adapter
//!
//! Stores the animal collection as a single JSON array in `<storage>/animals.json`.
//!
//! ## Write Path
//! Saves never write the target file in place. The collection is serialized into a
//! uniquely named temporary file next to the target, flushed to disk, and then renamed
//! over `animals.json`. A crash mid-write leaves the previous file intact.
//!
//! ## Read Path
//! Loads read and deserialize the whole file. A missing or malformed file is an error;
//! there is no partial recovery. Deciding what to do about it is up to the caller
//! (see `lifecycle`).

pub mod file;
