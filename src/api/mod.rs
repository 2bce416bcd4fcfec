//! HTTP API Module
//!
//! Exposes the animal registry over three routes:
//!
//! | Method | Path            | Action                                    |
//! |--------|-----------------|-------------------------------------------|
//! | GET    | `/animals`      | List all animals                          |
//! | POST   | `/animals`      | Create an animal from `{"name": ...}`     |
//! | DELETE | `/animals/{id}` | Delete by numeric id, return what is left |
//!
//! Successful responses are JSON. Errors are plain text: `400 Invalid ID` for a bad
//! path id and `500 <error>` when the collection could not be persisted.
//!
//! ## Submodules
//! - **`protocol`**: Endpoint paths, request payloads and their lenient decoding.
//! - **`handlers`**: Axum request handlers.

pub mod handlers;
pub mod protocol;

#[cfg(test)]
mod tests;

use crate::registry::store::AnimalStore;
use axum::{
    Extension, Router,
    routing::{delete, get},
};
use std::sync::Arc;

use handlers::{handle_create_animal, handle_delete_animal, handle_list_animals};
use protocol::{ENDPOINT_ANIMAL, ENDPOINT_ANIMALS};

/// Builds the service router around a shared store.
pub fn router(store: Arc<AnimalStore>) -> Router {
    Router::new()
        .route(
            ENDPOINT_ANIMALS,
            get(handle_list_animals).post(handle_create_animal),
        )
        .route(ENDPOINT_ANIMAL, delete(handle_delete_animal))
        .layer(Extension(store))
}
