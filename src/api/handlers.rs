use super::protocol::{CreateAnimalRequest, INVALID_ID_MESSAGE, parse_animal_id};
use crate::registry::store::AnimalStore;
use crate::registry::types::Animal;

use axum::{
    Extension, Json,
    body::Bytes,
    extract::Path,
    http::StatusCode,
};
use std::sync::Arc;

pub async fn handle_list_animals(
    Extension(store): Extension<Arc<AnimalStore>>,
) -> Json<Vec<Animal>> {
    Json(store.list().await)
}

pub async fn handle_create_animal(
    Extension(store): Extension<Arc<AnimalStore>>,
    body: Bytes,
) -> Result<Json<Animal>, (StatusCode, String)> {
    let req = CreateAnimalRequest::decode_lenient(&body);

    match store.create(req.name).await {
        Ok(animal) => Ok(Json(animal)),
        Err(e) => {
            tracing::error!("Failed to create animal: {:#}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)))
        }
    }
}

pub async fn handle_delete_animal(
    Extension(store): Extension<Arc<AnimalStore>>,
    Path(id_str): Path<String>,
) -> Result<Json<Vec<Animal>>, (StatusCode, String)> {
    let id = match parse_animal_id(&id_str) {
        Some(id) => id,
        None => {
            tracing::debug!("Rejecting delete with invalid id {:?}", id_str);
            return Err((StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE.to_string()));
        }
    };

    match store.delete(id).await {
        Ok(remaining) => Ok(Json(remaining)),
        Err(e) => {
            tracing::error!("Failed to persist after deleting animal {}: {:#}", id, e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)))
        }
    }
}
