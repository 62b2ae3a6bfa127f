//! Animals Routes
//!
//! CRUD operations for adoption listings.
//!
//! Routes:
//! - GET /api/animals - List all animals
//! - POST /api/animals - Create a listing (multipart, optional `photos`)
//! - GET /api/animals/:id - Get one animal
//! - PUT /api/animals/:id - Update a listing and its photos
//! - DELETE /api/animals/:id - Remove a listing

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use super::parse_animal_id;
use crate::db::{self, PhotoChange};
use crate::services::AnimalForm;
use crate::{AppState, Result};

/// Build animal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/animals", get(list_animals).post(create_animal))
        .route(
            "/animals/:id",
            get(get_animal).put(update_animal).delete(delete_animal),
        )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/animals
#[axum::debug_handler]
async fn list_animals(State(state): State<AppState>) -> Json<Value> {
    let animals = db::list_animals(&state.db).await;
    info!("Sending {} animals", animals.len());

    Json(json!({
        "success": true,
        "animals": animals,
    }))
}

/// GET /api/animals/:id
#[axum::debug_handler]
async fn get_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let animal = db::get_animal(&state.db, parse_animal_id(&id)?).await?;

    Ok(Json(json!({
        "success": true,
        "animal": animal,
    })))
}

/// Create a listing.
///
/// POST /api/animals
///
/// Photos that fail validation or cannot be written are left out; the
/// listing is still created.
#[axum::debug_handler]
async fn create_animal(
    State(state): State<AppState>,
    mut form: AnimalForm,
) -> Result<(StatusCode, Json<Value>)> {
    let input = form.new_animal()?;
    let photos = state.photos.store_all(&form.take_photos()).await;

    let pet = db::create_animal(&state.db, input, photos).await;
    info!("Created animal {} ({}) with {} photos", pet.id, pet.name, pet.photos.len());

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Pet created",
            "pet": pet,
        })),
    ))
}

/// Update a listing.
///
/// PUT /api/animals/:id
///
/// `existingPhotos` (a JSON array of URLs) replaces the current photo list;
/// uploaded `photos` are appended after it.
#[axum::debug_handler]
async fn update_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut form: AnimalForm,
) -> Result<Json<Value>> {
    let id = parse_animal_id(&id)?;

    // Fail before touching the disk when the listing is gone
    db::get_animal(&state.db, id).await?;

    let patch = form.patch()?;
    let replace_with = form.existing_photos();
    let appended = state.photos.store_all(&form.take_photos()).await;

    let pet = db::update_animal(
        &state.db,
        id,
        patch,
        PhotoChange {
            replace_with,
            appended,
        },
    )
    .await?;
    info!("Updated animal {}", pet.id);

    Ok(Json(json!({
        "success": true,
        "message": "Pet updated",
        "pet": pet,
    })))
}

/// DELETE /api/animals/:id
#[axum::debug_handler]
async fn delete_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_animal_id(&id)?;
    db::delete_animal(&state.db, id).await?;
    info!("Deleted animal {}", id);

    Ok(Json(json!({
        "success": true,
        "message": "Pet removed",
    })))
}
