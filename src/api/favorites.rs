//! Favorites Routes
//!
//! Routes:
//! - GET /api/favorites?userId= - List a user's favorites
//! - POST /api/favorites - Bookmark an animal
//! - DELETE /api/favorites/:id - Remove a bookmark

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::require_user_id;
use crate::{db, AppState, Error, Result};

/// Build favorite routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/:id", delete(remove_favorite))
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub user_id: Option<String>,
    pub pet_id: Option<u64>,
}

/// GET /api/favorites?userId=
#[axum::debug_handler]
async fn list_favorites(
    State(state): State<AppState>,
    Query(query): Query<FavoritesQuery>,
) -> Result<Json<Value>> {
    let user_id = require_user_id(query.user_id)?;
    let favorites = db::list_favorites(&state.db, &user_id).await;

    Ok(Json(json!({
        "success": true,
        "favorites": favorites,
    })))
}

/// POST /api/favorites
#[axum::debug_handler]
async fn add_favorite(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let Json(request) = payload?;
    let user_id = require_user_id(request.user_id)?;
    let pet_id = request
        .pet_id
        .ok_or_else(|| Error::Validation("petId is required".into()))?;

    let favorite = db::add_favorite(&state.db, pet_id, &user_id).await?;
    info!("User {} favorited animal {}", user_id, pet_id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "favorite": favorite,
        })),
    ))
}

/// DELETE /api/favorites/:id
#[axum::debug_handler]
async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = id
        .parse::<u64>()
        .map_err(|_| Error::NotFound(format!("Favorite {} not found", id)))?;
    db::remove_favorite(&state.db, id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Favorite removed",
    })))
}
