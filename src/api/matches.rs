//! Matches Routes
//!
//! Like/dislike actions and match listings.
//!
//! Routes:
//! - POST /api/animals/:id/like - Record a match for a user
//! - POST /api/animals/:id/dislike - Remove a user's match
//! - GET /api/matches - List matches (optional `?userId=`)
//! - GET /api/matches/:user_id - List matches of one user

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{parse_animal_id, require_user_id};
use crate::{db, AppState, Result};

/// Build match routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/animals/:id/like", post(like_animal))
        .route("/animals/:id/dislike", post(dislike_animal))
        .route("/matches", get(list_matches))
        .route("/matches/:user_id", get(list_user_matches))
}

// ============================================================================
// Request Types
// ============================================================================

/// Body of like/dislike requests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActionRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchesQuery {
    pub user_id: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/animals/:id/like
#[axum::debug_handler]
async fn like_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UserActionRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let pet_id = parse_animal_id(&id)?;
    let Json(request) = payload?;
    let user_id = require_user_id(request.user_id)?;

    let outcome = db::like_animal(&state.db, pet_id, &user_id).await?;
    if outcome.created {
        info!("User {} matched with animal {}", user_id, pet_id);
    } else {
        info!("User {} already matched with animal {}", user_id, pet_id);
    }

    Ok(Json(json!({
        "success": true,
        "message": if outcome.created { "Match created" } else { "Already matched" },
        "match": outcome.record,
    })))
}

/// POST /api/animals/:id/dislike
#[axum::debug_handler]
async fn dislike_animal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UserActionRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let pet_id = parse_animal_id(&id)?;
    let Json(request) = payload?;
    let user_id = require_user_id(request.user_id)?;

    let removed = db::dislike_animal(&state.db, pet_id, &user_id).await?;
    info!(
        "User {} disliked animal {} (match removed: {})",
        user_id, pet_id, removed
    );

    Ok(Json(json!({
        "success": true,
        "message": if removed { "Match removed" } else { "No match to remove" },
    })))
}

/// GET /api/matches
#[axum::debug_handler]
async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchesQuery>,
) -> Json<Value> {
    let user_id = query.user_id.filter(|id| !id.is_empty());
    let matches = db::list_matches(&state.db, user_id.as_deref()).await;

    Json(json!({
        "success": true,
        "matches": matches,
    }))
}

/// GET /api/matches/:user_id
#[axum::debug_handler]
async fn list_user_matches(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let matches = db::list_matches(&state.db, Some(&user_id)).await;

    Json(json!({
        "success": true,
        "matches": matches,
    }))
}
