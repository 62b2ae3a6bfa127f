//! User profile endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{db, AppState, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

/// GET /api/users
async fn list_users(State(state): State<AppState>) -> Json<Value> {
    let users = db::list_users(&state.db).await;
    Json(json!({
        "success": true,
        "users": users,
    }))
}

/// GET /api/users/:id
async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let user = db::get_user(&state.db, &id).await?;
    Ok(Json(json!({
        "success": true,
        "user": user,
    })))
}
