//! Admin Routes
//!
//! Stub endpoints backing the shelter admin screens, plus the test reset hook.
//!
//! Routes:
//! - GET /api/match-requests - Pending adoption requests (display only)
//! - GET /api/chats/admin - Admin chat list (display only)
//! - POST /api/admin/login - Credential presence check, no real auth
//! - GET /api/reset-data - Restore the seed dataset

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{db, AppState, Error, Result};

/// Build admin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/match-requests", get(list_match_requests))
        .route("/chats/admin", get(list_admin_chats))
        .route("/admin/login", post(admin_login))
        .route("/reset-data", get(reset_data))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// GET /api/match-requests
#[axum::debug_handler]
async fn list_match_requests(State(state): State<AppState>) -> Json<Value> {
    let requests = db::list_match_requests(&state.db).await;
    Json(json!({
        "success": true,
        "requests": requests,
    }))
}

/// GET /api/chats/admin
#[axum::debug_handler]
async fn list_admin_chats(State(state): State<AppState>) -> Json<Value> {
    let chats = db::list_admin_chats(&state.db).await;
    Json(json!({
        "success": true,
        "chats": chats,
    }))
}

/// Admin login.
///
/// POST /api/admin/login
///
/// Any non-blank email/password pair is accepted.
#[axum::debug_handler]
async fn admin_login(
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = payload?;

    let email = request.email.map(|e| e.trim().to_string()).unwrap_or_default();
    let has_password = request.password.is_some_and(|p| !p.is_empty());
    if email.is_empty() || !has_password {
        return Err(Error::Validation("email and password are required".into()));
    }

    info!("Admin login for {}", email);
    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "admin": {
            "email": email,
            "name": "Administrador",
        },
    })))
}

/// Restore the seed dataset.
///
/// GET /api/reset-data
#[axum::debug_handler]
async fn reset_data(State(state): State<AppState>) -> Json<Value> {
    db::reset(&state.db).await;
    Json(json!({
        "success": true,
        "message": "Data reset to initial state",
    }))
}
