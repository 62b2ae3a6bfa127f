//! API Routes for the adoption service
//!
//! This module combines all API routes into a single router.
//! Routes are organized by domain and share one set of middleware.

mod admin;
mod animals;
mod favorites;
mod matches;
pub mod status;
mod users;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::MAX_PHOTOS_PER_REQUEST;
use crate::{AppState, Error, Result};

/// Headroom for the text fields and multipart framing around the photos.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Build the complete API router.
///
/// Route structure:
/// - /, /health - Service info and health checks
/// - /api/animals/* - Listings CRUD, like/dislike
/// - /api/matches/*, /api/favorites/* - Match and bookmark tracking
/// - /api/users/* - User profiles
/// - /api/match-requests, /api/chats/admin, /api/admin/login - Admin stubs
/// - /api/reset-data - Restore seed data
/// - /public/* - Static files, including uploaded photos
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .nest("/api", api_routes())
        .nest_service("/public", ServeDir::new(&state.config.storage.public_dir))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(animals::routes())
        .merge(matches::routes())
        .merge(favorites::routes())
        .merge(users::routes())
        .merge(admin::routes())
}

/// The full application: routes, middleware and state.
pub fn app(state: AppState) -> Router {
    let limit = body_limit(state.config.storage.max_upload_size);

    Router::new()
        .merge(routes(state.clone()))
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Largest accepted request body: a full set of photos plus the form fields.
pub(crate) fn body_limit(max_upload_size: usize) -> usize {
    max_upload_size
        .saturating_mul(MAX_PHOTOS_PER_REQUEST)
        .saturating_add(FORM_OVERHEAD_BYTES)
}

/// Animal ids are numeric; anything else cannot name an existing animal.
pub(crate) fn parse_animal_id(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| Error::NotFound(format!("Animal {} not found", raw)))
}

pub(crate) fn require_user_id(user_id: Option<String>) -> Result<String> {
    user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::Validation("userId is required".into()))
}
