//! Application state for the adoption API.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::db::{self, DbPool};
use crate::services::PhotoStorage;
use crate::Result;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// In-memory record store.
    pub db: DbPool,
    /// Upload storage for listing photos.
    pub photos: PhotoStorage,
}

impl AppState {
    /// Create the application state with a freshly seeded store.
    pub async fn new(config: Config) -> Result<Self> {
        let db = db::init_pool(&config.server.public_url);
        Self::with_pool(config, db).await
    }

    /// Create the application state around an existing store.
    pub async fn with_pool(config: Config, db: DbPool) -> Result<Self> {
        let photos = PhotoStorage::new(&config);
        photos.ensure_dir().await?;
        tracing::debug!("Uploads directory: {}", photos.uploads_dir().display());

        Ok(Self {
            config: Arc::new(config),
            db,
            photos,
        })
    }
}
