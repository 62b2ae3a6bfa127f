//! Storage layer for the adoption API.
//!
//! Records live in process memory behind a single [`DbPool`] handle and are
//! lost on restart. Query modules mirror the API domains and take the pool
//! by reference, so tests can build isolated stores.

mod admin;
mod animals;
mod favorites;
mod matches;
mod pool;
mod seed;
mod users;

// Re-export all query modules
pub use admin::*;
pub use animals::*;
pub use favorites::*;
pub use matches::*;
pub use pool::*;
pub use seed::seed_dataset;
pub use users::*;

use tracing::info;

/// Initialize the store with the seed dataset.
pub fn init_pool(public_url: &str) -> DbPool {
    let pool = DbPool::seeded(public_url);
    info!("In-memory store seeded (photos served from {})", public_url);
    pool
}

/// Restore the seed dataset, discarding every change made since start-up.
pub async fn reset(pool: &DbPool) {
    let fresh = seed_dataset(pool.public_url());
    *pool.write().await = fresh;
    info!("Store reset to seed data");
}
