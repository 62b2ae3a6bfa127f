//! Common test utilities and helpers.

#![allow(dead_code)]

use axum_test::TestServer;
use pet_adoption_api::config::Config;
use pet_adoption_api::db::DbPool;
use pet_adoption_api::{api, AppState};
use serde_json::Value;
use tempfile::TempDir;

pub const PUBLIC_URL: &str = "http://test.local:3000";

/// A running test server with its own store and upload directory.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    // Dropped with the app, removing uploaded files
    pub public_dir: TempDir,
}

/// Build a test app over a freshly seeded store.
pub async fn build_test_app() -> TestApp {
    build_test_app_with_pool(DbPool::seeded(PUBLIC_URL)).await
}

pub async fn build_test_app_with_pool(pool: DbPool) -> TestApp {
    build_test_app_with(pool, |_| {}).await
}

/// Build a test app, adjusting the configuration before the router is created.
pub async fn build_test_app_with(pool: DbPool, configure: impl FnOnce(&mut Config)) -> TestApp {
    let public_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = Config::with_public_dir(PUBLIC_URL, public_dir.path());
    configure(&mut config);

    let state = AppState::with_pool(config, pool)
        .await
        .expect("Failed to build app state");
    let server = TestServer::new(api::app(state.clone())).expect("Failed to create test server");

    TestApp {
        server,
        state,
        public_dir,
    }
}

/// Number of animals the API currently lists.
pub async fn animal_count(server: &TestServer) -> usize {
    let body: Value = server.get("/api/animals").await.json();
    body["animals"].as_array().map(|a| a.len()).unwrap_or(0)
}

/// Minimal valid PNG header; enough for content-type sniffing and storage.
pub fn png_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0]
}
