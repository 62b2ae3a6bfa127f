//! Admin screen stubs. Read-only.

use crate::models::{AdminChat, MatchRequest};

use super::DbPool;

pub async fn list_match_requests(pool: &DbPool) -> Vec<MatchRequest> {
    pool.read().await.match_requests.clone()
}

pub async fn list_admin_chats(pool: &DbPool) -> Vec<AdminChat> {
    pool.read().await.admin_chats.clone()
}
