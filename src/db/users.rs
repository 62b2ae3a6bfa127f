//! User queries.

use crate::models::User;
use crate::{Error, Result};

use super::DbPool;

pub(crate) fn user_not_found(id: &str) -> Error {
    Error::NotFound(format!("User {} not found", id))
}

pub async fn list_users(pool: &DbPool) -> Vec<User> {
    pool.read().await.users.clone()
}

pub async fn get_user(pool: &DbPool, id: &str) -> Result<User> {
    pool.read()
        .await
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .ok_or_else(|| user_not_found(id))
}
