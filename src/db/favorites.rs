//! Favorite (bookmark) queries.

use crate::models::{self, Favorite};
use crate::{Error, Result};

use super::animals::animal_not_found;
use super::users::user_not_found;
use super::DbPool;

pub async fn list_favorites(pool: &DbPool, user_id: &str) -> Vec<Favorite> {
    pool.read()
        .await
        .favorites
        .iter()
        .filter(|f| f.user_id == user_id)
        .cloned()
        .collect()
}

/// Bookmark an animal. Adding the same pair again returns the existing favorite.
pub async fn add_favorite(pool: &DbPool, pet_id: u64, user_id: &str) -> Result<Favorite> {
    let mut data = pool.write().await;
    if data.animal_mut(pet_id).is_none() {
        return Err(animal_not_found(pet_id));
    }
    if data.user_mut(user_id).is_none() {
        return Err(user_not_found(user_id));
    }

    if let Some(existing) = data
        .favorites
        .iter()
        .find(|f| f.pet_id == pet_id && f.user_id == user_id)
    {
        return Ok(existing.clone());
    }

    let favorite = Favorite {
        id: data.next_favorite_id(),
        pet_id,
        user_id: user_id.to_string(),
        added_at: models::now(),
    };
    data.favorites.push(favorite.clone());
    if let Some(user) = data.user_mut(user_id) {
        user.stats.favorites += 1;
    }

    Ok(favorite)
}

pub async fn remove_favorite(pool: &DbPool, id: u64) -> Result<Favorite> {
    let mut data = pool.write().await;
    let index = data
        .favorites
        .iter()
        .position(|f| f.id == id)
        .ok_or_else(|| Error::NotFound(format!("Favorite {} not found", id)))?;

    let removed = data.favorites.remove(index);
    if let Some(user) = data.user_mut(&removed.user_id) {
        user.stats.favorites = user.stats.favorites.saturating_sub(1);
    }

    Ok(removed)
}
