//! Like/dislike flow and match queries.

use crate::models::{self, Match, MatchStatus};
use crate::Result;

use super::animals::animal_not_found;
use super::users::user_not_found;
use super::DbPool;

/// Result of a like: the match record and whether this call created it.
#[derive(Debug, Clone)]
pub struct LikeOutcome {
    pub record: Match,
    pub created: bool,
}

/// Record that `user_id` likes `pet_id`.
///
/// Liking the same animal twice returns the first match and changes nothing.
pub async fn like_animal(pool: &DbPool, pet_id: u64, user_id: &str) -> Result<LikeOutcome> {
    let mut data = pool.write().await;
    if data.animal_mut(pet_id).is_none() {
        return Err(animal_not_found(pet_id));
    }
    if data.user_mut(user_id).is_none() {
        return Err(user_not_found(user_id));
    }

    if let Some(existing) = data
        .matches
        .iter()
        .find(|m| m.pet_id == pet_id && m.user_id == user_id)
    {
        return Ok(LikeOutcome {
            record: existing.clone(),
            created: false,
        });
    }

    let record = Match {
        id: data.next_match_id(),
        pet_id,
        user_id: user_id.to_string(),
        matched_at: models::now(),
        status: MatchStatus::Pending,
    };
    data.matches.push(record.clone());

    if let Some(user) = data.user_mut(user_id) {
        if !user.has_matched(pet_id) {
            user.matched_animals.push(pet_id);
        }
        user.stats.matches += 1;
    }
    if let Some(animal) = data.animal_mut(pet_id) {
        animal.matches += 1;
    }

    Ok(LikeOutcome {
        record,
        created: true,
    })
}

/// Undo a like. Returns whether a match existed.
pub async fn dislike_animal(pool: &DbPool, pet_id: u64, user_id: &str) -> Result<bool> {
    let mut data = pool.write().await;
    if data.animal_mut(pet_id).is_none() {
        return Err(animal_not_found(pet_id));
    }

    let was_matched = {
        let user = data.user_mut(user_id).ok_or_else(|| user_not_found(user_id))?;
        let before = user.matched_animals.len();
        user.matched_animals.retain(|id| *id != pet_id);
        user.matched_animals.len() < before
    };

    let before = data.matches.len();
    data.matches
        .retain(|m| !(m.pet_id == pet_id && m.user_id == user_id));
    let removed = was_matched || data.matches.len() < before;

    if removed {
        if let Some(user) = data.user_mut(user_id) {
            user.stats.matches = user.stats.matches.saturating_sub(1);
        }
        if let Some(animal) = data.animal_mut(pet_id) {
            animal.matches = animal.matches.saturating_sub(1);
        }
    }

    Ok(removed)
}

/// All matches, or only those of one user.
pub async fn list_matches(pool: &DbPool, user_id: Option<&str>) -> Vec<Match> {
    let data = pool.read().await;
    data.matches
        .iter()
        .filter(|m| user_id.map_or(true, |id| m.user_id == id))
        .cloned()
        .collect()
}
