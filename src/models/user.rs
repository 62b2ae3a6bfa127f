//! Adopter profiles.

use serde::{Deserialize, Serialize};

/// Activity summary shown on the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub matches: u32,
    pub pets_viewed: u32,
    pub favorites: u32,
    pub adopted: u32,
}

/// A user of the adoption app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub stats: UserStats,
    /// Ids of the animals this user liked.
    pub matched_animals: Vec<u64>,
}

impl User {
    pub fn has_matched(&self, pet_id: u64) -> bool {
        self.matched_animals.contains(&pet_id)
    }
}
