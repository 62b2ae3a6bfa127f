//! Shared handle over the in-memory dataset.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{AdminChat, Animal, Favorite, Match, MatchRequest, User};

use super::seed_dataset;

/// Every collection the service keeps, plus the id sequences.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub animals: Vec<Animal>,
    pub users: Vec<User>,
    pub matches: Vec<Match>,
    pub favorites: Vec<Favorite>,
    pub match_requests: Vec<MatchRequest>,
    pub admin_chats: Vec<AdminChat>,
    pub(crate) last_animal_id: u64,
    pub(crate) last_match_id: u64,
    pub(crate) last_favorite_id: u64,
}

impl Dataset {
    /// Align the id sequences with the highest id already present.
    pub(crate) fn sync_sequences(&mut self) {
        self.last_animal_id = self.animals.iter().map(|a| a.id).max().unwrap_or(0);
        self.last_match_id = self.matches.iter().map(|m| m.id).max().unwrap_or(0);
        self.last_favorite_id = self.favorites.iter().map(|f| f.id).max().unwrap_or(0);
    }

    pub(crate) fn next_animal_id(&mut self) -> u64 {
        self.last_animal_id += 1;
        self.last_animal_id
    }

    pub(crate) fn next_match_id(&mut self) -> u64 {
        self.last_match_id += 1;
        self.last_match_id
    }

    pub(crate) fn next_favorite_id(&mut self) -> u64 {
        self.last_favorite_id += 1;
        self.last_favorite_id
    }

    pub(crate) fn animal_mut(&mut self, id: u64) -> Option<&mut Animal> {
        self.animals.iter_mut().find(|a| a.id == id)
    }

    pub(crate) fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }
}

/// Cloneable handle to the store. Clones share the same data.
///
/// Reads run concurrently; each mutation holds the write lock for its whole
/// read-modify-write, so racing writers are serialized.
#[derive(Debug, Clone)]
pub struct DbPool {
    data: Arc<RwLock<Dataset>>,
    public_url: Arc<str>,
}

impl DbPool {
    /// Store populated with the seed dataset.
    pub fn seeded(public_url: &str) -> Self {
        Self::from_dataset(public_url, seed_dataset(public_url))
    }

    /// Store with no records at all.
    pub fn empty(public_url: &str) -> Self {
        Self::from_dataset(public_url, Dataset::default())
    }

    pub fn from_dataset(public_url: &str, mut dataset: Dataset) -> Self {
        dataset.sync_sequences();
        Self {
            data: Arc::new(RwLock::new(dataset)),
            public_url: Arc::from(public_url),
        }
    }

    /// Base URL seeded photo links are built from.
    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.data.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Dataset> {
        self.data.write().await
    }
}
