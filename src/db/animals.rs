//! Animal listing queries.

use crate::models::{Animal, AnimalPatch, NewAnimal};
use crate::{Error, Result};

use super::DbPool;

/// How an update changes the photo list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoChange {
    /// Replaces the current list before new uploads are appended.
    pub replace_with: Option<Vec<String>>,
    /// URLs of files uploaded with this request.
    pub appended: Vec<String>,
}

pub(crate) fn animal_not_found(id: u64) -> Error {
    Error::NotFound(format!("Animal {} not found", id))
}

pub async fn list_animals(pool: &DbPool) -> Vec<Animal> {
    pool.read().await.animals.clone()
}

pub async fn count_animals(pool: &DbPool) -> usize {
    pool.read().await.animals.len()
}

pub async fn get_animal(pool: &DbPool, id: u64) -> Result<Animal> {
    pool.read()
        .await
        .animals
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or_else(|| animal_not_found(id))
}

pub async fn create_animal(pool: &DbPool, input: NewAnimal, photos: Vec<String>) -> Animal {
    let mut data = pool.write().await;
    let id = data.next_animal_id();
    let animal = input.into_animal(id, photos);
    data.animals.push(animal.clone());
    animal
}

pub async fn update_animal(
    pool: &DbPool,
    id: u64,
    patch: AnimalPatch,
    photos: PhotoChange,
) -> Result<Animal> {
    let mut data = pool.write().await;
    let animal = data.animal_mut(id).ok_or_else(|| animal_not_found(id))?;

    patch.apply(animal);

    let PhotoChange {
        replace_with,
        appended,
    } = photos;
    if let Some(existing) = replace_with {
        animal.photos = existing;
    }
    animal.photos.extend(appended);

    Ok(animal.clone())
}

/// Remove the listing. Matches and favorites pointing at it are left in place.
pub async fn delete_animal(pool: &DbPool, id: u64) -> Result<()> {
    let mut data = pool.write().await;
    let before = data.animals.len();
    data.animals.retain(|a| a.id != id);

    if data.animals.len() < before {
        Ok(())
    } else {
        Err(animal_not_found(id))
    }
}
