//! Animal listings and the input types that create and patch them.

use serde::{Deserialize, Serialize};

/// Status given to every newly listed animal.
pub const DEFAULT_STATUS: &str = "Disponível";

/// An animal available for adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: u64,
    pub name: String,
    /// Species, e.g. "Cachorro" or "Gato".
    #[serde(rename = "type")]
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub age_unit: String,
    pub size: String,
    pub sex: String,
    pub location: String,
    pub description: String,
    pub vaccinated: bool,
    pub neutered: bool,
    pub dewormed: bool,
    pub temperament: Vec<String>,
    pub needs: Vec<String>,
    /// Absolute photo URLs.
    pub photos: Vec<String>,
    pub status: String,
    pub matches: u32,
    pub views: u32,
}

/// Validated fields for a new listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub age_unit: String,
    pub size: String,
    pub sex: String,
    pub location: String,
    pub description: String,
    pub vaccinated: bool,
    pub neutered: bool,
    pub dewormed: bool,
    pub temperament: Vec<String>,
    pub needs: Vec<String>,
}

impl NewAnimal {
    /// Build the stored record. Counters start at zero and the status at [`DEFAULT_STATUS`].
    pub fn into_animal(self, id: u64, photos: Vec<String>) -> Animal {
        Animal {
            id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            age_unit: self.age_unit,
            size: self.size,
            sex: self.sex,
            location: self.location,
            description: self.description,
            vaccinated: self.vaccinated,
            neutered: self.neutered,
            dewormed: self.dewormed,
            temperament: self.temperament,
            needs: self.needs,
            photos,
            status: DEFAULT_STATUS.to_string(),
            matches: 0,
            views: 0,
        }
    }
}

/// The fields an update is allowed to change. `None` leaves the field as it is.
///
/// Identity, counters and photos are deliberately absent; photos are
/// resolved separately from `existingPhotos` and the uploaded files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalPatch {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub age_unit: Option<String>,
    pub size: Option<String>,
    pub sex: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub vaccinated: Option<bool>,
    pub neutered: Option<bool>,
    pub dewormed: Option<bool>,
    pub temperament: Option<Vec<String>>,
    pub needs: Option<Vec<String>>,
    pub status: Option<String>,
}

impl AnimalPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, animal: &mut Animal) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut animal.name, self.name);
        set(&mut animal.species, self.species);
        set(&mut animal.breed, self.breed);
        set(&mut animal.age, self.age);
        set(&mut animal.age_unit, self.age_unit);
        set(&mut animal.size, self.size);
        set(&mut animal.sex, self.sex);
        set(&mut animal.location, self.location);
        set(&mut animal.description, self.description);
        set(&mut animal.vaccinated, self.vaccinated);
        set(&mut animal.neutered, self.neutered);
        set(&mut animal.dewormed, self.dewormed);
        set(&mut animal.temperament, self.temperament);
        set(&mut animal.needs, self.needs);
        set(&mut animal.status, self.status);
    }
}
