//! Pet entity and its unvalidated input form.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{require, Result};

/// A pet owned by a person.
///
/// Two pets are equal when they share the same `id`; the remaining
/// fields are ignored by `PartialEq` and `Hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    id: i32,
    name: String,
    breed: String,
    birth_year: i32,
    person_id: i32,
}

impl Pet {
    /// Build a pet from already-validated values (e.g. a storage row).
    pub fn new(
        id: i32,
        name: impl Into<String>,
        breed: impl Into<String>,
        birth_year: i32,
        person_id: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            breed: breed.into(),
            birth_year,
            person_id,
        }
    }

    /// Build a pet from optional input, rejecting a missing name or breed.
    ///
    /// # Example
    /// ```
    /// use petkeeper_core::{Pet, ValidationError};
    ///
    /// let pet = Pet::try_new(1, Some("Rex".into()), Some("Labrador".into()), 2020, 1).unwrap();
    /// assert_eq!(pet.name(), "Rex");
    ///
    /// let err = Pet::try_new(1, None, Some("Labrador".into()), 2020, 1).unwrap_err();
    /// assert_eq!(err, ValidationError::Missing { field: "name" });
    /// ```
    pub fn try_new(
        id: i32,
        name: Option<String>,
        breed: Option<String>,
        birth_year: i32,
        person_id: i32,
    ) -> Result<Self> {
        let name = require(name, "name")?;
        let breed = require(breed, "breed")?;
        Ok(Self::new(id, name, breed, birth_year, person_id))
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    pub fn person_id(&self) -> i32 {
        self.person_id
    }

    /// Return a copy with a new name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Return a copy with a new breed.
    pub fn with_breed(self, breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            ..self
        }
    }

    pub fn with_birth_year(self, birth_year: i32) -> Self {
        Self { birth_year, ..self }
    }

    pub fn with_person_id(self, person_id: i32) -> Self {
        Self { person_id, ..self }
    }
}

impl PartialEq for Pet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pet {}

impl Hash for Pet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Pet data as submitted by a client, before validation.
///
/// Deserializes from form fields `name`, `breed`, `birthYear` and
/// `personId`. Absent integer fields default to `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDraft {
    pub name: Option<String>,
    pub breed: Option<String>,
    #[serde(default)]
    pub birth_year: i32,
    #[serde(default)]
    pub person_id: i32,
}

impl PetDraft {
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        birth_year: i32,
        person_id: i32,
    ) -> Self {
        Self {
            name: Some(name.into()),
            breed: Some(breed.into()),
            birth_year,
            person_id,
        }
    }

    /// True when both required text fields are present.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.breed.is_some()
    }

    /// Validate the draft into a pet carrying the given identifier.
    pub fn into_pet(self, id: i32) -> Result<Pet> {
        Pet::try_new(id, self.name, self.breed, self.birth_year, self.person_id)
    }
}
