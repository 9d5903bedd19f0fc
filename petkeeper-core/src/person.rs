//! Person entity, the owner side of the pet relation.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{require, Result};
use crate::pet::Pet;

/// A pet owner.
///
/// `pets` is not stored with the person row; callers fill it in when
/// they need the owned pets alongside the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    id: i32,
    name: String,
    surname: String,
    #[serde(default)]
    pets: Vec<Pet>,
}

impl Person {
    pub fn new(id: i32, name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            pets: Vec::new(),
        }
    }

    /// Build a person from optional input, rejecting a missing name or surname.
    pub fn try_new(id: i32, name: Option<String>, surname: Option<String>) -> Result<Self> {
        let name = require(name, "name")?;
        let surname = require(surname, "surname")?;
        Ok(Self::new(id, name, surname))
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_surname(self, surname: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            ..self
        }
    }

    /// Attach the owned pets, replacing any previously attached list.
    pub fn with_pets(self, pets: impl IntoIterator<Item = Pet>) -> Self {
        Self {
            pets: pets.into_iter().collect(),
            ..self
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
