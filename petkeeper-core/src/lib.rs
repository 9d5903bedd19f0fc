//! petkeeper-core: entity model shared by the server and the CLI.
//!
//! Entities are plain values validated at construction. Equality and
//! hashing follow the storage identity (`id`), not field contents.

pub mod error;
pub mod person;
pub mod pet;

pub use error::{Result, ValidationError};
pub use person::Person;
pub use pet::{Pet, PetDraft};
