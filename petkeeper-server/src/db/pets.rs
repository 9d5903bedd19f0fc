//! Pet data access
//!
//! All SQL touching the `pet` table lives here. Each operation runs a
//! single statement on a connection acquired for that call only.

use async_trait::async_trait;
use petkeeper_core::{Pet, PetDraft};
use sqlx::{FromRow, SqlitePool};

use super::{DaoError, DaoResult};

/// Data-access operations for pets.
///
/// `InvalidArgument` means the caller asked for something that does not
/// exist or sent incomplete data; `Storage` means the database failed.
#[async_trait]
pub trait PetDao: Send + Sync {
    /// Fetch a pet by id.
    async fn get(&self, id: i32) -> DaoResult<Pet>;

    /// All stored pets in storage order.
    async fn list(&self) -> DaoResult<Vec<Pet>>;

    /// Pets owned by `person_id`; empty when the person has none.
    async fn list_by_person(&self, person_id: i32) -> DaoResult<Vec<Pet>>;

    /// Store a new pet and return it with its generated id.
    async fn add(&self, draft: &PetDraft) -> DaoResult<Pet>;

    /// Update name, breed and birth year of an existing pet.
    ///
    /// The owner is never changed by this operation.
    async fn modify(&self, pet: &Pet) -> DaoResult<()>;

    /// Remove a pet by id.
    async fn delete(&self, id: i32) -> DaoResult<()>;
}

/// Pet row as stored in the database
#[derive(Debug, FromRow)]
struct PetRow {
    id: i32,
    name: String,
    breed: String,
    birth_year: i32,
    person_id: i32,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Pet::new(row.id, row.name, row.breed, row.birth_year, row.person_id)
    }
}

const SELECT_ALL: &str = "SELECT id, name, breed, birth_year, person_id FROM pet";
const SELECT_BY_ID: &str = "SELECT id, name, breed, birth_year, person_id FROM pet WHERE id = ?";
const SELECT_BY_PERSON: &str =
    "SELECT id, name, breed, birth_year, person_id FROM pet WHERE person_id = ?";

/// `PetDao` backed by a SQLite pool
#[derive(Clone)]
pub struct SqlPetDao {
    pool: SqlitePool,
}

impl SqlPetDao {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_all(
        &self,
        query: &'static str,
        bind: Option<i32>,
    ) -> Result<Vec<Pet>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let mut statement = sqlx::query_as::<_, PetRow>(query);
        if let Some(value) = bind {
            statement = statement.bind(value);
        }

        let rows = statement.fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(Pet::from).collect())
    }
}

#[async_trait]
impl PetDao for SqlPetDao {
    async fn get(&self, id: i32) -> DaoResult<Pet> {
        let row = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query_as::<_, PetRow>(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
        }
        .await
        .map_err(|e| DaoError::storage("Error getting a pet", e))?;

        row.map(Pet::from)
            .ok_or_else(|| DaoError::invalid_argument("Invalid id"))
    }

    async fn list(&self) -> DaoResult<Vec<Pet>> {
        self.fetch_all(SELECT_ALL, None)
            .await
            .map_err(|e| DaoError::storage("Error listing pets", e))
    }

    async fn list_by_person(&self, person_id: i32) -> DaoResult<Vec<Pet>> {
        self.fetch_all(SELECT_BY_PERSON, Some(person_id))
            .await
            .map_err(|e| DaoError::storage("Error listing pets by person", e))
    }

    async fn add(&self, draft: &PetDraft) -> DaoResult<Pet> {
        let (Some(name), Some(breed)) = (draft.name.as_deref(), draft.breed.as_deref()) else {
            return Err(DaoError::invalid_argument("name and breed can't be null"));
        };

        let id = async {
            let mut conn = self.pool.acquire().await?;
            let result = sqlx::query(
                "INSERT INTO pet (name, breed, birth_year, person_id) VALUES (?, ?, ?, ?)",
            )
            .bind(name)
            .bind(breed)
            .bind(draft.birth_year)
            .bind(draft.person_id)
            .execute(&mut *conn)
            .await?;

            if result.rows_affected() != 1 {
                tracing::error!("Error inserting value");
                return Err(sqlx::Error::Protocol("Error inserting value".into()));
            }

            match i32::try_from(result.last_insert_rowid()) {
                Ok(id) if id > 0 => Ok(id),
                _ => {
                    tracing::error!("Error retrieving inserted id");
                    Err(sqlx::Error::Protocol("Error retrieving inserted id".into()))
                }
            }
        }
        .await
        .map_err(|e| DaoError::storage("Error adding a pet", e))?;

        tracing::debug!(id, name, "pet added");
        Ok(Pet::new(id, name, breed, draft.birth_year, draft.person_id))
    }

    async fn modify(&self, pet: &Pet) -> DaoResult<()> {
        let affected = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query("UPDATE pet SET name = ?, breed = ?, birth_year = ? WHERE id = ?")
                .bind(pet.name())
                .bind(pet.breed())
                .bind(pet.birth_year())
                .bind(pet.id())
                .execute(&mut *conn)
                .await
                .map(|r| r.rows_affected())
        }
        .await
        .map_err(|e| DaoError::storage("Error modifying a pet", e))?;

        if affected != 1 {
            return Err(DaoError::invalid_argument("Invalid pet id"));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DaoResult<()> {
        let affected = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query("DELETE FROM pet WHERE id = ?")
                .bind(id)
                .execute(&mut *conn)
                .await
                .map(|r| r.rows_affected())
        }
        .await
        .map_err(|e| DaoError::storage("Error deleting a pet", e))?;

        if affected != 1 {
            return Err(DaoError::invalid_argument("Invalid id"));
        }
        Ok(())
    }
}
