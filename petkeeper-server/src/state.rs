//! Application state shared across handlers

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::{PetDao, SqlPetDao};

/// Shared application state
///
/// Holds the pet DAO behind a trait object so tests can inject their own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pets: Arc<dyn PetDao>,
}

impl AppState {
    pub fn new(pets: Arc<dyn PetDao>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pets }),
        }
    }

    /// State backed by the SQL DAO over the given pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(Arc::new(SqlPetDao::new(pool)))
    }

    pub fn pets(&self) -> &dyn PetDao {
        self.inner.pets.as_ref()
    }
}
