//! Database layer - connection pool, schema, and the pet DAO
//!
//! - Every DAO call acquires its own pooled connection and returns it on drop
//! - One statement per operation, no multi-statement transactions
//! - Foreign keys are left to the database

pub mod error;
pub mod pets;
pub mod pool;
pub mod schema;

pub use error::{DaoError, DaoResult};
pub use pets::{PetDao, SqlPetDao};
pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
