//! petkeeper-server: pet storage and the `/pets` REST resource
//!
//! Two layers:
//! - `db`: connection pool, schema, and the `PetDao` data-access trait
//! - `http`: axum router, handlers, and error-to-status mapping

pub mod db;
pub mod http;
pub mod state;

pub use db::{DaoError, DaoResult, PetDao, SqlPetDao};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
