//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body of `GET /health`
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok",
            service: "petkeeper",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Health routes, usable with any router state
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
