//! Custom Axum extractors
//!
//! Wrap the stock `Path` and `Form` extractors so malformed input is
//! answered with a plain-text 400 like every other caller error.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;
use petkeeper_core::PetDraft;

use super::error::ApiError;

/// Extract a single integer identifier from the path
pub struct IdParam(pub i32);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        Ok(Self(id))
    }
}

/// Extract pet fields from an url-encoded form body
pub struct PetForm(pub PetDraft);

impl<S> FromRequest<S> for PetForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(draft) = Form::<PetDraft>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        Ok(Self(draft))
    }
}
