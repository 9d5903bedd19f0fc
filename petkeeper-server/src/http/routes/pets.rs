//! Pet endpoints
//!
//! Thin handlers over `PetDao`: unknown ids and missing fields answer
//! 400, storage failures answer 500, everything else is JSON.

use axum::{extract::State, routing::get, Json, Router};
use petkeeper_core::{Pet, PetDraft};

use crate::http::error::ApiError;
use crate::http::extractors::{IdParam, PetForm};
use crate::state::AppState;

/// GET /pets/{id} - a single pet
async fn get_pet(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Pet>, ApiError> {
    let pet = state.pets().get(id).await?;
    Ok(Json(pet))
}

/// GET /pets - every stored pet
async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = state.pets().list().await?;
    Ok(Json(pets))
}

/// GET /pets/person/{personId} - pets owned by one person
async fn list_pets_by_person(
    State(state): State<AppState>,
    IdParam(person_id): IdParam,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = state.pets().list_by_person(person_id).await?;
    Ok(Json(pets))
}

/// POST /pets - create a pet from form fields
async fn add_pet(
    State(state): State<AppState>,
    PetForm(draft): PetForm,
) -> Result<Json<Pet>, ApiError> {
    let pet = state.pets().add(&draft).await?;
    tracing::info!(id = pet.id(), "Pet created");
    Ok(Json(pet))
}

/// PUT /pets/{id} - replace name, breed and birth year
async fn modify_pet(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    PetForm(draft): PetForm,
) -> Result<Json<Pet>, ApiError> {
    let pet = draft
        .clone()
        .into_pet(id)
        .map_err(|_| ApiError::bad_request(invalid_data_message(&draft)))?;

    state.pets().modify(&pet).await?;
    Ok(Json(pet))
}

/// DELETE /pets/{id} - remove a pet, answering with its id
async fn delete_pet(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<i32>, ApiError> {
    state.pets().delete(id).await?;
    tracing::info!(id, "Pet deleted");
    Ok(Json(id))
}

/// Message naming the submitted fields when a pet cannot be built from them.
fn invalid_data_message(draft: &PetDraft) -> String {
    format!(
        "Invalid data for pet (name: {}, breed: {}, birthYear: {})",
        draft.name.as_deref().unwrap_or("null"),
        draft.breed.as_deref().unwrap_or("null"),
        draft.birth_year
    )
}

/// Pet routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pets", get(list_pets).post(add_pet))
        .route(
            "/pets/{id}",
            get(get_pet).put(modify_pet).delete(delete_pet),
        )
        .route("/pets/person/{person_id}", get(list_pets_by_person))
}
