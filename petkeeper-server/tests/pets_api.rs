//! End-to-end tests for the /pets resource over an in-memory database

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use petkeeper_core::{Pet, PetDraft};
use petkeeper_server::db::{create_memory_pool, schema};
use petkeeper_server::{build_router, AppState, DaoError, DaoResult, PetDao, ServerConfig};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn seeded_pool() -> SqlitePool {
    let pool = create_memory_pool().await.unwrap();
    schema::run(&pool).await.unwrap();

    for (name, surname) in [("Ana", "Pérez"), ("Luis", "Gómez")] {
        sqlx::query("INSERT INTO person (name, surname) VALUES (?, ?)")
            .bind(name)
            .bind(surname)
            .execute(&pool)
            .await
            .unwrap();
    }

    for (name, breed, year, owner) in [("Kira", "Husky", 2018, 1), ("Tom", "Siamese", 2021, 2)] {
        sqlx::query("INSERT INTO pet (name, breed, birth_year, person_id) VALUES (?, ?, ?, ?)")
            .bind(name)
            .bind(breed)
            .bind(year)
            .bind(owner)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool
}

async fn app() -> Router {
    build_router(AppState::from_pool(seeded_pool().await), &ServerConfig::default())
}

fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_get_pet() {
    let app = app().await;

    let (status, body) = send_json(&app, empty_request("GET", "/pets/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Kira", "breed": "Husky", "birthYear": 2018, "personId": 1})
    );
}

#[tokio::test]
async fn test_get_unknown_pet_is_400() {
    let app = app().await;

    let (status, body) = send(&app, empty_request("GET", "/pets/999")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid id");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_400() {
    let app = app().await;

    let (status, _) = send(&app, empty_request("GET", "/pets/rex")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_pets() {
    let app = app().await;

    let (status, body) = send_json(&app, empty_request("GET", "/pets")).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Kira", "Tom"]);
}

#[tokio::test]
async fn test_list_pets_by_person() {
    let app = app().await;

    let (status, body) = send_json(&app, empty_request("GET", "/pets/person/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Tom");

    let (status, body) = send_json(&app, empty_request("GET", "/pets/person/77")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_add_pet() {
    let app = app().await;

    let (status, body) = send_json(
        &app,
        form_request("POST", "/pets", "name=Rex&breed=Labrador&birthYear=2020&personId=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Rex");
    assert_eq!(body["breed"], "Labrador");
    assert_eq!(body["birthYear"], 2020);
    assert_eq!(body["personId"], 1);

    let id = body["id"].as_i64().unwrap();
    assert!(id > 2);

    let (status, stored) = send_json(&app, empty_request("GET", &format!("/pets/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_add_pet_missing_breed_is_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        form_request("POST", "/pets", "name=Rex&birthYear=2020&personId=1"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "name and breed can't be null");
}

#[tokio::test]
async fn test_add_pet_unknown_owner_is_500() {
    let app = app().await;

    let (status, body) = send(
        &app,
        form_request("POST", "/pets", "name=Rex&breed=Labrador&birthYear=2020&personId=50"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("database error:"));
}

#[tokio::test]
async fn test_add_pet_malformed_year_is_400() {
    let app = app().await;

    let (status, _) = send(
        &app,
        form_request("POST", "/pets", "name=Rex&breed=Labrador&birthYear=old&personId=1"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_modify_pet() {
    let app = app().await;

    let (status, body) = send_json(
        &app,
        form_request("PUT", "/pets/1", "name=Nala&breed=Malamute&birthYear=2017&personId=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Nala", "breed": "Malamute", "birthYear": 2017, "personId": 1})
    );

    let (_, stored) = send_json(&app, empty_request("GET", "/pets/1")).await;
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_modify_keeps_owner() {
    let app = app().await;

    let (status, _) = send(
        &app,
        form_request("PUT", "/pets/1", "name=Nala&breed=Malamute&birthYear=2017&personId=2"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stored) = send_json(&app, empty_request("GET", "/pets/1")).await;
    assert_eq!(stored["name"], "Nala");
    assert_eq!(stored["personId"], 1);
}

#[tokio::test]
async fn test_modify_missing_name_is_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        form_request("PUT", "/pets/1", "breed=Malamute&birthYear=2017&personId=1"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        "Invalid data for pet (name: null, breed: Malamute, birthYear: 2017)"
    );

    let (_, stored) = send_json(&app, empty_request("GET", "/pets/1")).await;
    assert_eq!(stored["name"], "Kira");
}

#[tokio::test]
async fn test_modify_unknown_pet_is_400() {
    let app = app().await;

    let (status, body) = send(
        &app,
        form_request("PUT", "/pets/999", "name=Nala&breed=Malamute&birthYear=2017&personId=1"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid pet id");
}

#[tokio::test]
async fn test_delete_pet() {
    let app = app().await;

    let (status, body) = send_json(&app, empty_request("DELETE", "/pets/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(2));

    let (status, body) = send(&app, empty_request("GET", "/pets/2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid id");
}

#[tokio::test]
async fn test_delete_unknown_pet_is_400() {
    let app = app().await;

    let (status, body) = send(&app, empty_request("DELETE", "/pets/999")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid id");

    let (_, pets) = send_json(&app, empty_request("GET", "/pets")).await;
    assert_eq!(pets.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app().await;

    let (status, body) = send_json(&app, empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "petkeeper");
}

/// DAO whose storage is always down
struct BrokenDao;

fn broken() -> DaoError {
    DaoError::Storage(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl PetDao for BrokenDao {
    async fn get(&self, _id: i32) -> DaoResult<Pet> {
        Err(broken())
    }

    async fn list(&self) -> DaoResult<Vec<Pet>> {
        Err(broken())
    }

    async fn list_by_person(&self, _person_id: i32) -> DaoResult<Vec<Pet>> {
        Err(broken())
    }

    async fn add(&self, _draft: &PetDraft) -> DaoResult<Pet> {
        Err(broken())
    }

    async fn modify(&self, _pet: &Pet) -> DaoResult<()> {
        Err(broken())
    }

    async fn delete(&self, _id: i32) -> DaoResult<()> {
        Err(broken())
    }
}

#[tokio::test]
async fn test_storage_failures_are_500() {
    let app = build_router(AppState::new(Arc::new(BrokenDao)), &ServerConfig::default());
    let form = "name=Rex&breed=Labrador&birthYear=2020&personId=1";

    let requests = vec![
        empty_request("GET", "/pets/1"),
        empty_request("GET", "/pets"),
        empty_request("GET", "/pets/person/1"),
        form_request("POST", "/pets", form),
        form_request("PUT", "/pets/1", form),
        empty_request("DELETE", "/pets/1"),
    ];

    for request in requests {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, broken().to_string());
    }
}
