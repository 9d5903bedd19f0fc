//! Schema creation for the person and pet tables

use sqlx::SqlitePool;

/// Create the `person` and `pet` tables if they do not exist yet.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running petkeeper migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS person (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            surname TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pet (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            breed TEXT NOT NULL,
            birth_year INTEGER NOT NULL,
            person_id INTEGER NOT NULL REFERENCES person(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_pet_person_id ON pet(person_id)")
        .execute(pool)
        .await?;

    tracing::info!("Petkeeper migrations complete");
    Ok(())
}
