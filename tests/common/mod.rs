//! Shared fixtures for database-backed integration tests.
//!
//! These run against a live Postgres pointed at by DATABASE_URL:
//! cargo test -- --ignored

#![allow(dead_code)]

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use equiptrack_server::models::enums::{EquipmentStatus, Location};

pub async fn test_pool() -> Pool<Postgres> {
    let url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Process-unique chat identity so concurrent runs do not collide
pub fn unique_telegram_id() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos() as i64
}

pub async fn insert_employee(pool: &Pool<Postgres>, telegram_id: i64) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO employees (telegram_id, telegram_username, first_name, last_name, role,
                               contact_number, email, location)
        VALUES ($1, 'test.employee', 'Test', 'Employee', 'Engineer', '+380000000000',
                'test@example.org', 'Engineering')
        RETURNING id
        "#,
    )
    .bind(telegram_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert employee")
}

pub async fn insert_equipment(
    pool: &Pool<Postgres>,
    name: &str,
    location: Location,
    status: EquipmentStatus,
    responsible_person_id: Option<i32>,
) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO equipment (name, description, location, status, responsible_person_id)
        VALUES ($1, NULL, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(location.as_str())
    .bind(status.as_str())
    .bind(responsible_person_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert equipment")
}

/// Removes the unit and, via cascade, its movement records
pub async fn delete_equipment(pool: &Pool<Postgres>, id: i32) {
    sqlx::query("DELETE FROM equipment WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to delete equipment");
}

pub async fn delete_employee(pool: &Pool<Postgres>, id: i32) {
    sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to delete employee");
}

/// An id no equipment row uses
pub async fn missing_equipment_id(pool: &Pool<Postgres>) -> i32 {
    let max: Option<i32> = sqlx::query_scalar("SELECT MAX(id) FROM equipment")
        .fetch_one(pool)
        .await
        .expect("Failed to query max id");
    max.unwrap_or(0) + 100_000
}
