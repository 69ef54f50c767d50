//! Equipment repository for database operations
//!
//! Holds the two state transitions. Both run as a single transaction with
//! the equipment row locked, so concurrent transitions of the same unit
//! serialize at the database and either every write commits or none does.

use std::str::FromStr;

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, Location},
        equipment::{Equipment, EquipmentRow},
        movement::{EquipmentMovement, MovementRow},
    },
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, EquipmentRow>("SELECT * FROM equipment ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Equipment::try_from).collect()
    }

    /// List equipment that can currently be borrowed
    pub async fn list_available(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, EquipmentRow>(
            "SELECT * FROM equipment WHERE status = $1 ORDER BY id",
        )
        .bind(EquipmentStatus::Available.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Equipment::try_from).collect()
    }

    /// List equipment assigned to the given employee
    pub async fn list_for_responsible(&self, employee_id: i32) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, EquipmentRow>(
            "SELECT * FROM equipment WHERE responsible_person_id = $1 ORDER BY id",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Equipment::try_from).collect()
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, EquipmentRow>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;
        row.try_into()
    }

    /// Move equipment to a new location, appending a movement record.
    ///
    /// The row lock guarantees the recorded `from_location` is the state the
    /// update replaces. A same-location move is still logged. If the
    /// location update does not affect exactly one row the transaction
    /// rolls back, so a movement record never commits without its matching
    /// state change.
    pub async fn relocate(&self, id: i32, to: Location) -> AppResult<EquipmentMovement> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_scalar::<_, String>(
            "SELECT location FROM equipment WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;
        let from = Location::from_str(&current).map_err(AppError::InvalidValue)?;

        let movement = sqlx::query_as::<_, MovementRow>(
            r#"
            INSERT INTO equipment_movements (equipment_id, from_location, to_location)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from.as_str())
        .bind(to.as_str())
        .fetch_one(&mut *tx)
        .await?;

        let updated = sqlx::query("UPDATE equipment SET location = $1 WHERE id = $2")
            .bind(to.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() != 1 {
            return Err(AppError::UpdateFailed(format!(
                "Location update for equipment {} affected {} rows",
                id,
                updated.rows_affected()
            )));
        }

        tx.commit().await?;
        movement.try_into()
    }

    /// Change equipment availability. No movement record is written.
    pub async fn change_status(&self, id: i32, status: EquipmentStatus) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query_scalar::<_, i32>("SELECT id FROM equipment WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        let updated = sqlx::query("UPDATE equipment SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() != 1 {
            return Err(AppError::UpdateFailed(format!(
                "Status update for equipment {} affected {} rows",
                id,
                updated.rows_affected()
            )));
        }

        tx.commit().await?;
        Ok(())
    }
}
