//! Movements repository for database operations
//!
//! Read-only: movement records are written inside the relocation
//! transaction in the equipment repository and are immutable afterwards.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::movement::{EquipmentMovement, MovementLogEntry, MovementLogRow, MovementRow},
};

#[derive(Clone)]
pub struct MovementsRepository {
    pool: Pool<Postgres>,
}

impl MovementsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Full movement log, oldest first, with equipment names for display
    pub async fn list(&self) -> AppResult<Vec<MovementLogEntry>> {
        let rows = sqlx::query_as::<_, MovementLogRow>(
            r#"
            SELECT m.id, m.equipment_id, m.from_location, m.to_location, m.movement_date,
                   eq.name AS equipment_name
            FROM equipment_movements m
            JOIN equipment eq ON eq.id = m.equipment_id
            ORDER BY m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(MovementLogEntry::try_from).collect()
    }

    /// Movements of one equipment unit, oldest first
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<EquipmentMovement>> {
        let rows = sqlx::query_as::<_, MovementRow>(
            "SELECT * FROM equipment_movements WHERE equipment_id = $1 ORDER BY id",
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(EquipmentMovement::try_from).collect()
    }
}
