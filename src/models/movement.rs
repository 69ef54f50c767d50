//! Equipment movement log models

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::Location;
use crate::error::AppError;

/// One relocation of one equipment unit. Append-only: written exactly once
/// per successful relocation, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentMovement {
    pub id: i32,
    pub equipment_id: i32,
    pub from_location: Location,
    pub to_location: Location,
    pub movement_date: DateTime<Utc>,
}

/// Movement row as stored, locations unvalidated
#[derive(Debug, FromRow)]
pub struct MovementRow {
    pub id: i32,
    pub equipment_id: i32,
    pub from_location: String,
    pub to_location: String,
    pub movement_date: DateTime<Utc>,
}

impl TryFrom<MovementRow> for EquipmentMovement {
    type Error = AppError;

    fn try_from(row: MovementRow) -> Result<Self, Self::Error> {
        let from_location = Location::from_str(&row.from_location).map_err(AppError::InvalidValue)?;
        let to_location = Location::from_str(&row.to_location).map_err(AppError::InvalidValue)?;
        Ok(Self {
            id: row.id,
            equipment_id: row.equipment_id,
            from_location,
            to_location,
            movement_date: row.movement_date,
        })
    }
}

/// Movement joined with the owning equipment's name, for display
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MovementLogEntry {
    #[serde(flatten)]
    pub movement: EquipmentMovement,
    pub equipment_name: String,
}

#[derive(Debug, FromRow)]
pub struct MovementLogRow {
    pub id: i32,
    pub equipment_id: i32,
    pub from_location: String,
    pub to_location: String,
    pub movement_date: DateTime<Utc>,
    pub equipment_name: String,
}

impl TryFrom<MovementLogRow> for MovementLogEntry {
    type Error = AppError;

    fn try_from(row: MovementLogRow) -> Result<Self, Self::Error> {
        let movement = EquipmentMovement::try_from(MovementRow {
            id: row.id,
            equipment_id: row.equipment_id,
            from_location: row.from_location,
            to_location: row.to_location,
            movement_date: row.movement_date,
        })?;
        Ok(Self {
            movement,
            equipment_name: row.equipment_name,
        })
    }
}
