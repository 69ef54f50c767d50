//! Equipment model

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::{EquipmentStatus, Location};
use crate::error::AppError;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: Location,
    pub status: EquipmentStatus,
    /// Employee currently accountable for the unit; absent means unassigned
    pub responsible_person_id: Option<i32>,
}

/// Equipment row as stored. Location and status are plain text columns;
/// conversion into [`Equipment`] validates them against the enumerations so
/// an out-of-set row is rejected instead of hydrated.
#[derive(Debug, FromRow)]
pub struct EquipmentRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub status: String,
    pub responsible_person_id: Option<i32>,
}

impl TryFrom<EquipmentRow> for Equipment {
    type Error = AppError;

    fn try_from(row: EquipmentRow) -> Result<Self, Self::Error> {
        let location = Location::from_str(&row.location).map_err(AppError::InvalidValue)?;
        let status = EquipmentStatus::from_str(&row.status).map_err(AppError::InvalidValue)?;
        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            location,
            status,
            responsible_person_id: row.responsible_person_id,
        })
    }
}
