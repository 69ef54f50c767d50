//! Equipment transition service
//!
//! The two state transitions equipment can take. Status and location are
//! independent axes: any unit may be relocated regardless of status, and a
//! move to the unit's current location is logged like any other.

use crate::{
    error::AppResult,
    models::{
        enums::{EquipmentStatus, Location},
        movement::EquipmentMovement,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct TransitionService {
    repository: Repository,
}

impl TransitionService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Relocate a unit, appending a movement record. Atomic: the movement
    /// insert and the location update commit together or not at all.
    pub async fn relocate(&self, equipment_id: i32, to: Location) -> AppResult<EquipmentMovement> {
        self.repository.equipment.relocate(equipment_id, to).await
    }

    /// Change a unit's availability. Not part of location history, so no
    /// movement record is produced.
    pub async fn change_status(&self, equipment_id: i32, status: EquipmentStatus) -> AppResult<()> {
        self.repository.equipment.change_status(equipment_id, status).await
    }
}
