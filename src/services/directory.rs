//! Equipment directory service
//!
//! Read side of the inventory: what a viewer may see, who is responsible
//! for a unit, and the movement log.

use crate::{
    error::AppResult,
    models::{employee::Employee, equipment::Equipment, movement::MovementLogEntry},
    repository::Repository,
};

/// What a viewer is allowed to see of the inventory.
///
/// Registered employees get the full inventory, occupied units included.
/// Anonymous viewers only get what can currently be borrowed; who holds
/// occupied equipment and where it sits is not disclosed to them.
#[derive(Debug, Clone)]
pub enum ViewerListing {
    Registered {
        employee: Employee,
        equipment: Vec<Equipment>,
    },
    Public {
        equipment: Vec<Equipment>,
    },
}

#[derive(Clone)]
pub struct DirectoryService {
    repository: Repository,
}

impl DirectoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Resolve a chat identity to a registered employee, if any
    pub async fn viewer(&self, telegram_id: i64) -> AppResult<Option<Employee>> {
        self.repository.employees.get_by_telegram_id(telegram_id).await
    }

    /// Inventory listing scoped to the viewer's access
    pub async fn list_for_viewer(&self, telegram_id: i64) -> AppResult<ViewerListing> {
        match self.repository.employees.get_by_telegram_id(telegram_id).await? {
            Some(employee) => {
                let equipment = self.repository.equipment.list().await?;
                Ok(ViewerListing::Registered { employee, equipment })
            }
            None => {
                let equipment = self.repository.equipment.list_available().await?;
                Ok(ViewerListing::Public { equipment })
            }
        }
    }

    /// Employee responsible for a unit. `None` means unassigned; callers
    /// render that, they do not fail on it.
    pub async fn responsible_for(&self, equipment_id: i32) -> AppResult<Option<Employee>> {
        self.repository.employees.responsible_for_equipment(equipment_id).await
    }

    pub async fn equipment(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Equipment currently assigned to an employee
    pub async fn assigned_to(&self, employee_id: i32) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list_for_responsible(employee_id).await
    }

    /// Full movement log, oldest first
    pub async fn movement_log(&self) -> AppResult<Vec<MovementLogEntry>> {
        self.repository.movements.list().await
    }
}
