//! Repository layer for database operations

pub mod employees;
pub mod equipment;
pub mod movements;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding the shared database connection pool.
/// Every operation borrows a connection (or transaction) from the pool for
/// its own scope and returns it on every exit path.
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub employees: employees::EmployeesRepository,
    pub equipment: equipment::EquipmentRepository,
    pub movements: movements::MovementsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            employees: employees::EmployeesRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            movements: movements::MovementsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
