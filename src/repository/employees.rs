//! Employees repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::employee::Employee};

#[derive(Clone)]
pub struct EmployeesRepository {
    pool: Pool<Postgres>,
}

impl EmployeesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Employee matching an external chat identity, if registered
    pub async fn get_by_telegram_id(&self, telegram_id: i64) -> AppResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE telegram_id = $1",
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Employee responsible for the given equipment unit, if one is assigned
    pub async fn responsible_for_equipment(&self, equipment_id: i32) -> AppResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT e.*
            FROM employees e
            JOIN equipment eq ON eq.responsible_person_id = e.id
            WHERE eq.id = $1
            "#,
        )
        .bind(equipment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }
}
