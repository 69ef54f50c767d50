//! Employee model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Employee record. Provisioned out of band; read-only in this system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i32,
    /// External chat identity
    pub telegram_id: i64,
    pub telegram_username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub contact_number: String,
    pub email: String,
    /// Home location (office, department), free-form
    pub location: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
