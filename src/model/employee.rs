use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": "1483",
        "name": "Arif Hossain"
    })
)]
pub struct Employee {
    #[schema(example = "1483")]
    pub id: String,

    #[schema(example = "Arif Hossain")]
    pub name: String,
}

/// Directory read: every known employee, ordered by name ascending.
pub async fn list_employees(pool: &MySqlPool) -> Result<Vec<Employee>, AppError> {
    sqlx::query_as::<_, Employee>("SELECT id, name FROM employee ORDER BY name ASC")
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::from_query("CR", e))
}
