use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DirectoryDb;
use crate::error::AppError;
use crate::model::employee::{self, Employee};

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(
        example = json!([
            { "id": "1483", "name": "Arif Hossain" },
            { "id": "1512", "name": "Nadia Rahman" }
        ])
    )]
    pub employees: Vec<Employee>,
}

/// Employee directory, ordered by name
#[utoipa::path(
    get,
    path = "/get_all_employees",
    responses(
        (status = 200, description = "All known employees, sorted by name ascending", body = EmployeeListResponse),
        (status = 500, description = "Directory store failure", body = Object, example = json!({
            "error": "Failed to connect to the CR database. Check backend logs for connection details."
        }))
    ),
    tag = "Employee"
)]
pub async fn get_all_employees(pool: web::Data<DirectoryDb>) -> Result<impl Responder, AppError> {
    let employees = employee::list_employees(&pool.0).await?;
    Ok(HttpResponse::Ok().json(EmployeeListResponse { employees }))
}
