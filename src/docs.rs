use crate::api::attendance::{
    ExecuteSqlRequest, ExecuteSqlResponse, GenerateAttendanceSql, GeneratedSqlResponse,
};
use crate::api::employee::EmployeeListResponse;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Scribe API",
        version = "1.0.0",
        description = r#"
## Attendance Scribe

Backend for recording daily attendance of PMO trainees.

### 🔹 Workflow
- **Directory** — list all known employees from the CR database
- **Draft** — ask the Groq generation service for one INSERT statement per
  employee, validated against the fixed PMO_DAILY_ATTENDNACE shape
- **Execute** — run a validated batch as a single all-or-nothing
  transaction against the attendance database

### 📦 Response Format
- JSON-based RESTful responses
- Errors are returned as `{"error": message}`; a failing batch is rolled
  back in full, callers re-submit the whole operation

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::get_all_employees,
        crate::api::attendance::generate_attendance_sql,
        crate::api::attendance::execute_generated_sql
    ),
    components(
        schemas(
            Employee,
            EmployeeListResponse,
            GenerateAttendanceSql,
            GeneratedSqlResponse,
            ExecuteSqlRequest,
            ExecuteSqlResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance drafting and execution APIs"),
    )
)]
pub struct ApiDoc;
