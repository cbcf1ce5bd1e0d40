use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::AppError;
use crate::llm::CompletionService;
use crate::model::attendance::{AttendanceDraft, AttendanceType, EmployeeType};
use crate::sqlgen::validator::{self, ATTENDANCE_TABLE, GeneratedStatement};

pub const SYSTEM_INSTRUCTION: &str = "You are an SQL query generator assistant for MySQL. Provide only the SQL INSERT query with all specified columns.";

/// Renders the per-employee instruction. The wording pins the model to the
/// fixed table, the six writable columns, the two auto-generated columns to
/// leave out, and bare-SQL output.
pub fn build_prompt(draft: &AttendanceDraft) -> String {
    format!(
        "You are an SQL query generator. Generate an SQL INSERT statement for recording employee attendance in a MySQL database.\n\
         The table name is `{ATTENDANCE_TABLE}`.\n\
         The table has the following columns (and their data types/behavior):\n\
         - `ATTENDANCE_ID` (INT AUTO_INCREMENT PRIMARY KEY - auto-generated, do NOT include in INSERT)\n\
         - `EMPLOYEE_ID` (VARCHAR(50) - refers to emp_id, a string)\n\
         - `EMPLOYEE_TYPE` (VARCHAR(50) or ENUM - e.g., 'Trainee', 'Full-time')\n\
         - `ATTENDANCE_TYPE` (VARCHAR(50) or ENUM - e.g., 'Present', 'Absent', 'Late')\n\
         - `ATTENDANCE_DATE` (DATE - in 'YYYY-MM-DD' format)\n\
         - `ATTENDANCE_TIME` (TIME - in 'HH:MM:SS' format)\n\
         - `INSERTED_BY_ID` (VARCHAR(50) - refers to the emp_id of the person recording, a string)\n\
         - `INSERTION_DATETIME` (TIMESTAMP DEFAULT CURRENT_TIMESTAMP - auto-generated, do NOT include in INSERT)\n\
         \n\
         Based on the following information, generate ONLY the SQL INSERT statement. Do not include any other text, explanations, or backticks.\n\
         Ensure all string values are enclosed in single quotes.\n\
         Ensure the date is in 'YYYY-MM-DD' format and time is in 'HH:MM:SS' format.\n\
         \n\
         Employee ID: '{employee_id}'\n\
         Employee Type: '{employee_type}'\n\
         Attendance Type: '{attendance_type}'\n\
         Attendance Date: '{date}'\n\
         Attendance Time: '{time}'\n\
         Inserted By ID: '{inserted_by}'\n\
         \n\
         Example format: INSERT INTO {ATTENDANCE_TABLE} (EMPLOYEE_ID, EMPLOYEE_TYPE, ATTENDANCE_TYPE, ATTENDANCE_DATE, ATTENDANCE_TIME, INSERTED_BY_ID) VALUES ('1483', 'Trainee', 'Present', '2025-06-05', '09:00:00', '1483');",
        employee_id = draft.employee_id,
        employee_type = draft.employee_type,
        attendance_type = draft.attendance_type,
        date = draft.date.format("%Y-%m-%d"),
        time = draft.time.format("%H:%M:%S"),
        inserted_by = draft.inserted_by_id,
    )
}

/// Drafts one statement per employee, in caller-supplied order. Strictly
/// sequential with early abort: the first invalid or failed draft aborts
/// the whole batch, so callers never see a partial result. No retries.
pub async fn draft_batch(
    service: &dyn CompletionService,
    all_ids: &[String],
    present_ids: &HashSet<String>,
    date: NaiveDate,
    time: NaiveTime,
    inserted_by_id: &str,
) -> Result<Vec<GeneratedStatement>, AppError> {
    let mut statements = Vec::with_capacity(all_ids.len());

    for employee_id in all_ids {
        let attendance_type = if present_ids.contains(employee_id) {
            AttendanceType::Present
        } else {
            AttendanceType::Absent
        };

        let draft = AttendanceDraft {
            employee_id: employee_id.clone(),
            employee_type: EmployeeType::Trainee,
            attendance_type,
            date,
            time,
            inserted_by_id: inserted_by_id.to_string(),
        };

        let reply = service
            .complete(SYSTEM_INSTRUCTION, &build_prompt(&draft))
            .await
            .map_err(|source| AppError::DraftServiceError {
                employee_id: employee_id.clone(),
                source,
            })?;

        debug!(%employee_id, %reply, "Draft received");

        let statement =
            validator::validate(&reply).map_err(|source| AppError::DraftRejected {
                employee_id: employee_id.clone(),
                source,
            })?;

        statements.push(statement);
    }

    Ok(statements)
}
