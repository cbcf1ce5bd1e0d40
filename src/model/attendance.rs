use chrono::{NaiveDate, NaiveTime};
use strum_macros::{Display, EnumString};

/// Worker categories the attendance table accepts. The Display strings are
/// the exact values that end up quoted inside the generated statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum EmployeeType {
    Trainee,
    #[strum(serialize = "Full-time")]
    FullTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum AttendanceType {
    Present,
    Absent,
}

/// One attendance row to be drafted. Lives for a single request and is
/// never persisted directly; only its prompt rendering leaves the process.
#[derive(Debug, Clone)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub employee_type: EmployeeType,
    pub attendance_type: AttendanceType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub inserted_by_id: String,
}
