use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use crate::config::Config;

/// Pool over the directory database (read-only `employee` table).
#[derive(Clone)]
pub struct DirectoryDb(pub MySqlPool);

/// Pool over the attendance database (PMO_DAILY_ATTENDNACE inserts).
#[derive(Clone)]
pub struct AttendanceDb(pub MySqlPool);

/// Lazy pools: nothing connects until the first query, so a store being
/// down surfaces per request as a 500 instead of killing startup.
pub fn init_pools(config: &Config) -> (DirectoryDb, AttendanceDb) {
    let directory = MySqlPoolOptions::new()
        .connect_lazy(&config.directory_url())
        .expect("Invalid directory database URL");
    let attendance = MySqlPoolOptions::new()
        .connect_lazy(&config.attendance_url())
        .expect("Invalid attendance database URL");

    (DirectoryDb(directory), AttendanceDb(attendance))
}
