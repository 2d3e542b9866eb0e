//! Attendance record model.
//!
//! Attendance records are owned by the attendance store; the engine only
//! reads the fields below.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status as recorded by the site check-in flow.
///
/// Statuses other than `present` and `absent` (late, early leave, leave
/// types added later) are kept as [`AttendanceStatus::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The worker attended.
    Present,
    /// The worker was absent.
    Absent,
    /// Any other status string.
    #[default]
    #[serde(other)]
    Other,
}

/// One day of attendance for one worker.
///
/// `labor_hours` and `work_hours` are nullable in the attendance store; a
/// missing value is treated the same as an absent day.
///
/// # Example
///
/// ```
/// use gongsu_engine::models::{AttendanceRecord, AttendanceStatus};
///
/// let record: AttendanceRecord = serde_json::from_str(r#"{
///     "id": "att_001",
///     "date": "2026-03-02",
///     "labor_hours": 1.125,
///     "work_hours": 9,
///     "status": "present"
/// }"#).unwrap();
///
/// assert_eq!(record.labor_hours, Some(1.125));
/// assert_eq!(record.status, AttendanceStatus::Present);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the attendance row.
    pub id: String,
    /// The work date.
    pub date: NaiveDate,
    /// The labor-hours fraction (공수) for the day.
    #[serde(default)]
    pub labor_hours: Option<f64>,
    /// Actual hours worked, stored alongside the fraction.
    #[serde(default)]
    pub work_hours: Option<f64>,
    /// The attendance status.
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Creates a record with both hour fields set.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        labor_hours: f64,
        work_hours: f64,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            labor_hours: Some(labor_hours),
            work_hours: Some(work_hours),
            status,
        }
    }
}
