//! Request types for the Gongsu Engine API.

use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

/// Request body for `POST /labor-hours`.
///
/// Either field may be given; `labor_hours` wins when both are present.
/// With neither, the day is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaborHoursRequest {
    /// The labor-hours fraction for the day.
    #[serde(default)]
    pub labor_hours: Option<f64>,
    /// Actual worked hours, converted to a fraction when `labor_hours` is absent.
    #[serde(default)]
    pub work_hours: Option<f64>,
}

/// Request body for `POST /payroll`.
///
/// Explicit rates take precedence. When either rate is missing it is looked
/// up in the salary rules for `role` as of the first day of `month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRequest {
    /// The worker the records belong to.
    pub user_id: String,
    /// The payroll month, `YYYY-MM`.
    pub month: String,
    /// Job role used to look up missing rates.
    #[serde(default)]
    pub role: Option<String>,
    /// Pay per regular hour.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// Pay per overtime hour.
    #[serde(default)]
    pub overtime_rate: Option<f64>,
    /// The month's attendance records.
    pub attendance_records: Vec<AttendanceRecord>,
}

/// Request body for `POST /attendance/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummaryRequest {
    /// The records to summarize.
    pub attendance_records: Vec<AttendanceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "userId": "user_001",
            "month": "2026-03",
            "hourlyRate": 15000,
            "overtimeRate": 22500,
            "attendanceRecords": [
                {
                    "id": "att_001",
                    "date": "2026-03-02",
                    "labor_hours": 1.0,
                    "work_hours": 8,
                    "status": "present"
                }
            ]
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "user_001");
        assert_eq!(request.hourly_rate, Some(15000.0));
        assert!(request.role.is_none());
        assert_eq!(request.attendance_records.len(), 1);
    }

    #[test]
    fn test_deserialize_payroll_request_with_role_only() {
        let json = r#"{
            "userId": "user_002",
            "month": "2026-03",
            "role": "rebar_worker",
            "attendanceRecords": []
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role.as_deref(), Some("rebar_worker"));
        assert!(request.hourly_rate.is_none());
        assert!(request.overtime_rate.is_none());
    }

    #[test]
    fn test_deserialize_labor_hours_request_accepts_null() {
        let request: LaborHoursRequest = serde_json::from_str(r#"{"labor_hours": null}"#).unwrap();
        assert!(request.labor_hours.is_none());
        assert!(request.work_hours.is_none());
    }
}
