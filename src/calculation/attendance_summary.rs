//! Status-based attendance summary.
//!
//! Reporting screens summarize a month by recorded status. This is
//! deliberately separate from payroll, which classifies days by fraction.

use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary};

use super::labor_hours::normalize_labor_hours;

/// Summarizes attendance records by status.
///
/// `average_labor_hours` is the mean fraction over `present` days and is
/// `0.0` when there are none.
///
/// # Example
///
/// ```
/// use gongsu_engine::calculation::summarize_attendance;
/// use gongsu_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
/// let records = vec![
///     AttendanceRecord::new("a1", day(2), 1.0, 8.0, AttendanceStatus::Present),
///     AttendanceRecord::new("a2", day(3), 0.5, 4.0, AttendanceStatus::Present),
///     AttendanceRecord::new("a3", day(4), 0.0, 0.0, AttendanceStatus::Absent),
/// ];
///
/// let summary = summarize_attendance(&records);
/// assert_eq!(summary.present_days, 2);
/// assert_eq!(summary.absent_days, 1);
/// assert_eq!(summary.average_labor_hours, 0.75);
/// ```
pub fn summarize_attendance(records: &[AttendanceRecord]) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();
    let mut present_labor_hours = 0.0;

    for record in records {
        let labor_hours = normalize_labor_hours(record.labor_hours);

        summary.total_days += 1;
        summary.total_labor_hours += labor_hours;
        summary.total_work_hours += normalize_labor_hours(record.work_hours);

        match record.status {
            AttendanceStatus::Present => {
                summary.present_days += 1;
                present_labor_hours += labor_hours;
            }
            AttendanceStatus::Absent => summary.absent_days += 1,
            AttendanceStatus::Other => summary.other_days += 1,
        }
    }

    if summary.present_days > 0 {
        summary.average_labor_hours = present_labor_hours / f64::from(summary.present_days);
    }

    summary
}
