//! Payroll input and totals models.

use serde::{Deserialize, Serialize};

use super::AttendanceRecord;

/// Everything needed to compute one worker's monthly payroll totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollInput {
    /// The worker the records belong to.
    pub user_id: String,
    /// The payroll month, `YYYY-MM`.
    pub month: String,
    /// Pay per regular hour.
    pub hourly_rate: f64,
    /// Pay per overtime hour.
    pub overtime_rate: f64,
    /// The month's attendance records, in any order.
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecord>,
}

/// Monthly hour and pay aggregates for one worker.
///
/// `total_hours == regular_hours + overtime_hours` and
/// `total_pay == regular_pay + overtime_pay` always hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    /// Sum of each day's hours up to 8.
    pub regular_hours: f64,
    /// Sum of each day's hours above 8.
    pub overtime_hours: f64,
    /// `regular_hours * hourly_rate`.
    pub regular_pay: f64,
    /// `overtime_hours * overtime_rate`.
    pub overtime_pay: f64,
    /// `regular_pay + overtime_pay`.
    pub total_pay: f64,
    /// `regular_hours + overtime_hours`.
    pub total_hours: f64,
    /// Sum of the normalized labor-hours fractions.
    pub total_labor_hours: f64,
    /// Days with a positive fraction.
    pub work_days: u32,
    /// Days with a zero (or missing) fraction.
    pub absent_days: u32,
}
