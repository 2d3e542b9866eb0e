//! Attendance summary model.

use serde::{Deserialize, Serialize};

/// Status-based attendance summary for a set of records.
///
/// Unlike [`PayrollTotals`](super::PayrollTotals), days are classified by
/// the recorded status rather than by the labor-hours fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Number of records.
    pub total_days: u32,
    /// Records with status `present`.
    pub present_days: u32,
    /// Records with status `absent`.
    pub absent_days: u32,
    /// Records with any other status.
    pub other_days: u32,
    /// Sum of normalized labor-hours fractions over all records.
    pub total_labor_hours: f64,
    /// Sum of normalized worked hours over all records.
    pub total_work_hours: f64,
    /// Mean fraction over present days, 0 when there are none.
    pub average_labor_hours: f64,
}
