//! Salary record model.
//!
//! A salary record is what the admin layer persists once a month's payroll
//! has been approved. Amounts are exact decimals so the stored figures do
//! not drift from what was shown on screen.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted monthly salary record.
///
/// # Example
///
/// ```
/// use gongsu_engine::models::SalaryRecord;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     user_id: "user_001".to_string(),
///     month: "2026-03".to_string(),
///     work_days: 3,
///     absent_days: 1,
///     total_labor_hours: Decimal::new(2625, 3),
///     regular_hours: Decimal::new(200, 1),
///     overtime_hours: Decimal::new(10, 1),
///     hourly_rate: Decimal::new(150000, 1),
///     overtime_rate: Decimal::new(225000, 1),
///     regular_pay: Decimal::new(3000000, 1),
///     overtime_pay: Decimal::new(225000, 1),
///     total_pay: Decimal::new(3225000, 1),
/// };
/// assert_eq!(record.total_pay, record.regular_pay + record.overtime_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// The worker.
    pub user_id: String,
    /// The payroll month, `YYYY-MM`.
    pub month: String,
    /// Days with a positive labor-hours fraction.
    pub work_days: u32,
    /// Days with a zero or missing fraction.
    pub absent_days: u32,
    /// Sum of labor-hours fractions, three decimal places.
    pub total_labor_hours: Decimal,
    /// Regular hours, one decimal place.
    pub regular_hours: Decimal,
    /// Overtime hours, one decimal place.
    pub overtime_hours: Decimal,
    /// Regular hourly rate used.
    pub hourly_rate: Decimal,
    /// Overtime hourly rate used.
    pub overtime_rate: Decimal,
    /// Regular pay, one decimal place.
    pub regular_pay: Decimal,
    /// Overtime pay, one decimal place.
    pub overtime_pay: Decimal,
    /// Total pay, one decimal place.
    pub total_pay: Decimal,
}
