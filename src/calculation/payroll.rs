//! Monthly payroll aggregation.
//!
//! Folds a worker's attendance records into regular/overtime hours, pay and
//! day counts. Each record's fraction is converted with the same 8-hour
//! convention as [`calculate_labor_hours`](super::calculate_labor_hours).

use crate::models::{AttendanceRecord, PayrollInput, PayrollTotals};

use super::labor_hours::calculate_labor_hours;

/// Running sums for the fold over attendance records.
#[derive(Debug, Default)]
struct Accumulator {
    regular_hours: f64,
    overtime_hours: f64,
    total_labor_hours: f64,
    work_days: u32,
    absent_days: u32,
}

impl Accumulator {
    fn add(mut self, record: &AttendanceRecord) -> Self {
        let day = calculate_labor_hours(record.labor_hours);

        self.regular_hours += day.regular_hours();
        self.overtime_hours += day.overtime_hours;
        self.total_labor_hours += day.labor_hours;

        if day.labor_hours > 0.0 {
            self.work_days += 1;
        } else {
            self.absent_days += 1;
        }

        self
    }

    fn finish(self, hourly_rate: f64, overtime_rate: f64) -> PayrollTotals {
        let regular_pay = self.regular_hours * hourly_rate;
        let overtime_pay = self.overtime_hours * overtime_rate;

        PayrollTotals {
            regular_hours: self.regular_hours,
            overtime_hours: self.overtime_hours,
            regular_pay,
            overtime_pay,
            total_pay: regular_pay + overtime_pay,
            total_hours: self.regular_hours + self.overtime_hours,
            total_labor_hours: self.total_labor_hours,
            work_days: self.work_days,
            absent_days: self.absent_days,
        }
    }
}

/// Calculates monthly payroll totals for one worker.
///
/// Records are classified by their labor-hours fraction only: a positive
/// fraction is a work day, anything else (zero, missing, invalid) is an
/// absent day. The `status` field is not consulted.
///
/// Rates are used as given. Negative rates are not rejected and produce
/// negative pay. An empty record list produces all-zero totals.
///
/// # Example
///
/// ```
/// use gongsu_engine::calculation::calculate_payroll_totals;
/// use gongsu_engine::models::{AttendanceRecord, AttendanceStatus, PayrollInput};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let input = PayrollInput {
///     user_id: "user_001".to_string(),
///     month: "2026-03".to_string(),
///     hourly_rate: 15000.0,
///     overtime_rate: 22500.0,
///     attendance_records: vec![
///         AttendanceRecord::new("a1", day, 1.125, 9.0, AttendanceStatus::Present),
///     ],
/// };
///
/// let totals = calculate_payroll_totals(&input);
/// assert_eq!(totals.regular_hours, 8.0);
/// assert_eq!(totals.overtime_hours, 1.0);
/// assert_eq!(totals.total_pay, 142500.0);
/// ```
pub fn calculate_payroll_totals(input: &PayrollInput) -> PayrollTotals {
    input
        .attendance_records
        .iter()
        .fold(Accumulator::default(), Accumulator::add)
        .finish(input.hourly_rate, input.overtime_rate)
}
