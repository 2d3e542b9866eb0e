//! Calculation logic for the Gongsu Engine.
//!
//! This module contains the labor-hours (공수) calculator, the monthly
//! payroll aggregator, the status-based attendance summary, data-quality
//! checks over attendance records, and salary record construction.

mod attendance_audit;
mod attendance_summary;
mod labor_hours;
mod payroll;
mod salary;

pub use attendance_audit::{
    ABSENT_WITH_LABOR_HOURS, DUPLICATE_DATE, INVALID_LABOR_HOURS, RECORD_OUTSIDE_MONTH,
    audit_attendance,
};
pub use attendance_summary::summarize_attendance;
pub use labor_hours::{
    STANDARD_WORKDAY_HOURS, calculate_labor_hours, labor_hours_from_work_hours,
    normalize_labor_hours,
};
pub use payroll::calculate_payroll_totals;
pub use salary::{
    AMOUNT_DECIMAL_PLACES, LABOR_HOURS_DECIMAL_PLACES, build_salary_record, to_rounded_decimal,
};
