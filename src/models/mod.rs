//! Core data models for the Gongsu Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod attendance_summary;
mod calculation_result;
mod labor_hours;
mod month;
mod payroll;
mod salary_record;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use attendance_summary::AttendanceSummary;
pub use calculation_result::{
    AppliedRates, AuditStep, AuditTrace, AuditWarning, PayrollCalculation, RateSource,
    WarningSeverity,
};
pub use labor_hours::{LaborHoursResult, LaborHoursType};
pub use month::PayrollMonth;
pub use payroll::{PayrollInput, PayrollTotals};
pub use salary_record::SalaryRecord;
