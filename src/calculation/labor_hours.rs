//! Labor-hours (공수) calculation.
//!
//! Converts a day's labor-hours fraction into worked hours, overtime hours
//! and a classification, using the 8-hour standard workday.

use crate::models::{LaborHoursResult, LaborHoursType};

/// Hours in one standard workday, i.e. a fraction of 1.0.
pub const STANDARD_WORKDAY_HOURS: f64 = 8.0;

/// Normalizes a nullable hour-like value.
///
/// Missing, NaN, infinite, zero and negative values all become `0.0`.
/// Attendance data is routinely incomplete, so these are treated as an
/// absent day rather than an error.
///
/// # Examples
///
/// ```
/// use gongsu_engine::calculation::normalize_labor_hours;
///
/// assert_eq!(normalize_labor_hours(1.125), 1.125);
/// assert_eq!(normalize_labor_hours(None), 0.0);
/// assert_eq!(normalize_labor_hours(f64::NAN), 0.0);
/// assert_eq!(normalize_labor_hours(-0.5), 0.0);
/// ```
pub fn normalize_labor_hours(value: impl Into<Option<f64>>) -> f64 {
    match value.into() {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Calculates worked and overtime hours for one day's labor-hours fraction.
///
/// The input is normalized with [`normalize_labor_hours`]; this function
/// never fails and does no rounding. Fractions above `f64::MAX / 8` are
/// still valid but their hours overflow to infinity, which JSON encodes as
/// `null`.
///
/// # Examples
///
/// ```
/// use gongsu_engine::calculation::calculate_labor_hours;
/// use gongsu_engine::models::LaborHoursType;
///
/// let result = calculate_labor_hours(1.125);
/// assert_eq!(result.actual_hours, 9.0);
/// assert_eq!(result.overtime_hours, 1.0);
/// assert_eq!(result.labor_type, LaborHoursType::Overtime);
///
/// let missing = calculate_labor_hours(None);
/// assert_eq!(missing.labor_type, LaborHoursType::Absent);
/// ```
pub fn calculate_labor_hours(labor_hours: impl Into<Option<f64>>) -> LaborHoursResult {
    let labor_hours = normalize_labor_hours(labor_hours);
    let actual_hours = labor_hours * STANDARD_WORKDAY_HOURS;
    let overtime_hours = (actual_hours - STANDARD_WORKDAY_HOURS).max(0.0);

    LaborHoursResult {
        labor_hours,
        actual_hours,
        overtime_hours,
        labor_type: LaborHoursType::from_fraction(labor_hours),
    }
}

/// Converts actual worked hours into a labor-hours fraction.
///
/// This is the conversion applied when check-in/check-out durations are
/// stored as attendance. Invalid input yields `0.0`; the result is not
/// rounded.
///
/// ```
/// use gongsu_engine::calculation::labor_hours_from_work_hours;
///
/// assert_eq!(labor_hours_from_work_hours(9.0), 1.125);
/// assert_eq!(labor_hours_from_work_hours(None), 0.0);
/// ```
pub fn labor_hours_from_work_hours(work_hours: impl Into<Option<f64>>) -> f64 {
    normalize_labor_hours(work_hours) / STANDARD_WORKDAY_HOURS
}
