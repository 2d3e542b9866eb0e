//! Labor-hours result model.
//!
//! A labor-hours fraction (공수) expresses a day's work relative to the
//! standard 8-hour workday: 1.0 is one full day, 0.5 is half a day and
//! 1.125 is a nine-hour day.

use serde::{Deserialize, Serialize};

use crate::calculation::STANDARD_WORKDAY_HOURS;

/// Categorical label for a day's labor-hours fraction.
///
/// # Example
///
/// ```
/// use gongsu_engine::models::LaborHoursType;
///
/// let json = serde_json::to_string(&LaborHoursType::Overtime).unwrap();
/// assert_eq!(json, "\"overtime\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborHoursType {
    /// No work recorded (fraction of exactly 0).
    Absent,
    /// Less than a standard day.
    Partial,
    /// Exactly one standard day.
    Regular,
    /// More than a standard day.
    Overtime,
}

impl LaborHoursType {
    /// Classifies an already-normalized fraction.
    pub fn from_fraction(labor_hours: f64) -> Self {
        if labor_hours <= 0.0 {
            LaborHoursType::Absent
        } else if labor_hours < 1.0 {
            LaborHoursType::Partial
        } else if labor_hours == 1.0 {
            LaborHoursType::Regular
        } else {
            LaborHoursType::Overtime
        }
    }
}

/// Hours derived from a single day's labor-hours fraction.
///
/// Produced by [`calculate_labor_hours`](crate::calculation::calculate_labor_hours);
/// values are never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborHoursResult {
    /// The normalized fraction (never negative, never NaN).
    pub labor_hours: f64,
    /// Actual hours worked (`labor_hours * 8`).
    pub actual_hours: f64,
    /// Hours beyond the standard 8-hour day.
    pub overtime_hours: f64,
    /// The day's classification.
    #[serde(rename = "type")]
    pub labor_type: LaborHoursType,
}

impl LaborHoursResult {
    /// Hours up to the standard 8-hour day.
    pub fn regular_hours(&self) -> f64 {
        self.actual_hours.min(STANDARD_WORKDAY_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_fraction_boundaries() {
        assert_eq!(LaborHoursType::from_fraction(0.0), LaborHoursType::Absent);
        assert_eq!(LaborHoursType::from_fraction(0.125), LaborHoursType::Partial);
        assert_eq!(LaborHoursType::from_fraction(0.999), LaborHoursType::Partial);
        assert_eq!(LaborHoursType::from_fraction(1.0), LaborHoursType::Regular);
        assert_eq!(LaborHoursType::from_fraction(1.001), LaborHoursType::Overtime);
    }

    #[test]
    fn test_regular_hours_caps_at_standard_day() {
        let result = LaborHoursResult {
            labor_hours: 1.5,
            actual_hours: 12.0,
            overtime_hours: 4.0,
            labor_type: LaborHoursType::Overtime,
        };
        assert_eq!(result.regular_hours(), 8.0);
    }

    #[test]
    fn test_result_serializes_with_type_field() {
        let result = LaborHoursResult {
            labor_hours: 0.5,
            actual_hours: 4.0,
            overtime_hours: 0.0,
            labor_type: LaborHoursType::Partial,
        };

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["laborHours"], 0.5);
        assert_eq!(json["actualHours"], 4.0);
        assert_eq!(json["overtimeHours"], 0.0);
        assert_eq!(json["type"], "partial");
    }
}
