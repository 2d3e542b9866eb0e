//! Data-quality checks over a month of attendance records.
//!
//! None of these checks change the payroll figures. They surface records a
//! reviewer should look at before the salary record is approved.

use std::collections::HashSet;

use crate::models::{AttendanceRecord, AttendanceStatus, AuditWarning, PayrollMonth, WarningSeverity};

/// Warning code for a record dated outside the payroll month.
pub const RECORD_OUTSIDE_MONTH: &str = "RECORD_OUTSIDE_MONTH";
/// Warning code for a second record on an already-seen date.
pub const DUPLICATE_DATE: &str = "DUPLICATE_DATE";
/// Warning code for an `absent` record that carries a positive fraction.
pub const ABSENT_WITH_LABOR_HOURS: &str = "ABSENT_WITH_LABOR_HOURS";
/// Warning code for a fraction that was NaN, infinite or negative.
pub const INVALID_LABOR_HOURS: &str = "INVALID_LABOR_HOURS";

/// Checks a month of attendance records and returns warnings in record order.
///
/// # Example
///
/// ```
/// use gongsu_engine::calculation::{audit_attendance, DUPLICATE_DATE};
/// use gongsu_engine::models::{AttendanceRecord, AttendanceStatus, PayrollMonth};
/// use chrono::NaiveDate;
///
/// let month: PayrollMonth = "2026-03".parse().unwrap();
/// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let records = vec![
///     AttendanceRecord::new("a1", day, 1.0, 8.0, AttendanceStatus::Present),
///     AttendanceRecord::new("a2", day, 0.5, 4.0, AttendanceStatus::Present),
/// ];
///
/// let warnings = audit_attendance(&records, month);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].code, DUPLICATE_DATE);
/// ```
pub fn audit_attendance(records: &[AttendanceRecord], month: PayrollMonth) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    let mut seen_dates = HashSet::new();

    for record in records {
        if !month.contains(record.date) {
            warnings.push(warning(
                RECORD_OUTSIDE_MONTH,
                format!("Record dated {} is outside payroll month {}", record.date, month),
                WarningSeverity::Medium,
                record,
            ));
        }

        if !seen_dates.insert(record.date) {
            warnings.push(warning(
                DUPLICATE_DATE,
                format!("More than one attendance record on {}", record.date),
                WarningSeverity::Medium,
                record,
            ));
        }

        match record.labor_hours {
            Some(value) if !value.is_finite() || value < 0.0 => {
                warnings.push(warning(
                    INVALID_LABOR_HOURS,
                    format!("Labor hours {} on {} treated as 0", value, record.date),
                    WarningSeverity::Low,
                    record,
                ));
            }
            Some(value) if value > 0.0 && record.status == AttendanceStatus::Absent => {
                warnings.push(warning(
                    ABSENT_WITH_LABOR_HOURS,
                    format!(
                        "Record on {} is marked absent but carries {} labor hours; payroll counts it as worked",
                        record.date, value
                    ),
                    WarningSeverity::Low,
                    record,
                ));
            }
            _ => {}
        }
    }

    warnings
}

fn warning(
    code: &str,
    message: String,
    severity: WarningSeverity,
    record: &AttendanceRecord,
) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity,
        record_id: Some(record.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn march() -> PayrollMonth {
        "2026-03".parse().unwrap()
    }

    fn make_record(id: &str, date: NaiveDate, labor_hours: f64, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::new(id, date, labor_hours, labor_hours * 8.0, status)
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_clean_month_has_no_warnings() {
        let records = vec![
            make_record("a1", date(3, 2), 1.0, AttendanceStatus::Present),
            make_record("a2", date(3, 3), 0.0, AttendanceStatus::Absent),
        ];

        assert!(audit_attendance(&records, march()).is_empty());
    }

    #[test]
    fn test_record_outside_month() {
        let records = vec![make_record("a1", date(4, 1), 1.0, AttendanceStatus::Present)];

        let warnings = audit_attendance(&records, march());

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, RECORD_OUTSIDE_MONTH);
        assert_eq!(warnings[0].severity, WarningSeverity::Medium);
        assert_eq!(warnings[0].record_id.as_deref(), Some("a1"));
        assert!(warnings[0].message.contains("2026-04-01"));
    }

    #[test]
    fn test_duplicate_date_flags_second_record() {
        let records = vec![
            make_record("a1", date(3, 2), 1.0, AttendanceStatus::Present),
            make_record("a2", date(3, 2), 1.0, AttendanceStatus::Present),
        ];

        let warnings = audit_attendance(&records, march());

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, DUPLICATE_DATE);
        assert_eq!(warnings[0].record_id.as_deref(), Some("a2"));
    }

    #[test]
    fn test_absent_with_labor_hours() {
        let records = vec![make_record("a1", date(3, 2), 0.5, AttendanceStatus::Absent)];

        let warnings = audit_attendance(&records, march());

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, ABSENT_WITH_LABOR_HOURS);
        assert_eq!(warnings[0].severity, WarningSeverity::Low);
    }

    #[test]
    fn test_invalid_labor_hours() {
        let records = vec![
            make_record("a1", date(3, 2), -0.5, AttendanceStatus::Present),
            make_record("a2", date(3, 3), f64::NAN, AttendanceStatus::Absent),
        ];

        let warnings = audit_attendance(&records, march());

        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.code == INVALID_LABOR_HOURS));
    }

    #[test]
    fn test_missing_labor_hours_is_not_flagged() {
        let mut record = make_record("a1", date(3, 2), 0.0, AttendanceStatus::Absent);
        record.labor_hours = None;

        assert!(audit_attendance(&[record], march()).is_empty());
    }

    #[test]
    fn test_multiple_issues_in_record_order() {
        let records = vec![
            make_record("a1", date(2, 28), 1.0, AttendanceStatus::Present),
            make_record("a2", date(3, 2), 1.0, AttendanceStatus::Absent),
            make_record("a3", date(3, 2), 1.0, AttendanceStatus::Present),
        ];

        let codes: Vec<String> = audit_attendance(&records, march())
            .into_iter()
            .map(|w| w.code)
            .collect();

        assert_eq!(
            codes,
            vec![RECORD_OUTSIDE_MONTH, ABSENT_WITH_LABOR_HOURS, DUPLICATE_DATE]
        );
    }
}
