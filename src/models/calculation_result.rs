//! Payroll calculation result models.
//!
//! This module contains the [`PayrollCalculation`] type returned by the
//! payroll endpoint, along with the audit trace that records how the rates
//! were chosen and which data-quality issues were noticed on the way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayrollMonth, PayrollTotals, SalaryRecord};

/// Where the rates used for a calculation came from.
///
/// # Example
///
/// ```
/// use gongsu_engine::models::RateSource;
///
/// assert_eq!(serde_json::to_string(&RateSource::Config).unwrap(), "\"config\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Both rates were supplied by the caller.
    Request,
    /// At least one rate was looked up in the salary rules.
    Config,
}

/// The pay rates a calculation was run with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRates {
    /// Pay per regular hour.
    pub hourly_rate: f64,
    /// Pay per overtime hour.
    pub overtime_rate: f64,
    /// Where the rates came from.
    pub source: RateSource,
}

/// How serious an audit warning is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; the figures are still trustworthy.
    Low,
    /// The figures may not mean what the caller expects.
    Medium,
    /// The figures should not be paid out without review.
    High,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never stop a calculation; they flag attendance data that a
/// payroll reviewer should look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
    /// The attendance record the warning is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use gongsu_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a monthly payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The worker the calculation is for.
    pub user_id: String,
    /// The payroll month.
    pub month: PayrollMonth,
    /// The rates the totals were computed with.
    pub rates: AppliedRates,
    /// Hour and pay aggregates.
    pub totals: PayrollTotals,
    /// The record to persist once approved.
    pub salary_record: SalaryRecord,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
