//! HTTP request handlers for the Gongsu Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    audit_attendance, build_salary_record, calculate_labor_hours, calculate_payroll_totals,
    labor_hours_from_work_hours, summarize_attendance,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AppliedRates, AuditStep, AuditTrace, PayrollCalculation, PayrollInput, PayrollMonth,
    RateSource,
};

use super::request::{AttendanceSummaryRequest, LaborHoursRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/labor-hours", post(labor_hours_handler))
        .route("/payroll", post(payroll_handler))
        .route("/attendance/summary", post(attendance_summary_handler))
        .with_state(state)
}

/// Handler for POST /labor-hours.
async fn labor_hours_handler(payload: Result<Json<LaborHoursRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let fraction = request
        .labor_hours
        .or_else(|| request.work_hours.map(labor_hours_from_work_hours));
    let result = calculate_labor_hours(fraction);

    info!(
        correlation_id = %correlation_id,
        labor_hours = result.labor_hours,
        labor_type = ?result.labor_type,
        "Labor hours calculated"
    );

    json_response(StatusCode::OK, &result)
}

/// Handler for POST /payroll.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_payroll_calculation(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                user_id = %result.user_id,
                month = %result.month,
                records = result.totals.work_days + result.totals.absent_days,
                total_pay = result.totals.total_pay,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculation completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /attendance/summary.
async fn attendance_summary_handler(
    payload: Result<Json<AttendanceSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let summary = summarize_attendance(&request.attendance_records);

    info!(
        correlation_id = %correlation_id,
        total_days = summary.total_days,
        present_days = summary.present_days,
        "Attendance summarized"
    );

    json_response(StatusCode::OK, &summary)
}

/// Performs the monthly payroll calculation for one worker.
fn perform_payroll_calculation(
    request: PayrollRequest,
    config: &ConfigLoader,
) -> EngineResult<PayrollCalculation> {
    let start_time = Instant::now();
    let month: PayrollMonth = request.month.parse()?;

    let (rates, rate_step) = resolve_rates(&request, config, month)?;

    let input = PayrollInput {
        user_id: request.user_id,
        month: month.to_string(),
        hourly_rate: rates.hourly_rate,
        overtime_rate: rates.overtime_rate,
        attendance_records: request.attendance_records,
    };

    let warnings = audit_attendance(&input.attendance_records, month);
    let totals = calculate_payroll_totals(&input);

    let aggregation_step = AuditStep {
        step_number: 2,
        rule_id: "payroll_aggregation".to_string(),
        rule_name: "Payroll Aggregation".to_string(),
        input: serde_json::json!({
            "records": input.attendance_records.len(),
            "hourly_rate": input.hourly_rate,
            "overtime_rate": input.overtime_rate
        }),
        output: serde_json::json!({
            "regular_hours": totals.regular_hours,
            "overtime_hours": totals.overtime_hours,
            "total_pay": totals.total_pay,
            "work_days": totals.work_days,
            "absent_days": totals.absent_days
        }),
        reasoning: format!(
            "{} work days and {} absent days give {} regular and {} overtime hours",
            totals.work_days, totals.absent_days, totals.regular_hours, totals.overtime_hours
        ),
    };

    let salary_record = build_salary_record(&input, &totals);

    let salary_step = AuditStep {
        step_number: 3,
        rule_id: "salary_record".to_string(),
        rule_name: "Salary Record Rounding".to_string(),
        input: serde_json::json!({ "total_pay": totals.total_pay }),
        output: serde_json::json!({ "total_pay": salary_record.total_pay.to_string() }),
        reasoning: "Pay and hours rounded half away from zero to one decimal place".to_string(),
    };

    Ok(PayrollCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        user_id: input.user_id,
        month,
        rates,
        totals,
        salary_record,
        audit_trace: AuditTrace {
            steps: vec![rate_step, aggregation_step, salary_step],
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Chooses the rates for a request: explicit values first, salary rules
/// for the role otherwise.
fn resolve_rates(
    request: &PayrollRequest,
    config: &ConfigLoader,
    month: PayrollMonth,
) -> EngineResult<(AppliedRates, AuditStep)> {
    if let (Some(hourly_rate), Some(overtime_rate)) = (request.hourly_rate, request.overtime_rate) {
        let rates = AppliedRates {
            hourly_rate,
            overtime_rate,
            source: RateSource::Request,
        };
        return Ok((rates, rate_step(request, rates, "Both rates supplied by the caller")));
    }

    let role = request.role.as_deref().ok_or_else(|| EngineError::Validation {
        field: "role".to_string(),
        message: "required when hourlyRate or overtimeRate is omitted".to_string(),
    })?;

    let configured = config.get_rates(role, month.first_day())?;
    let rates = AppliedRates {
        hourly_rate: request.hourly_rate.unwrap_or(configured.hourly_rate),
        overtime_rate: request.overtime_rate.unwrap_or(configured.overtime_rate),
        source: RateSource::Config,
    };

    let reasoning = format!(
        "Missing rates taken from salary rules for '{}' effective {}",
        role,
        month.first_day()
    );
    Ok((rates, rate_step(request, rates, &reasoning)))
}

fn rate_step(request: &PayrollRequest, rates: AppliedRates, reasoning: &str) -> AuditStep {
    AuditStep {
        step_number: 1,
        rule_id: "rate_resolution".to_string(),
        rule_name: "Rate Resolution".to_string(),
        input: serde_json::json!({
            "role": request.role,
            "hourly_rate": request.hourly_rate,
            "overtime_rate": request.overtime_rate
        }),
        output: serde_json::json!({
            "hourly_rate": rates.hourly_rate,
            "overtime_rate": rates.overtime_rate,
            "source": rates.source
        }),
        reasoning: reasoning.to_string(),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    error_response(ApiErrorResponse::bad_request(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, AttendanceStatus};
    use axum::{body::Body, http::Request};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_config() -> ConfigLoader {
        ConfigLoader::load("./config/default").expect("Failed to load config")
    }

    fn make_record(day: u32, labor_hours: f64, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::new(
            format!("att_{:02}", day),
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            labor_hours,
            labor_hours * 8.0,
            status,
        )
    }

    fn create_valid_request() -> PayrollRequest {
        PayrollRequest {
            user_id: "user_001".to_string(),
            month: "2026-03".to_string(),
            role: None,
            hourly_rate: Some(15000.0),
            overtime_rate: Some(22500.0),
            attendance_records: vec![
                make_record(2, 1.0, AttendanceStatus::Present),
                make_record(3, 1.125, AttendanceStatus::Present),
                make_record(4, 0.5, AttendanceStatus::Present),
                make_record(5, 0.0, AttendanceStatus::Absent),
            ],
        }
    }

    #[test]
    fn test_perform_calculation_with_request_rates() {
        let result = perform_payroll_calculation(create_valid_request(), &create_test_config())
            .unwrap();

        assert_eq!(result.rates.source, RateSource::Request);
        assert_eq!(result.totals.total_pay, 322500.0);
        assert_eq!(result.salary_record.total_pay, Decimal::from(322500));
        assert_eq!(result.audit_trace.steps.len(), 3);
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_perform_calculation_with_role_rates() {
        let mut request = create_valid_request();
        request.role = Some("rebar_worker".to_string());
        request.hourly_rate = None;
        request.overtime_rate = None;

        let result = perform_payroll_calculation(request, &create_test_config()).unwrap();

        assert_eq!(result.rates.source, RateSource::Config);
        assert_eq!(result.rates.hourly_rate, 18000.0);
        assert_eq!(result.rates.overtime_rate, 27000.0);
        // 20 regular hours * 18000 + 1 overtime hour * 27000
        assert_eq!(result.totals.total_pay, 387000.0);
    }

    #[test]
    fn test_explicit_rate_overrides_configured_rate() {
        let mut request = create_valid_request();
        request.role = Some("general_laborer".to_string());
        request.overtime_rate = None;
        request.hourly_rate = Some(10000.0);

        let result = perform_payroll_calculation(request, &create_test_config()).unwrap();

        assert_eq!(result.rates.hourly_rate, 10000.0);
        assert_eq!(result.rates.overtime_rate, 22500.0);
        assert_eq!(result.rates.source, RateSource::Config);
    }

    #[test]
    fn test_missing_rates_without_role_is_validation_error() {
        let mut request = create_valid_request();
        request.hourly_rate = None;

        let result = perform_payroll_calculation(request, &create_test_config());

        assert!(matches!(
            result,
            Err(EngineError::Validation { ref field, .. }) if field == "role"
        ));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let mut request = create_valid_request();
        request.month = "March 2026".to_string();

        let result = perform_payroll_calculation(request, &create_test_config());

        assert!(matches!(result, Err(EngineError::InvalidMonth { .. })));
    }

    #[test]
    fn test_warnings_do_not_block_calculation() {
        let mut request = create_valid_request();
        request.attendance_records.push(AttendanceRecord::new(
            "att_apr",
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            1.0,
            8.0,
            AttendanceStatus::Present,
        ));

        let result = perform_payroll_calculation(request, &create_test_config()).unwrap();

        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "RECORD_OUTSIDE_MONTH");
        assert_eq!(result.totals.work_days, 4);
    }

    #[tokio::test]
    async fn test_valid_payroll_request_returns_200() {
        let router = create_router(AppState::new(create_test_config()));
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payroll")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PayrollCalculation = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.user_id, "user_001");
        assert_eq!(result.totals.regular_hours, 20.0);
        assert_eq!(result.totals.absent_days, 1);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(AppState::new(create_test_config()));

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/labor-hours")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }
}
