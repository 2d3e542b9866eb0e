//! HTTP API module for the Gongsu Engine.
//!
//! This module provides the REST endpoints for labor-hours conversion,
//! monthly payroll and attendance summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceSummaryRequest, LaborHoursRequest, PayrollRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
