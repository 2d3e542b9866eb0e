//! Error types for the Gongsu Engine.
//!
//! The labor-hours and payroll calculators never fail; these errors belong
//! to the layers around them (configuration loading, rate lookup, request
//! validation).

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Gongsu Engine.
///
/// # Example
///
/// ```
/// use gongsu_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No salary rule was found for the given role and date.
    #[error("Rate not found for role '{role}' on date {date}")]
    RateNotFound {
        /// The job role that was looked up.
        role: String,
        /// The date for which the rate was requested.
        date: NaiveDate,
    },

    /// A payroll month was not in `YYYY-MM` form.
    #[error("Invalid payroll month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected value.
        value: String,
    },

    /// A request field was missing or inconsistent.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
