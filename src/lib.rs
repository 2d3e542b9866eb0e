//! Gongsu Engine
//!
//! This crate converts construction-site attendance into labor hours and
//! monthly payroll. A day's work is recorded as a labor-hours fraction
//! (공수), where 1.0 is one standard 8-hour workday.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
