//! Salary-rule configuration for the Gongsu Engine.
//!
//! This module loads per-role hourly and overtime rates from YAML files,
//! versioned by effective date, along with the payroll policy.
//!
//! # Example
//!
//! ```no_run
//! use gongsu_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded salary rules: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, PayRates, PayrollPolicy, RateTable, RoleRate};
