//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary rules
//! from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, PayRates, PayrollPolicy, RateTable};

/// Loads and provides access to salary-rule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml          # Payroll policy
/// └── rates/
///     └── 2026-01-01.yaml  # Role rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use gongsu_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let rates = loader.get_rates("general_laborer", date).unwrap();
/// println!("Hourly: {} / overtime: {}", rates.hourly_rate, rates.overtime_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `engine.yaml` or the `rates` directory is
    /// missing, if any file contains invalid YAML, or if no rate files
    /// are found.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PayrollPolicy>(&path.join("engine.yaml"))?;
        let rates = Self::load_rates(&path.join("rates"))?;

        debug!(
            path = %path.display(),
            rate_tables = rates.len(),
            "Loaded salary rules"
        );

        Ok(Self::from_config(EngineConfig::new(policy, rates)))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<RateTable>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        self.config.policy()
    }

    /// Gets the pay rates for a role on a given date.
    ///
    /// Uses the most recent rate table effective on or before `date`. A
    /// role without an explicit overtime rate gets
    /// `hourly_rate * overtime_multiplier`.
    ///
    /// Returns `RateNotFound` if no table is effective yet or the role is
    /// not in it.
    pub fn get_rates(&self, role: &str, date: NaiveDate) -> EngineResult<PayRates> {
        let not_found = || EngineError::RateNotFound {
            role: role.to_string(),
            date,
        };

        let role_rate = self
            .config
            .rate_table_for(date)
            .and_then(|table| table.roles.get(role))
            .ok_or_else(not_found)?;

        let overtime_rate = role_rate
            .overtime_rate
            .unwrap_or(role_rate.hourly_rate * self.policy().overtime_multiplier);

        Ok(PayRates {
            hourly_rate: role_rate.hourly_rate,
            overtime_rate,
        })
    }
}
