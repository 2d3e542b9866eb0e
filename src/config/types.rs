//! Configuration types for salary rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

/// Payroll policy shared by every rate table.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollPolicy {
    /// Human-readable name of the rule set (e.g. the company or site).
    pub name: String,
    /// ISO 4217 currency code the rates are expressed in.
    pub currency: String,
    /// Overtime rate as a multiple of the hourly rate, used when a role
    /// does not set an explicit overtime rate.
    pub overtime_multiplier: f64,
}

/// Salary rule for one job role.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRate {
    /// Display name of the role.
    pub name: String,
    /// Pay per regular hour.
    pub hourly_rate: f64,
    /// Pay per overtime hour; derived from the policy multiplier when absent.
    #[serde(default)]
    pub overtime_rate: Option<f64>,
}

/// A set of role rates effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The first day these rates apply.
    pub effective_date: NaiveDate,
    /// Map of role code to its salary rule.
    pub roles: HashMap<String, RoleRate>,
}

/// The resolved rates for a role on a date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRates {
    /// Pay per regular hour.
    pub hourly_rate: f64,
    /// Pay per overtime hour.
    pub overtime_rate: f64,
}

/// The complete salary-rule configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    policy: PayrollPolicy,
    /// Rate tables by effective date (sorted oldest first).
    rates: Vec<RateTable>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(policy: PayrollPolicy, rates: Vec<RateTable>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            policy,
            rates: sorted_rates,
        }
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns all rate tables, oldest first.
    pub fn rates(&self) -> &[RateTable] {
        &self.rates
    }

    /// Returns the most recent rate table effective on or before `date`.
    pub fn rate_table_for(&self, date: NaiveDate) -> Option<&RateTable> {
        self.rates.iter().rev().find(|rt| rt.effective_date <= date)
    }
}
