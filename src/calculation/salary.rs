//! Salary record construction.
//!
//! Converts floating payroll totals into the decimal figures the admin
//! layer stores. Money and hours keep one decimal place, labor-hours
//! fractions three.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::{PayrollInput, PayrollTotals, SalaryRecord};

/// Decimal places kept for money and hour amounts.
pub const AMOUNT_DECIMAL_PLACES: u32 = 1;

/// Decimal places kept for labor-hours fractions (eighths need three).
pub const LABOR_HOURS_DECIMAL_PLACES: u32 = 3;

/// Rounds a floating value to `dp` places, half away from zero.
///
/// Values that have no decimal representation (NaN, infinities, out of
/// range) become zero.
///
/// ```
/// use gongsu_engine::calculation::to_rounded_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_rounded_decimal(322500.04, 1), Decimal::new(3225000, 1));
/// assert_eq!(to_rounded_decimal(0.25, 1), Decimal::new(3, 1));
/// assert_eq!(to_rounded_decimal(f64::NAN, 1), Decimal::ZERO);
/// ```
pub fn to_rounded_decimal(value: f64, dp: u32) -> Decimal {
    match Decimal::from_f64(value) {
        Some(d) => d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        None => {
            warn!(value, "Value has no decimal representation, recording 0");
            Decimal::ZERO
        }
    }
}

/// Builds the salary record for a computed month.
///
/// `total_pay` is the sum of the rounded regular and overtime pay, so the
/// stored record always adds up. A sum beyond the decimal range is recorded
/// as zero, like any other amount with no decimal representation.
pub fn build_salary_record(input: &PayrollInput, totals: &PayrollTotals) -> SalaryRecord {
    let amount = |value: f64| to_rounded_decimal(value, AMOUNT_DECIMAL_PLACES);

    let regular_pay = amount(totals.regular_pay);
    let overtime_pay = amount(totals.overtime_pay);
    let total_pay = regular_pay.checked_add(overtime_pay).unwrap_or_else(|| {
        warn!(
            user_id = %input.user_id,
            %regular_pay,
            %overtime_pay,
            "Total pay exceeds the decimal range, recording 0"
        );
        Decimal::ZERO
    });

    SalaryRecord {
        user_id: input.user_id.clone(),
        month: input.month.clone(),
        work_days: totals.work_days,
        absent_days: totals.absent_days,
        total_labor_hours: to_rounded_decimal(totals.total_labor_hours, LABOR_HOURS_DECIMAL_PLACES),
        regular_hours: amount(totals.regular_hours),
        overtime_hours: amount(totals.overtime_hours),
        hourly_rate: amount(input.hourly_rate),
        overtime_rate: amount(input.overtime_rate),
        regular_pay,
        overtime_pay,
        total_pay,
    }
}
