use serde::{Deserialize, Serialize};

use super::period::{MONTHS_PER_QUARTER, MONTHS_PER_YEAR};
use crate::errors::{check_amount, Result};

/// Projected profit at the three planning horizons. The quarterly and annual
/// figures are straight multiples of the monthly one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfitProjection {
    pub monthly_profit: f64,
    pub quarterly_profit: f64,
    pub annual_profit: f64,
}

/// Projects monthly income against monthly cost. Income and cost must each be
/// non-negative; the resulting profit may be negative.
pub fn project_profit(monthly_income: f64, monthly_cost: f64) -> Result<ProfitProjection> {
    check_amount("monthly income", monthly_income)?;
    check_amount("monthly cost", monthly_cost)?;
    let monthly_profit = monthly_income - monthly_cost;
    Ok(ProfitProjection {
        monthly_profit,
        quarterly_profit: monthly_profit * MONTHS_PER_QUARTER,
        annual_profit: monthly_profit * MONTHS_PER_YEAR,
    })
}

/// Canonical monthly cost composition: the herd-wide per-horse cost plus the
/// monthly share of the quarterly-normalized facility expenses.
pub fn combined_monthly_cost(per_horse_facility_monthly: f64, expense_quarterly_total: f64) -> f64 {
    per_horse_facility_monthly + expense_quarterly_total / MONTHS_PER_QUARTER
}

/// Sums four user-recorded quarterly results into a year-end total.
///
/// This is an actuals reconciliation figure, independent of the projection;
/// the two are surfaced side by side and never combined automatically.
pub fn manual_year_total(results: &[f64; 4]) -> Result<f64> {
    let mut total = 0.0;
    for (index, result) in results.iter().enumerate() {
        check_amount(&format!("quarter {} result", index + 1), *result)?;
        total += result;
    }
    Ok(total)
}

/// Optional reconciliation: the manual year total net of a separately
/// annualized expense total. Only applied when the caller asks for it.
pub fn net_of_expenses(manual_year_total: f64, annual_expense_total: f64) -> f64 {
    manual_year_total - annual_expense_total
}
