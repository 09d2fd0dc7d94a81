use serde::{Deserialize, Serialize};

use super::{
    expense::{aggregate_expenses, ExpenseLine},
    horse_cost::{compute_horse_costs, HorseCostSummary, PerHorseCostLine},
    occupancy::{compute_occupancy, OccupancyCategory, OccupancySummary},
    period::PeriodTotals,
    profit::{combined_monthly_cost, manual_year_total, project_profit, ProfitProjection},
    service::{aggregate_services, ServiceLine},
};
use crate::errors::Result;

/// Everything one calculation pass needs, owned by the caller.
///
/// The engine holds no state between calls; the form layer rebuilds or
/// mutates this snapshot and re-evaluates it on every input change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FacilitySnapshot {
    pub total_stalls: u32,
    /// Property-level recurring costs (insurance, rent, base utilities).
    #[serde(default)]
    pub property_expenses: Vec<ExpenseLine>,
    /// Company-level recurring costs (maintenance, miscellaneous).
    #[serde(default)]
    pub company_expenses: Vec<ExpenseLine>,
    #[serde(default)]
    pub occupancy: Vec<OccupancyCategory>,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default)]
    pub per_horse_costs: Vec<PerHorseCostLine>,
    /// User-recorded actuals for the four quarters, independent of any
    /// projection.
    #[serde(default)]
    pub manual_quarterly_results: [f64; 4],
}

/// The flat headline figures the display layer renders first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub total_horses: u32,
    pub remaining_stalls: i64,
    pub monthly_income: f64,
    pub monthly_cost: f64,
    pub monthly_profit: f64,
    pub quarterly_profit: f64,
    pub annual_profit: f64,
    pub manual_year_total: f64,
}

/// Full evaluation output: every intermediate aggregate plus the headline
/// summary, so the display layer can render each section at monthly,
/// quarterly, and annual granularity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinancialReport {
    pub property_expenses: PeriodTotals,
    pub company_expenses: PeriodTotals,
    pub occupancy: OccupancySummary,
    pub services: PeriodTotals,
    pub horse_costs: HorseCostSummary,
    pub projection: ProfitProjection,
    pub summary: FinancialSummary,
}

/// Runs one full calculation pass over a snapshot.
///
/// Income is boarding revenue plus service revenue; cost is the herd-wide
/// per-horse cost plus the monthly share of both quarterly-normalized
/// expense groups. The manual year total is carried alongside the projection
/// without ever being folded into it.
pub fn evaluate(snapshot: &FacilitySnapshot) -> Result<FinancialReport> {
    let property_expenses = aggregate_expenses(&snapshot.property_expenses)?;
    let company_expenses = aggregate_expenses(&snapshot.company_expenses)?;
    let occupancy = compute_occupancy(snapshot.total_stalls, &snapshot.occupancy)?;
    let services = aggregate_services(&snapshot.services)?;
    let horse_costs = compute_horse_costs(&snapshot.per_horse_costs, occupancy.total_horses)?;

    let monthly_income = occupancy.monthly_revenue + services.monthly;
    let monthly_cost = combined_monthly_cost(
        horse_costs.facility.monthly,
        property_expenses.quarterly + company_expenses.quarterly,
    );
    let projection = project_profit(monthly_income, monthly_cost)?;
    let manual_total = manual_year_total(&snapshot.manual_quarterly_results)?;

    tracing::debug!(
        total_horses = occupancy.total_horses,
        monthly_income,
        monthly_cost,
        monthly_profit = projection.monthly_profit,
        "facility snapshot evaluated"
    );

    Ok(FinancialReport {
        property_expenses,
        company_expenses,
        occupancy,
        services,
        horse_costs,
        projection,
        summary: FinancialSummary {
            total_horses: occupancy.total_horses,
            remaining_stalls: occupancy.remaining_stalls,
            monthly_income,
            monthly_cost,
            monthly_profit: projection.monthly_profit,
            quarterly_profit: projection.quarterly_profit,
            annual_profit: projection.annual_profit,
            manual_year_total: manual_total,
        },
    })
}
