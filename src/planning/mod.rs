//! Planning domain models and the pure calculators over them.

pub mod expense;
pub mod horse_cost;
pub mod occupancy;
pub mod period;
pub mod profit;
pub mod service;
pub mod snapshot;
pub mod synced;

pub use expense::{aggregate_expenses, ExpenseLine};
pub use horse_cost::{compute_horse_costs, HorseCostSummary, PerHorseCostLine};
pub use occupancy::{
    compute_occupancy, policy_for, CategoryPolicy, OccupancyCategory, OccupancySummary,
    STANDARD_CATEGORY_POLICIES,
};
pub use period::{
    to_annual, to_daily, to_monthly, to_quarterly, Period, PeriodAmount, PeriodTotals,
    DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_QUARTER, MONTHS_PER_YEAR, QUARTERS_PER_YEAR,
};
pub use profit::{
    combined_monthly_cost, manual_year_total, net_of_expenses, project_profit, ProfitProjection,
};
pub use service::{aggregate_services, ServiceLine};
pub use snapshot::{evaluate, FacilitySnapshot, FinancialReport, FinancialSummary};
pub use synced::{SyncedAmount, SyncedField};
