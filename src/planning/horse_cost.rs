use serde::{Deserialize, Serialize};

use super::period::{PeriodTotals, DAYS_PER_MONTH, MONTHS_PER_YEAR};
use crate::errors::{check_amount, PlanningError, Result};

/// One recurring cost incurred per boarded horse per month (feed, bedding,
/// water, electricity, waste disposal).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerHorseCostLine {
    pub name: String,
    pub monthly_amount: f64,
}

impl PerHorseCostLine {
    pub fn new(name: impl Into<String>, monthly_amount: f64) -> Self {
        Self {
            name: name.into(),
            monthly_amount,
        }
    }

    /// Derives the feed line from a bale price spread over the horses one
    /// bale feeds in a month. The divisor must be at least one.
    pub fn feed(price_per_bale: f64, horses_fed_per_month: u32) -> Result<Self> {
        check_amount("price per bale", price_per_bale)?;
        if horses_fed_per_month == 0 {
            return Err(PlanningError::InvalidInput(
                "horses fed per month must be at least 1".to_string(),
            ));
        }
        Ok(Self::new(
            "Feed",
            price_per_bale / horses_fed_per_month as f64,
        ))
    }

    /// Per-day view of this line, through the 30-day month.
    pub fn daily_amount(&self) -> f64 {
        self.monthly_amount / DAYS_PER_MONTH
    }

    /// Per-year view of this line.
    pub fn yearly_amount(&self) -> f64 {
        self.monthly_amount * MONTHS_PER_YEAR
    }
}

/// Per-horse and facility-wide cost totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct HorseCostSummary {
    pub per_horse_monthly: f64,
    pub facility: PeriodTotals,
}

/// Sums the per-horse monthly cost components and scales them across the
/// whole herd.
pub fn compute_horse_costs(
    lines: &[PerHorseCostLine],
    total_horses: u32,
) -> Result<HorseCostSummary> {
    let mut per_horse_monthly = 0.0;
    for line in lines {
        check_amount(&format!("monthly amount for {}", line.name), line.monthly_amount)?;
        per_horse_monthly += line.monthly_amount;
    }
    let facility_monthly = per_horse_monthly * total_horses as f64;
    Ok(HorseCostSummary {
        per_horse_monthly,
        facility: PeriodTotals::from_monthly(facility_monthly),
    })
}
