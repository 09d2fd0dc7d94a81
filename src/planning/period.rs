use serde::{Deserialize, Serialize};

use crate::errors::{check_amount, Result};

/// Fixed calendar ratios used by every conversion. Daily amounts always go
/// through the 30-day month or the 365-day year, never through a quarter.
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_QUARTER: f64 = 3.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const QUARTERS_PER_YEAR: f64 = 4.0;

/// Billing period a raw input value is tagged with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Period {
    Daily,
    Monthly,
    Quarterly,
    Annual,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
            Period::Quarterly => "Quarterly",
            Period::Annual => "Annual",
        }
    }
}

/// A non-negative currency value tagged with its source period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodAmount {
    pub value: f64,
    pub period: Period,
}

impl PeriodAmount {
    /// Creates a validated amount; negative or non-finite values are rejected.
    pub fn new(value: f64, period: Period) -> Result<Self> {
        check_amount("period amount", value)?;
        Ok(Self { value, period })
    }

    pub fn daily(value: f64) -> Result<Self> {
        Self::new(value, Period::Daily)
    }

    pub fn monthly(value: f64) -> Result<Self> {
        Self::new(value, Period::Monthly)
    }

    pub fn quarterly(value: f64) -> Result<Self> {
        Self::new(value, Period::Quarterly)
    }

    pub fn annual(value: f64) -> Result<Self> {
        Self::new(value, Period::Annual)
    }
}

/// Converts an amount to its per-day equivalent.
pub fn to_daily(amount: &PeriodAmount) -> Result<f64> {
    let value = check_amount("period amount", amount.value)?;
    Ok(match amount.period {
        Period::Daily => value,
        Period::Monthly => value / DAYS_PER_MONTH,
        Period::Quarterly => value / MONTHS_PER_QUARTER / DAYS_PER_MONTH,
        Period::Annual => value / DAYS_PER_YEAR,
    })
}

/// Converts an amount to its per-month equivalent.
pub fn to_monthly(amount: &PeriodAmount) -> Result<f64> {
    let value = check_amount("period amount", amount.value)?;
    Ok(match amount.period {
        Period::Daily => value * DAYS_PER_MONTH,
        Period::Monthly => value,
        Period::Quarterly => value / MONTHS_PER_QUARTER,
        Period::Annual => value / MONTHS_PER_YEAR,
    })
}

/// Converts an amount to its per-quarter equivalent. Daily values pass
/// through the 30-day month first.
pub fn to_quarterly(amount: &PeriodAmount) -> Result<f64> {
    let value = check_amount("period amount", amount.value)?;
    Ok(match amount.period {
        Period::Daily => value * DAYS_PER_MONTH * MONTHS_PER_QUARTER,
        Period::Monthly => value * MONTHS_PER_QUARTER,
        Period::Quarterly => value,
        Period::Annual => value / QUARTERS_PER_YEAR,
    })
}

/// Converts an amount to its per-year equivalent. Daily values use the
/// 365-day year.
pub fn to_annual(amount: &PeriodAmount) -> Result<f64> {
    let value = check_amount("period amount", amount.value)?;
    Ok(match amount.period {
        Period::Daily => value * DAYS_PER_YEAR,
        Period::Monthly => value * MONTHS_PER_YEAR,
        Period::Quarterly => value * QUARTERS_PER_YEAR,
        Period::Annual => value,
    })
}

/// Monthly/quarterly/annual view of one aggregated stream.
///
/// Always built from a single basis value so the three figures never drift
/// apart through independent rounding.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodTotals {
    pub monthly: f64,
    pub quarterly: f64,
    pub annual: f64,
}

impl PeriodTotals {
    /// Derives monthly and annual figures from one quarterly total.
    pub fn from_quarterly(quarterly: f64) -> Self {
        Self {
            monthly: quarterly / MONTHS_PER_QUARTER,
            quarterly,
            annual: quarterly * QUARTERS_PER_YEAR,
        }
    }

    /// Derives quarterly and annual figures from one monthly total.
    pub fn from_monthly(monthly: f64) -> Self {
        Self {
            monthly,
            quarterly: monthly * MONTHS_PER_QUARTER,
            annual: monthly * MONTHS_PER_YEAR,
        }
    }
}
