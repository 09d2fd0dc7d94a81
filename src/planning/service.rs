use serde::{Deserialize, Serialize};

use super::period::PeriodTotals;
use crate::errors::{check_amount, Result};

/// One paid ancillary service, counted per month (lessons, rides, guest
/// activities).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceLine {
    pub name: String,
    pub count: u32,
    pub unit_price: f64,
}

impl ServiceLine {
    pub fn new(name: impl Into<String>, count: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            count,
            unit_price,
        }
    }
}

/// Sums count × unit price across the service list into a monthly total and
/// derives the quarterly and annual views from it.
pub fn aggregate_services(services: &[ServiceLine]) -> Result<PeriodTotals> {
    let mut monthly = 0.0;
    for service in services {
        check_amount(&format!("unit price for {}", service.name), service.unit_price)?;
        monthly += service.count as f64 * service.unit_price;
    }
    Ok(PeriodTotals::from_monthly(monthly))
}
