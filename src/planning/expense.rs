use serde::{Deserialize, Serialize};

use super::period::{to_quarterly, PeriodAmount, PeriodTotals};
use crate::errors::Result;

/// One named recurring facility cost (insurance, rent, base utilities).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseLine {
    pub label: String,
    pub amount: PeriodAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExpenseLine {
    pub fn new(label: impl Into<String>, amount: PeriodAmount) -> Self {
        Self {
            label: label.into(),
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Sums a set of period-tagged expense lines into one quarterly-normalized
/// total, then derives the monthly and annual views from that single figure.
///
/// An empty list is a valid zero result, not an error.
pub fn aggregate_expenses(lines: &[ExpenseLine]) -> Result<PeriodTotals> {
    let mut quarterly = 0.0;
    for line in lines {
        quarterly += to_quarterly(&line.amount)?;
    }
    Ok(PeriodTotals::from_quarterly(quarterly))
}
