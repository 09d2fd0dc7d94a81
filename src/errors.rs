use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the planning calculators.
///
/// Every failure is an input-validation failure: the call is rejected whole,
/// no partial result is returned, and the caller recovers by correcting the
/// offending value.
#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, PlanningError>;

/// Rejects negative or non-finite currency amounts at a calculator boundary.
pub(crate) fn check_amount(context: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(PlanningError::InvalidInput(format!(
            "{} must be a finite amount, got {}",
            context, value
        )));
    }
    if value < 0.0 {
        return Err(PlanningError::InvalidInput(format!(
            "{} must be non-negative, got {}",
            context, value
        )));
    }
    Ok(value)
}
