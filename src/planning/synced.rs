use serde::{Deserialize, Serialize};

use super::period::{DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR};
use crate::errors::{check_amount, Result};

/// Which of the three mutually derived fields the user edited last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SyncedField {
    Daily,
    Monthly,
    Yearly,
}

/// A daily/monthly/yearly amount triple kept in sync by last-edited-wins.
///
/// Exactly one field is authoritative per update; the other two are derived
/// from it through the fixed 30-day month and 365-day year constants. The
/// edited field is never recomputed from itself, so repeated edits of the
/// same field cannot drift.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SyncedAmount {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl SyncedAmount {
    /// Applies one user edit and recomputes the two derived fields.
    pub fn set(&mut self, field: SyncedField, value: f64) -> Result<()> {
        check_amount("synced amount", value)?;
        match field {
            SyncedField::Daily => {
                self.daily = value;
                self.monthly = value * DAYS_PER_MONTH;
                self.yearly = value * DAYS_PER_YEAR;
            }
            SyncedField::Monthly => {
                self.monthly = value;
                self.daily = value / DAYS_PER_MONTH;
                self.yearly = value * MONTHS_PER_YEAR;
            }
            SyncedField::Yearly => {
                self.yearly = value;
                self.daily = value / DAYS_PER_YEAR;
                self.monthly = value / MONTHS_PER_YEAR;
            }
        }
        Ok(())
    }
}
