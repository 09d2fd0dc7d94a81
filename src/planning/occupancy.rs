use serde::{Deserialize, Serialize};

use crate::errors::{check_amount, Result};

/// Stall and revenue policy for one horse class.
///
/// The flags are data, not branching logic: adding a category means adding a
/// row, and every calculator reads the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPolicy {
    pub name: &'static str,
    pub occupies_stall: bool,
    pub generates_revenue: bool,
}

/// The fixed policy table for the standard horse classes.
///
/// Company horses take a stall but never pay; open-barn and hotel horses pay
/// without taking a stall; every class counts toward the census.
pub const STANDARD_CATEGORY_POLICIES: &[CategoryPolicy] = &[
    CategoryPolicy {
        name: "Fullboard Training",
        occupies_stall: true,
        generates_revenue: true,
    },
    CategoryPolicy {
        name: "Half Board",
        occupies_stall: true,
        generates_revenue: true,
    },
    CategoryPolicy {
        name: "Retirement/Recovery",
        occupies_stall: true,
        generates_revenue: true,
    },
    CategoryPolicy {
        name: "Company Horses",
        occupies_stall: true,
        generates_revenue: false,
    },
    CategoryPolicy {
        name: "Open Barn",
        occupies_stall: false,
        generates_revenue: true,
    },
    CategoryPolicy {
        name: "Horse Hotel",
        occupies_stall: false,
        generates_revenue: true,
    },
];

/// Looks up a standard policy row by its display name.
pub fn policy_for(name: &str) -> Option<&'static CategoryPolicy> {
    STANDARD_CATEGORY_POLICIES
        .iter()
        .find(|policy| policy.name.eq_ignore_ascii_case(name))
}

/// One horse class with its head count and effective monthly price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccupancyCategory {
    pub name: String,
    pub count: u32,
    pub monthly_price: f64,
    pub occupies_stall: bool,
    pub generates_revenue: bool,
}

impl OccupancyCategory {
    /// Builds a category from a policy row with the given count and price.
    pub fn from_policy(policy: &CategoryPolicy, count: u32, monthly_price: f64) -> Self {
        Self {
            name: policy.name.to_string(),
            count,
            monthly_price,
            occupies_stall: policy.occupies_stall,
            generates_revenue: policy.generates_revenue,
        }
    }

    /// Hotel-style guest stays bill per night; the nightly rate folded across
    /// the expected nights becomes the category's effective monthly price.
    pub fn hotel(count: u32, nightly_price: f64, nights_per_month: u32) -> Self {
        Self {
            name: "Horse Hotel".to_string(),
            count,
            monthly_price: nightly_price * nights_per_month as f64,
            occupies_stall: false,
            generates_revenue: true,
        }
    }
}

/// Census, capacity, and boarding revenue for one facility state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct OccupancySummary {
    pub total_horses: u32,
    /// Negative when the stall-occupying classes overbook the facility. Left
    /// unclamped so the caller can surface the overbooking.
    pub remaining_stalls: i64,
    pub monthly_revenue: f64,
}

/// Computes the herd census, remaining stall capacity, and monthly boarding
/// revenue across all categories.
pub fn compute_occupancy(
    total_stalls: u32,
    categories: &[OccupancyCategory],
) -> Result<OccupancySummary> {
    let mut total_horses: u32 = 0;
    let mut occupied: i64 = 0;
    let mut monthly_revenue = 0.0;
    for category in categories {
        check_amount(&format!("monthly price for {}", category.name), category.monthly_price)?;
        total_horses += category.count;
        if category.occupies_stall {
            occupied += category.count as i64;
        }
        if category.generates_revenue {
            monthly_revenue += category.count as f64 * category.monthly_price;
        }
    }
    Ok(OccupancySummary {
        total_horses,
        remaining_stalls: total_stalls as i64 - occupied,
        monthly_revenue,
    })
}
