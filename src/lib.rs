#![doc(test(attr(deny(warnings))))]

//! Ranch Core offers the financial aggregation primitives that power the
//! ranch profitability planner: period conversion, expense aggregation,
//! boarding occupancy, service revenue, per-horse costs, and profit
//! projection.

pub mod currency;
pub mod errors;
pub mod planning;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ranch Core tracing initialized.");
    });
}
