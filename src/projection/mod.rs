//! Projection engine for education cost and savings

mod error;
mod engine;
mod result;
mod schedule;

pub use error::ValidationError;
pub use engine::{compute, LumpSumCompounding, ProjectionConfig, ProjectionEngine};
pub use result::{CalculationResult, Projection, SavingsComponents};
pub use schedule::ScheduleRow;

// ============================================================================
// Period conventions
// ============================================================================
// Rates are entered as annual percentages. Monthly savings compound at the
// annual rate divided by 12; existing savings and costs compound yearly.

/// Number of monthly contributions per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert a percentage (8.0) into a fraction (0.08)
pub(crate) fn pct(rate: f64) -> f64 {
    rate / 100.0
}
