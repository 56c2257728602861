//! Education Planner - projection engine for children's education savings
//!
//! This library provides:
//! - Inflation-adjusted projection of today's education cost
//! - Future value of existing savings and ongoing monthly savings
//! - Shortfall/surplus and the monthly investment needed to close it
//! - Input normalization and an immutable planner state machine
//! - Currency formatting and plain-text reporting for front ends

pub mod inputs;
pub mod projection;
pub mod planner;
pub mod report;

// Re-export commonly used types
pub use inputs::{CalculatorInputs, EducationGoal, InputChange, InputField};
pub use projection::{
    compute, CalculationResult, ProjectionConfig, ProjectionEngine, ValidationError,
};
pub use planner::{Action, PlannerState};
pub use report::{format_currency, Outlook, Report};
