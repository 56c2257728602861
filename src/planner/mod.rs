//! Planner state transitions driven by user actions

mod state;

pub use state::{reduce, Action, PlannerState};
