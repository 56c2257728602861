//! Immutable planner state
//!
//! Each user action produces a new state from the previous one. Editing any
//! field discards the last result and error; calculating stores either a
//! result or an error message, never both; resetting restores the
//! starting inputs.

use crate::inputs::{apply_change, CalculatorInputs, InputChange, InputLimits};
use crate::projection::{CalculationResult, ProjectionEngine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "change", rename_all = "camelCase")]
pub enum Action {
    InputChanged(InputChange),
    Calculate,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerState {
    pub inputs: CalculatorInputs,
    pub result: Option<CalculationResult>,
    pub error: Option<String>,
}

impl PlannerState {
    pub fn new(inputs: CalculatorInputs) -> Self {
        Self { inputs, result: None, error: None }
    }

    /// Apply an action using the default form limits and engine
    pub fn apply(&self, action: Action) -> Self {
        reduce(self, action, &InputLimits::default(), &ProjectionEngine::default())
    }
}

/// Compute the state that follows `action`
pub fn reduce(
    state: &PlannerState,
    action: Action,
    limits: &InputLimits,
    engine: &ProjectionEngine,
) -> PlannerState {
    match action {
        Action::InputChanged(change) => {
            PlannerState::new(apply_change(&state.inputs, change, limits))
        }
        Action::Calculate => match engine.compute(&state.inputs) {
            Ok(result) => PlannerState {
                inputs: state.inputs.clone(),
                result: Some(result),
                error: None,
            },
            Err(err) => {
                log::debug!("Calculation rejected: {err}");
                PlannerState {
                    inputs: state.inputs.clone(),
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        },
        Action::Reset => PlannerState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::EducationGoal;

    #[test]
    fn test_calculate_stores_result() {
        let state = PlannerState::default().apply(Action::Calculate);
        assert!(state.result.is_some());
        assert!(state.error.is_none());
        assert_eq!(state.inputs, CalculatorInputs::default());
    }

    #[test]
    fn test_input_change_clears_result() {
        let state = PlannerState::default()
            .apply(Action::Calculate)
            .apply(Action::InputChanged(InputChange::MonthlySavings(20_000.0)));

        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert_eq!(state.inputs.monthly_savings, 20_000.0);
    }

    #[test]
    fn test_invalid_inputs_store_error_and_clear_result() {
        let calculated = PlannerState::default().apply(Action::Calculate);
        let invalid = PlannerState {
            inputs: CalculatorInputs { current_age: 19, target_age: 18, ..Default::default() },
            ..calculated
        };

        let state = invalid.apply(Action::Calculate);
        assert!(state.result.is_none());
        let message = state.error.expect("error recorded");
        assert!(message.starts_with("target age must exceed current age"));
    }

    #[test]
    fn test_goal_change_flows_through_normalization() {
        let state = PlannerState::default()
            .apply(Action::InputChanged(InputChange::EducationGoal(EducationGoal::PostGraduation)));
        assert_eq!(state.inputs.target_age, 22);

        let state = state.apply(Action::InputChanged(InputChange::CurrentAge(20)));
        assert_eq!(state.inputs.target_age, 22);

        let state = PlannerState::default()
            .apply(Action::InputChanged(InputChange::CurrentAge(20)));
        assert_eq!(state.inputs.target_age, 21);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let state = PlannerState::default()
            .apply(Action::InputChanged(InputChange::CurrentCost(42.0)))
            .apply(Action::Calculate)
            .apply(Action::Reset);
        assert_eq!(state, PlannerState::default());
    }

    #[test]
    fn test_previous_state_untouched() {
        let before = PlannerState::default();
        let _after = before.apply(Action::InputChanged(InputChange::ReturnRate(12.0)));
        assert_eq!(before.inputs.return_rate, 10.0);
    }
}
