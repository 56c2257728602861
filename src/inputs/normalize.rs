//! Field coupling between inputs
//!
//! Editing one field can force another to change: picking a preset goal
//! moves the target age, and growing the child's current age past the
//! target pushes the target one year beyond it. These rules are applied
//! after every edit and never touch the projection itself.

use super::{CalculatorInputs, InputChange, InputField, InputLimits};

/// Re-establish the coupling rules after `changed` was edited
pub fn normalize(inputs: &CalculatorInputs, changed: InputField) -> CalculatorInputs {
    let mut next = inputs.clone();

    match changed {
        InputField::EducationGoal => {
            if let Some(age) = next.education_goal.default_target_age() {
                next.target_age = age;
            }
        }
        InputField::CurrentAge => {
            if next.target_age <= next.current_age {
                next.target_age = next.current_age.saturating_add(1);
            }
        }
        _ => {}
    }

    next
}

/// Write one field, clamping it the way the form controls do, then normalize
pub fn apply_change(
    inputs: &CalculatorInputs,
    change: InputChange,
    limits: &InputLimits,
) -> CalculatorInputs {
    let mut next = inputs.clone();

    match change {
        InputChange::YourAge(age) => next.your_age = limits.your_age.clamp_u32(age),
        InputChange::CurrentAge(age) => next.current_age = limits.current_age.clamp_u32(age),
        InputChange::EducationGoal(goal) => next.education_goal = goal,
        InputChange::TargetAge(age) => {
            next.target_age = limits.target_age(next.current_age).clamp_u32(age);
        }
        InputChange::CurrentCost(amount) => next.current_cost = non_negative(amount),
        InputChange::InflationRate(rate) => next.inflation_rate = limits.inflation_rate.clamp(rate),
        InputChange::CurrentSavings(amount) => next.current_savings = non_negative(amount),
        InputChange::MonthlySavings(amount) => next.monthly_savings = non_negative(amount),
        InputChange::ReturnRate(rate) => next.return_rate = limits.return_rate.clamp(rate),
    }

    normalize(&next, change.field())
}

fn non_negative(amount: f64) -> f64 {
    if amount.is_nan() || amount < 0.0 {
        0.0
    } else {
        amount
    }
}
