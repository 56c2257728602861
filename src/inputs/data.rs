//! Input data structures for a single education plan

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Education milestone the family is saving for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationGoal {
    /// Higher education, child aged 18
    #[default]
    #[serde(rename = "18")]
    HigherEducation,
    /// Post-graduation, child aged 22
    #[serde(rename = "22")]
    PostGraduation,
    /// User-entered target age
    #[serde(rename = "other")]
    Other,
}

impl EducationGoal {
    /// Target age implied by the goal, `None` for a user-entered age
    pub fn default_target_age(self) -> Option<u32> {
        match self {
            EducationGoal::HigherEducation => Some(18),
            EducationGoal::PostGraduation => Some(22),
            EducationGoal::Other => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationGoal::HigherEducation => "Higher Education (Age 18)",
            EducationGoal::PostGraduation => "Post-Graduation (Age 22)",
            EducationGoal::Other => "Other",
        }
    }
}

impl fmt::Display for EducationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            EducationGoal::HigherEducation => "18",
            EducationGoal::PostGraduation => "22",
            EducationGoal::Other => "other",
        };
        f.write_str(code)
    }
}

impl FromStr for EducationGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "18" | "higher" | "higher-education" => Ok(EducationGoal::HigherEducation),
            "22" | "post" | "post-graduation" => Ok(EducationGoal::PostGraduation),
            "other" => Ok(EducationGoal::Other),
            other => Err(format!("unknown education goal '{other}' (expected 18, 22 or other)")),
        }
    }
}

/// Everything the projection engine needs for one plan
///
/// Rates are in percent per year (8.0 = 8%). Currency amounts are in
/// today's rupees. Missing keys in a JSON document fall back to the
/// planner's starting values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    /// Parent's age; shown on the form, not used by the projection
    #[serde(default = "default_your_age")]
    pub your_age: u32,

    /// Child's current age in years
    #[serde(default = "default_current_age")]
    pub current_age: u32,

    #[serde(default)]
    pub education_goal: EducationGoal,

    /// Child's age when the money is needed
    #[serde(default = "default_target_age")]
    pub target_age: u32,

    /// Cost of the education at today's prices
    #[serde(default = "default_current_cost")]
    pub current_cost: f64,

    /// Expected annual education inflation (percent)
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Savings already put aside for this goal
    #[serde(default = "default_current_savings")]
    pub current_savings: f64,

    /// Amount saved every month from now until the goal
    #[serde(default = "default_monthly_savings")]
    pub monthly_savings: f64,

    /// Expected annual investment return (percent)
    #[serde(default = "default_return_rate")]
    pub return_rate: f64,
}

fn default_your_age() -> u32 { 30 }
fn default_current_age() -> u32 { 5 }
fn default_target_age() -> u32 { 18 }
fn default_current_cost() -> f64 { 2_000_000.0 }
fn default_inflation_rate() -> f64 { 8.0 }
fn default_current_savings() -> f64 { 500_000.0 }
fn default_monthly_savings() -> f64 { 15_000.0 }
fn default_return_rate() -> f64 { 10.0 }

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            your_age: default_your_age(),
            current_age: default_current_age(),
            education_goal: EducationGoal::HigherEducation,
            target_age: default_target_age(),
            current_cost: default_current_cost(),
            inflation_rate: default_inflation_rate(),
            current_savings: default_current_savings(),
            monthly_savings: default_monthly_savings(),
            return_rate: default_return_rate(),
        }
    }
}

/// Identifies an input field; used to drive normalization after an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    YourAge,
    CurrentAge,
    EducationGoal,
    TargetAge,
    CurrentCost,
    InflationRate,
    CurrentSavings,
    MonthlySavings,
    ReturnRate,
}

/// A single edit to one input field, carrying the new value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum InputChange {
    YourAge(u32),
    CurrentAge(u32),
    EducationGoal(EducationGoal),
    TargetAge(u32),
    CurrentCost(f64),
    InflationRate(f64),
    CurrentSavings(f64),
    MonthlySavings(f64),
    ReturnRate(f64),
}

impl InputChange {
    pub fn field(&self) -> InputField {
        match self {
            InputChange::YourAge(_) => InputField::YourAge,
            InputChange::CurrentAge(_) => InputField::CurrentAge,
            InputChange::EducationGoal(_) => InputField::EducationGoal,
            InputChange::TargetAge(_) => InputField::TargetAge,
            InputChange::CurrentCost(_) => InputField::CurrentCost,
            InputChange::InflationRate(_) => InputField::InflationRate,
            InputChange::CurrentSavings(_) => InputField::CurrentSavings,
            InputChange::MonthlySavings(_) => InputField::MonthlySavings,
            InputChange::ReturnRate(_) => InputField::ReturnRate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_planner_start() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.current_age, 5);
        assert_eq!(inputs.target_age, 18);
        assert_eq!(inputs.education_goal, EducationGoal::HigherEducation);
        assert_eq!(EducationGoal::default(), EducationGoal::HigherEducation);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let inputs: CalculatorInputs =
            serde_json::from_str(r#"{"currentAge": 2, "educationGoal": "22", "targetAge": 22}"#)
                .expect("valid json");
        assert_eq!(inputs.current_age, 2);
        assert_eq!(inputs.target_age, 22);
        assert_eq!(inputs.education_goal, EducationGoal::PostGraduation);
        assert_eq!(inputs.current_cost, 2_000_000.0);
        assert_eq!(inputs.return_rate, 10.0);
    }

    #[test]
    fn test_goal_parsing() {
        assert_eq!("18".parse::<EducationGoal>(), Ok(EducationGoal::HigherEducation));
        assert_eq!("22".parse::<EducationGoal>(), Ok(EducationGoal::PostGraduation));
        assert_eq!("Other".parse::<EducationGoal>(), Ok(EducationGoal::Other));
        assert!("25".parse::<EducationGoal>().is_err());
        assert_eq!(EducationGoal::Other.default_target_age(), None);
    }

    #[test]
    fn test_change_serializes_with_field_tag() {
        let change = InputChange::MonthlySavings(2500.0);
        let json = serde_json::to_string(&change).expect("serialize");
        assert_eq!(json, r#"{"field":"monthlySavings","value":2500.0}"#);
        assert_eq!(change.field(), InputField::MonthlySavings);
    }
}
