//! Projection outputs

use serde::{Deserialize, Serialize};

/// Headline numbers for one plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub years_to_goal: u32,

    /// Inflation-adjusted cost at the target age
    pub future_cost: f64,

    /// Existing savings plus monthly savings, both grown to the target age
    pub total_projected_savings: f64,

    /// future_cost - total_projected_savings; negative means a surplus
    pub shortfall: f64,

    /// Monthly amount, starting now, that alone with the existing savings
    /// funds the future cost. Replaces the planned monthly savings rather
    /// than adding to it. Never negative.
    pub required_total_monthly_investment: f64,
}

impl CalculationResult {
    pub fn is_on_track(&self) -> bool {
        self.shortfall <= 0.0
    }

    /// True when any figure overflowed to infinity or NaN
    pub fn has_non_finite(&self) -> bool {
        ![
            self.future_cost,
            self.total_projected_savings,
            self.shortfall,
            self.required_total_monthly_investment,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// How the projected savings split between sources
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsComponents {
    /// Existing savings grown to the target age
    pub fv_lump_sum: f64,

    /// Monthly savings grown to the target age
    pub fv_monthly_savings: f64,

    /// Money actually put in: current savings plus every monthly deposit
    pub total_invested: f64,

    /// Growth on top of the money put in
    pub wealth_gained: f64,
}

/// Result plus the components it was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub components: SavingsComponents,
}
