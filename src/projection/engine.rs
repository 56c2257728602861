//! Closed-form projection of education cost and savings

use super::result::{CalculationResult, Projection, SavingsComponents};
use super::schedule::{self, ScheduleRow};
use super::{pct, ValidationError, MONTHS_PER_YEAR};
use crate::inputs::CalculatorInputs;
use serde::{Deserialize, Serialize};

/// How existing savings are grown when solving for the required monthly
/// investment.
///
/// The headline projection always grows existing savings yearly at the
/// annual rate. The required-investment solve has historically grown them
/// monthly at annual/12 over the same horizon, which gives a slightly
/// larger value whenever the rate is positive. `Monthly` keeps that
/// behavior; `Annual` makes both calculations agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LumpSumCompounding {
    Monthly,
    Annual,
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    #[serde(default = "default_compounding")]
    pub lump_sum_compounding: LumpSumCompounding,
}

fn default_compounding() -> LumpSumCompounding { LumpSumCompounding::Monthly }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            lump_sum_compounding: default_compounding(),
        }
    }
}

/// Rates and horizon derived from validated inputs
#[derive(Debug, Clone, Copy)]
struct Horizon {
    years: u32,
    months: f64,
    annual_return: f64,
    monthly_return: f64,
    inflation: f64,
}

impl Horizon {
    fn from_inputs(inputs: &CalculatorInputs) -> Result<Self, ValidationError> {
        if inputs.target_age <= inputs.current_age {
            return Err(ValidationError::TargetNotAfterCurrent {
                current_age: inputs.current_age,
                target_age: inputs.target_age,
            });
        }

        let years = inputs.target_age - inputs.current_age;
        let annual_return = pct(inputs.return_rate);
        Ok(Self {
            years,
            months: f64::from(years) * f64::from(MONTHS_PER_YEAR),
            annual_return,
            monthly_return: annual_return / f64::from(MONTHS_PER_YEAR),
            inflation: pct(inputs.inflation_rate),
        })
    }
}

/// Compound growth factor `(1 + rate)^periods`
pub(crate) fn growth_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}

/// Future value of 1 paid at the end of each of `periods` months.
///
/// Falls back to a plain sum of deposits when the rate is not positive or
/// too small to register in `1 + rate`.
pub(crate) fn annuity_factor(monthly_rate: f64, periods: f64) -> f64 {
    if periods > 0.0 && monthly_rate > 0.0 {
        let growth = growth_factor(monthly_rate, periods) - 1.0;
        if growth > 0.0 {
            return growth / monthly_rate;
        }
    }
    periods
}

/// Projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project one plan. Fails only when the target age does not come
    /// after the child's current age.
    pub fn compute(&self, inputs: &CalculatorInputs) -> Result<CalculationResult, ValidationError> {
        self.project(inputs).map(|projection| projection.result)
    }

    /// Project one plan, keeping the savings components
    pub fn project(&self, inputs: &CalculatorInputs) -> Result<Projection, ValidationError> {
        let h = Horizon::from_inputs(inputs)?;

        log::debug!(
            "Projecting {} years ({} months): inflation {:.4}, annual return {:.4}",
            h.years, h.months, h.inflation, h.annual_return
        );

        let future_cost = inputs.current_cost * growth_factor(h.inflation, f64::from(h.years));

        // Existing savings grow yearly; monthly savings grow as an annuity
        let fv_lump_sum = inputs.current_savings * growth_factor(h.annual_return, f64::from(h.years));
        let fv_monthly_savings =
            inputs.monthly_savings * annuity_factor(h.monthly_return, h.months);

        let total_projected_savings = fv_lump_sum + fv_monthly_savings;
        let shortfall = future_cost - total_projected_savings;

        let required = self.required_monthly_investment(inputs, &h, future_cost);

        let result = CalculationResult {
            years_to_goal: h.years,
            future_cost,
            total_projected_savings,
            shortfall,
            required_total_monthly_investment: required.max(0.0),
        };

        if result.has_non_finite() {
            log::warn!(
                "Projection overflowed over {} years: future cost {}, savings {}",
                h.years, future_cost, total_projected_savings
            );
        }

        let total_invested =
            inputs.current_savings + inputs.monthly_savings * h.months;
        let components = SavingsComponents {
            fv_lump_sum,
            fv_monthly_savings,
            total_invested,
            wealth_gained: total_projected_savings - total_invested,
        };

        Ok(Projection { result, components })
    }

    /// Year-by-year growth path from next year up to the target age.
    /// Rows are produced lazily, so long horizons can be streamed.
    pub fn schedule<'a>(
        &self,
        inputs: &'a CalculatorInputs,
    ) -> Result<impl Iterator<Item = ScheduleRow> + 'a, ValidationError> {
        let h = Horizon::from_inputs(inputs)?;
        Ok(schedule::rows(inputs, h.years, h.inflation, h.annual_return))
    }

    /// Monthly contribution that, on top of the existing savings, exactly
    /// funds `future_cost`
    fn required_monthly_investment(
        &self,
        inputs: &CalculatorInputs,
        h: &Horizon,
        future_cost: f64,
    ) -> f64 {
        let lump_sum_at_goal = match self.config.lump_sum_compounding {
            LumpSumCompounding::Monthly => {
                inputs.current_savings * growth_factor(h.monthly_return, h.months)
            }
            LumpSumCompounding::Annual => {
                inputs.current_savings * growth_factor(h.annual_return, f64::from(h.years))
            }
        };
        let needed_from_deposits = future_cost - lump_sum_at_goal;

        if needed_from_deposits > 0.0 {
            needed_from_deposits / annuity_factor(h.monthly_return, h.months)
        } else {
            0.0
        }
    }
}

/// Project one plan with the default configuration
pub fn compute(inputs: &CalculatorInputs) -> Result<CalculationResult, ValidationError> {
    ProjectionEngine::default().compute(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_a() -> CalculatorInputs {
        CalculatorInputs::default()
    }

    #[test]
    fn test_scenario_a() {
        let engine = ProjectionEngine::default();
        let projection = engine.project(&scenario_a()).expect("valid inputs");
        let r = projection.result;

        assert_eq!(r.years_to_goal, 13);
        assert_relative_eq!(r.future_cost, 2_000_000.0 * 1.08_f64.powi(13), max_relative = 1e-12);
        assert_relative_eq!(r.future_cost, 5_439_247.452329, max_relative = 1e-9);
        assert_relative_eq!(projection.components.fv_lump_sum, 1_726_135.607197, max_relative = 1e-9);
        assert_relative_eq!(projection.components.fv_monthly_savings, 4_769_251.532379, max_relative = 1e-9);
        assert_relative_eq!(r.total_projected_savings, 6_495_387.139575, max_relative = 1e-9);
        assert_relative_eq!(r.shortfall, -1_056_139.687246, max_relative = 1e-9);
        assert_relative_eq!(r.required_total_monthly_investment, 11_367.995593, max_relative = 1e-9);
        assert!(r.is_on_track());
    }

    #[test]
    fn test_annual_compounding_option() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            lump_sum_compounding: LumpSumCompounding::Annual,
        });
        let r = engine.compute(&scenario_a()).expect("valid inputs");

        // Headline figures do not depend on the option
        let default = compute(&scenario_a()).expect("valid inputs");
        assert_eq!(r.future_cost, default.future_cost);
        assert_eq!(r.shortfall, default.shortfall);

        // Yearly growth of existing savings is smaller, so more is needed monthly
        assert_relative_eq!(r.required_total_monthly_investment, 11_678.284800, max_relative = 1e-9);
        assert!(r.required_total_monthly_investment > default.required_total_monthly_investment);
    }

    #[test]
    fn test_validation() {
        let inputs = CalculatorInputs { current_age: 10, target_age: 10, ..Default::default() };
        let err = compute(&inputs).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TargetNotAfterCurrent { current_age: 10, target_age: 10 }
        );
        assert!(err.to_string().starts_with("target age must exceed current age"));

        let inputs = CalculatorInputs { current_age: 12, target_age: 4, ..Default::default() };
        assert!(compute(&inputs).is_err());
        assert!(ProjectionEngine::default().schedule(&inputs).is_err());
    }

    #[test]
    fn test_lump_sum_covers_cost() {
        let inputs = CalculatorInputs {
            current_cost: 100_000.0,
            current_savings: 1_000_000.0,
            monthly_savings: 0.0,
            ..Default::default()
        };
        let r = compute(&inputs).expect("valid inputs");
        assert_eq!(r.required_total_monthly_investment, 0.0);
        assert!(r.shortfall < 0.0);
    }

    #[test]
    fn test_negative_return_uses_plain_sum() {
        let inputs = CalculatorInputs {
            current_age: 8,
            target_age: 18,
            current_cost: 500_000.0,
            inflation_rate: 5.0,
            current_savings: 0.0,
            monthly_savings: 1_000.0,
            return_rate: -4.0,
            ..Default::default()
        };
        let r = compute(&inputs).expect("valid inputs");
        assert_eq!(r.total_projected_savings, 120_000.0);

        let expected_need = 500_000.0 * 1.05_f64.powf(10.0);
        assert_relative_eq!(r.required_total_monthly_investment, expected_need / 120.0, max_relative = 1e-12);
    }

    #[test]
    fn test_tiny_rate_does_not_divide_by_zero() {
        assert_eq!(annuity_factor(1e-20, 120.0), 120.0);
        assert_eq!(annuity_factor(0.0, 120.0), 120.0);
        assert_eq!(annuity_factor(-0.01, 12.0), 12.0);
        assert_relative_eq!(annuity_factor(0.01, 12.0), (1.01_f64.powi(12) - 1.0) / 0.01, max_relative = 1e-12);
    }

    #[test]
    fn test_components() {
        let projection = ProjectionEngine::default().project(&scenario_a()).expect("valid inputs");
        let c = projection.components;

        assert_eq!(c.total_invested, 500_000.0 + 15_000.0 * 156.0);
        assert_relative_eq!(
            c.fv_lump_sum + c.fv_monthly_savings,
            projection.result.total_projected_savings
        );
        assert_relative_eq!(c.wealth_gained, 3_655_387.139575, max_relative = 1e-9);
    }

    #[test]
    fn test_overflow_propagates() {
        let inputs = CalculatorInputs {
            current_age: 0,
            target_age: u32::MAX,
            inflation_rate: 20.0,
            ..Default::default()
        };
        let r = compute(&inputs).expect("valid inputs");
        assert!(r.future_cost.is_infinite());
        assert!(r.has_non_finite());
    }

    #[test]
    fn test_huge_horizon_counts_every_month() {
        // 400 million years is 4.8 billion months, beyond u32
        let inputs = CalculatorInputs {
            current_age: 0,
            target_age: 400_000_000,
            current_cost: 0.0,
            inflation_rate: 0.0,
            current_savings: 0.0,
            monthly_savings: 1.0,
            return_rate: 0.0,
            ..Default::default()
        };
        let projection = ProjectionEngine::default().project(&inputs).expect("valid inputs");
        assert_eq!(projection.result.total_projected_savings, 4_800_000_000.0);
        assert_eq!(projection.components.total_invested, 4_800_000_000.0);
        assert_eq!(annuity_factor(0.0, 4_800_000_000.0), 4_800_000_000.0);
    }
}
