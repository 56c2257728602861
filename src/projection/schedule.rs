//! Year-by-year growth path of cost and savings

use super::engine::{annuity_factor, growth_factor};
use super::MONTHS_PER_YEAR;
use crate::inputs::CalculatorInputs;
use serde::{Deserialize, Serialize};

/// Position of the plan at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Years from now (1-indexed)
    pub year: u32,
    pub child_age: u32,
    pub projected_cost: f64,
    pub lump_sum_value: f64,
    pub monthly_savings_value: f64,
    pub total_savings: f64,
    /// projected_cost - total_savings; negative means ahead of the cost
    pub gap: f64,
}

pub(crate) fn rows(
    inputs: &CalculatorInputs,
    years: u32,
    inflation: f64,
    annual_return: f64,
) -> impl Iterator<Item = ScheduleRow> + '_ {
    let monthly_return = annual_return / f64::from(MONTHS_PER_YEAR);

    (1..=years)
        .map(move |year| {
            let projected_cost = inputs.current_cost * growth_factor(inflation, f64::from(year));
            let lump_sum_value = inputs.current_savings * growth_factor(annual_return, f64::from(year));
            let monthly_savings_value = inputs.monthly_savings
                * annuity_factor(monthly_return, f64::from(year) * f64::from(MONTHS_PER_YEAR));
            let total_savings = lump_sum_value + monthly_savings_value;

            ScheduleRow {
                year,
                child_age: inputs.current_age.saturating_add(year),
                projected_cost,
                lump_sum_value,
                monthly_savings_value,
                total_savings,
                gap: projected_cost - total_savings,
            }
        })
}
