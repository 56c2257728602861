//! Display-side interpretation of a projection
//!
//! Nothing here feeds back into the engine: progress is clamped for display
//! only and the unclamped shortfall stays the source of truth.

mod format;

pub use format::{format_currency, NOT_AVAILABLE};

use crate::projection::{CalculationResult, Projection, SavingsComponents};
use serde::Serialize;
use std::fmt;

/// Share of the future cost covered by projected savings, in [0, 100].
/// A zero future cost counts as fully funded.
pub fn progress_percentage(result: &CalculationResult) -> f64 {
    if result.future_cost <= 0.0 {
        return 100.0;
    }
    let pct = result.total_projected_savings / result.future_cost * 100.0;
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0)
}

/// On-track / shortfall framing, decided by the sign of the shortfall alone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outlook {
    OnTrack { surplus: f64 },
    Shortfall { deficit: f64, required_monthly: f64 },
}

impl Outlook {
    pub fn from_result(result: &CalculationResult) -> Self {
        if result.shortfall <= 0.0 {
            Outlook::OnTrack { surplus: result.shortfall.abs() }
        } else {
            Outlook::Shortfall {
                deficit: result.shortfall,
                required_monthly: result.required_total_monthly_investment,
            }
        }
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outlook::OnTrack { surplus } => write!(
                f,
                "You are projected to have a surplus of {}. Keep up the great work!",
                format_currency(*surplus)
            ),
            Outlook::Shortfall { deficit, required_monthly } => write!(
                f,
                "Your current plan may not be enough. You have a projected deficit of {}.\n\
                 To reach your goal, you need to save a total of {} per month.",
                format_currency(*deficit),
                format_currency(*required_monthly)
            ),
        }
    }
}

/// Money put in versus growth earned, for the proportion chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentBreakdown {
    pub total_investment: f64,
    pub total_returns: f64,
}

impl InvestmentBreakdown {
    /// Both slices are floored at zero; a negative return shows as no growth
    pub fn from_components(components: &SavingsComponents) -> Self {
        Self {
            total_investment: components.total_invested.max(0.0),
            total_returns: components.wealth_gained.max(0.0),
        }
    }

    /// Fraction of the chart taken by growth
    pub fn returns_share(&self) -> f64 {
        let total = self.total_investment + self.total_returns;
        if total > 0.0 {
            self.total_returns / total
        } else {
            0.0
        }
    }
}

/// Plain-text summary of one projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub result: CalculationResult,
    pub progress: f64,
    pub outlook: Outlook,
    pub breakdown: InvestmentBreakdown,
}

impl Report {
    pub fn new(projection: &Projection) -> Self {
        Self {
            result: projection.result,
            progress: progress_percentage(&projection.result),
            outlook: Outlook::from_result(&projection.result),
            breakdown: InvestmentBreakdown::from_components(&projection.components),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        writeln!(f, "Future Education Cost:   {}", format_currency(r.future_cost))?;
        writeln!(f, "  Projected cost in {} years.", r.years_to_goal)?;
        writeln!(f, "Your Projected Savings:  {}", format_currency(r.total_projected_savings))?;
        writeln!(f, "  Based on current savings & monthly investment.")?;
        writeln!(f, "Goal progress:           {:.0}%", self.progress)?;
        writeln!(
            f,
            "Invested {} / Wealth gained {} ({:.0}% growth)",
            format_currency(self.breakdown.total_investment),
            format_currency(self.breakdown.total_returns),
            self.breakdown.returns_share() * 100.0
        )?;
        writeln!(f)?;
        write!(f, "{}", self.outlook)
    }
}
