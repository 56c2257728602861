//! Run projections for every scenario in a CSV file
//!
//! Outputs one result row per scenario; rows with invalid ages are kept
//! with their validation message instead of stopping the batch.

use anyhow::{Context, Result};
use clap::Parser;
use education_planner::inputs::{load_scenarios, ScenarioRow};
use education_planner::projection::{LumpSumCompounding, ProjectionConfig, ProjectionEngine};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario CSV file
    input: PathBuf,

    /// Where to write the results
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// Grow existing savings yearly when solving for the required investment
    #[arg(long)]
    annual_lump_sum: bool,
}

/// One line of the results file
#[derive(Debug, Clone, Default, Serialize)]
struct BatchRow {
    scenario: String,
    status: &'static str,
    years_to_goal: Option<u32>,
    future_cost: Option<f64>,
    total_projected_savings: Option<f64>,
    shortfall: Option<f64>,
    required_total_monthly_investment: Option<f64>,
    total_invested: Option<f64>,
    wealth_gained: Option<f64>,
    error: Option<String>,
}

fn project_row(engine: &ProjectionEngine, row: &ScenarioRow) -> BatchRow {
    match engine.project(&row.to_inputs()) {
        Ok(projection) => {
            let r = projection.result;
            BatchRow {
                scenario: row.scenario.clone(),
                status: if r.is_on_track() { "on_track" } else { "shortfall" },
                years_to_goal: Some(r.years_to_goal),
                future_cost: Some(r.future_cost),
                total_projected_savings: Some(r.total_projected_savings),
                shortfall: Some(r.shortfall),
                required_total_monthly_investment: Some(r.required_total_monthly_investment),
                total_invested: Some(projection.components.total_invested),
                wealth_gained: Some(projection.components.wealth_gained),
                error: None,
            }
        }
        Err(err) => BatchRow {
            scenario: row.scenario.clone(),
            status: "invalid",
            error: Some(err.to_string()),
            ..Default::default()
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;
    log::info!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let compounding = if args.annual_lump_sum {
        LumpSumCompounding::Annual
    } else {
        LumpSumCompounding::Monthly
    };
    let engine = ProjectionEngine::new(ProjectionConfig { lump_sum_compounding: compounding });

    let proj_start = Instant::now();
    let results: Vec<BatchRow> = scenarios
        .par_iter()
        .map(|row| project_row(&engine, row))
        .collect();
    log::info!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for row in &results {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let count = |status: &str| results.iter().filter(|r| r.status == status).count();
    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary:");
    println!("  Scenarios: {}", results.len());
    println!("  On track:  {}", count("on_track"));
    println!("  Shortfall: {}", count("shortfall"));
    println!("  Invalid:   {}", count("invalid"));
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
