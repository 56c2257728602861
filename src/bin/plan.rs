//! Project a single education plan
//!
//! Inputs start from the planner defaults, optionally replaced by a JSON
//! document, then individual flags override single fields.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use education_planner::inputs::{load_inputs, normalize, parse_currency_input, InputField};
use education_planner::projection::{LumpSumCompounding, ProjectionConfig, ProjectionEngine};
use education_planner::{CalculatorInputs, EducationGoal, Report};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Compounding {
    /// Grow existing savings monthly when solving for the required investment
    Monthly,
    /// Grow existing savings yearly, matching the headline projection
    Annual,
}

impl From<Compounding> for LumpSumCompounding {
    fn from(c: Compounding) -> Self {
        match c {
            Compounding::Monthly => LumpSumCompounding::Monthly,
            Compounding::Annual => LumpSumCompounding::Annual,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "plan", about = "Project education cost, savings and shortfall")]
struct Args {
    /// JSON inputs document (camelCase keys; missing keys use defaults)
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Child's current age
    #[arg(long)]
    current_age: Option<u32>,

    /// Education goal: 18, 22 or other
    #[arg(long)]
    goal: Option<EducationGoal>,

    /// Child's age when the money is needed
    #[arg(long)]
    target_age: Option<u32>,

    /// Today's cost of the education, e.g. "20,00,000"
    #[arg(long)]
    current_cost: Option<String>,

    /// Savings already set aside
    #[arg(long)]
    current_savings: Option<String>,

    /// Amount saved every month
    #[arg(long)]
    monthly_savings: Option<String>,

    /// Expected education inflation, percent per year
    #[arg(long, allow_negative_numbers = true)]
    inflation_rate: Option<f64>,

    /// Expected investment return, percent per year
    #[arg(long, allow_negative_numbers = true)]
    return_rate: Option<f64>,

    #[arg(long, value_enum, default_value_t = Compounding::Monthly)]
    compounding: Compounding,

    /// Print the projection as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Write the year-by-year schedule to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,
}

fn build_inputs(args: &Args) -> Result<CalculatorInputs> {
    let mut inputs = match &args.inputs {
        Some(path) => load_inputs(path)
            .with_context(|| format!("Failed to load inputs from {}", path.display()))?,
        None => CalculatorInputs::default(),
    };

    if let Some(age) = args.current_age {
        inputs.current_age = age;
        inputs = normalize(&inputs, InputField::CurrentAge);
    }
    if let Some(goal) = args.goal {
        inputs.education_goal = goal;
        inputs = normalize(&inputs, InputField::EducationGoal);
    }
    if let Some(age) = args.target_age {
        inputs.target_age = age;
    }
    if let Some(raw) = &args.current_cost {
        inputs.current_cost = parse_currency_input(raw) as f64;
    }
    if let Some(raw) = &args.current_savings {
        inputs.current_savings = parse_currency_input(raw) as f64;
    }
    if let Some(raw) = &args.monthly_savings {
        inputs.monthly_savings = parse_currency_input(raw) as f64;
    }
    if let Some(rate) = args.inflation_rate {
        inputs.inflation_rate = rate;
    }
    if let Some(rate) = args.return_rate {
        inputs.return_rate = rate;
    }

    Ok(inputs)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let inputs = build_inputs(&args)?;
    log::info!(
        "Planning for age {} -> {} ({})",
        inputs.current_age,
        inputs.target_age,
        inputs.education_goal.label()
    );

    let engine = ProjectionEngine::new(ProjectionConfig {
        lump_sum_compounding: args.compounding.into(),
    });

    let projection = engine.project(&inputs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("{}", Report::new(&projection));
    }

    if let Some(path) = &args.schedule {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut written = 0usize;
        for row in engine.schedule(&inputs)? {
            writer.serialize(row)?;
            written += 1;
        }
        writer.flush()?;
        log::info!("Schedule with {} rows written to {}", written, path.display());
    }

    Ok(())
}
