//! Loading plan inputs from JSON documents and scenario batches from CSV

use super::{CalculatorInputs, EducationGoal};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid inputs document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scenario file: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of a scenario batch file
///
/// Header: `scenario,current_age,target_age,current_cost,current_savings,
/// monthly_savings,inflation_rate,return_rate[,education_goal][,your_age]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub scenario: String,
    pub current_age: u32,
    pub target_age: u32,
    pub current_cost: f64,
    pub current_savings: f64,
    pub monthly_savings: f64,
    pub inflation_rate: f64,
    pub return_rate: f64,
    #[serde(default)]
    pub education_goal: Option<EducationGoal>,
    #[serde(default)]
    pub your_age: Option<u32>,
}

impl ScenarioRow {
    /// Build engine inputs; a missing goal is inferred from the target age
    pub fn to_inputs(&self) -> CalculatorInputs {
        let education_goal = self.education_goal.unwrap_or(match self.target_age {
            18 => EducationGoal::HigherEducation,
            22 => EducationGoal::PostGraduation,
            _ => EducationGoal::Other,
        });

        CalculatorInputs {
            your_age: self.your_age.unwrap_or(CalculatorInputs::default().your_age),
            current_age: self.current_age,
            education_goal,
            target_age: self.target_age,
            current_cost: self.current_cost,
            inflation_rate: self.inflation_rate,
            current_savings: self.current_savings,
            monthly_savings: self.monthly_savings,
            return_rate: self.return_rate,
        }
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load plan inputs from a JSON file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<CalculatorInputs, LoadError> {
    let file = open(path.as_ref())?;
    load_inputs_from_reader(file)
}

/// Load plan inputs from any JSON reader; absent keys take default values
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<CalculatorInputs, LoadError> {
    let inputs = serde_json::from_reader(reader)?;
    Ok(inputs)
}

/// Load a scenario batch from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioRow>, LoadError> {
    let file = open(path.as_ref())?;
    load_scenarios_from_reader(file)
}

/// Load a scenario batch from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioRow>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: ScenarioRow = record?;
        rows.push(row);
    }

    log::debug!("Loaded {} scenarios", rows.len());
    Ok(rows)
}
