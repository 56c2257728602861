//! Calculator inputs, field limits, normalization and loading

mod data;
pub mod limits;
pub mod normalize;
pub mod currency;
pub mod loader;

pub use data::{CalculatorInputs, EducationGoal, InputChange, InputField};
pub use limits::{FieldLimits, InputLimits};
pub use normalize::{apply_change, normalize};
pub use currency::{format_grouped, parse_currency_input};
pub use loader::{
    load_inputs, load_inputs_from_reader, load_scenarios, load_scenarios_from_reader,
    LoadError, ScenarioRow,
};
