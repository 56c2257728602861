use thiserror::Error;

/// Inputs the engine refuses to project
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target age must exceed current age (current age {current_age}, target age {target_age})")]
    TargetNotAfterCurrent { current_age: u32, target_age: u32 },
}
