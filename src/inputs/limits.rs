//! Allowed ranges for the slider-driven inputs

/// Inclusive range for a numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLimits {
    pub min: f64,
    pub max: f64,
}

impl FieldLimits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a typed value into the range. NaN falls back to the minimum,
    /// matching an emptied entry box.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Clamp an integer-valued input (ages)
    pub fn clamp_u32(&self, value: u32) -> u32 {
        self.clamp(f64::from(value)) as u32
    }
}

/// Limits for every slider on the planner form
#[derive(Debug, Clone)]
pub struct InputLimits {
    /// Parent's age
    pub your_age: FieldLimits,

    /// Child's current age
    pub current_age: FieldLimits,

    /// Upper bound for a user-entered target age; the lower bound is
    /// always one year above the child's current age
    pub max_target_age: u32,

    /// Annual education inflation (percent)
    pub inflation_rate: FieldLimits,

    /// Annual investment return (percent)
    pub return_rate: FieldLimits,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            your_age: FieldLimits::new(18.0, 60.0),
            current_age: FieldLimits::new(0.0, 20.0),
            max_target_age: 30,
            inflation_rate: FieldLimits::new(1.0, 20.0),
            return_rate: FieldLimits::new(1.0, 30.0),
        }
    }
}

impl InputLimits {
    /// Target age range for a given current age
    pub fn target_age(&self, current_age: u32) -> FieldLimits {
        let min = current_age.saturating_add(1);
        let max = self.max_target_age.max(min);
        FieldLimits::new(f64::from(min), f64::from(max))
    }
}
