use super::component::{Component, COMPONENT_COUNT};
use crate::error::{Error, Result};

pub const MIN_VALUE: f64 = 0.0;
pub const MAX_VALUE: f64 = 10.0;

/// Check a single rating against the 0-10 range. NaN and infinities are rejected.
pub fn validate_value(component: Component, value: f64) -> Result<()> {
    if value.is_finite() && (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange { component, value })
    }
}

/// Clamp a rating into range. NaN collapses to the minimum.
pub fn clamp_value(value: f64) -> f64 {
    if value.is_nan() {
        MIN_VALUE
    } else {
        value.clamp(MIN_VALUE, MAX_VALUE)
    }
}

/// Validate weight coefficients.
/// Reports every problem at once (not just the first).
pub fn validate_weights(hundredths: &[u32; COMPONENT_COUNT]) -> Result<()> {
    let mut errors = Vec::new();

    for component in Component::ALL {
        if hundredths[component.index()] == 0 {
            errors.push(format!("{}: weight must be positive", component));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidWeights(errors.join("; ")))
    }
}
