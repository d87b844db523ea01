//! Error types for spectro-particle.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParticleError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ParticleError>;

/// Accept `value` only if it is finite and strictly positive.
pub fn require_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParticleError::InvalidParameter(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

/// Accept `value` only if it is finite (any sign).
pub fn require_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParticleError::InvalidParameter(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
