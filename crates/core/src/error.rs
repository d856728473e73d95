//! Fatal input errors
//!
//! A [`DomainError`] aborts the single evaluation that raised it: no partial
//! result is returned. Unrealistic-but-possible inputs are not errors; they
//! are reported through [`crate::diagnostics::Warning`] instead.

use thiserror::Error;

/// Input outside its physical domain
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be strictly positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },

    #[error("live weight ({live} g) exceeds total weight ({total} g)")]
    LiveExceedsTotal { live: f64, total: f64 },

    #[error("sun never rises or never sets on this day (sin/cos ratio {aob:.4} outside [-1, 1])")]
    PolarDaylength { aob: f64 },
}

/// Convenience type for `Result<T, DomainError>`.
pub type ModelResult<T> = Result<T, DomainError>;

/// Reject NaN and infinities.
pub(crate) fn finite(name: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NotFinite { name })
    }
}

/// Require a finite value `>= 0`.
pub(crate) fn non_negative(name: &'static str, value: f64) -> ModelResult<f64> {
    let value = finite(name, value)?;
    if value < 0.0 {
        return Err(DomainError::Negative { name, value });
    }
    Ok(value)
}

/// Require a finite value `> 0` (used for divisors).
pub(crate) fn positive(name: &'static str, value: f64) -> ModelResult<f64> {
    let value = non_negative(name, value)?;
    if value == 0.0 {
        return Err(DomainError::NotPositive { name, value });
    }
    Ok(value)
}

/// Require a finite value inside `[min, max]`.
pub(crate) fn within(name: &'static str, value: f64, min: f64, max: f64) -> ModelResult<f64> {
    let value = finite(name, value)?;
    if value < min || value > max {
        return Err(DomainError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
