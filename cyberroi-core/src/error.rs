//! Typed errors for the calculation core
//!
//! Only `InvalidMaturityLevel` belongs to the calculation contract itself.
//! The remaining variants are raised by boundary validation
//! (see [`crate::validate`]) and never by [`crate::compute`].

use thiserror::Error;

/// Errors raised by the calculator and its input boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Maturity label outside the five recognized levels
    #[error("invalid maturity level: {0:?} (expected one of Initial, Developing, Defined, Managed, Optimized)")]
    InvalidMaturityLevel(String),

    /// NaN or infinite value in a numeric field
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Negative value in a field that must be non-negative
    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// Value outside an inclusive range
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CalcError {
    /// Name of the offending input field, if the error is field-specific
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalcError::InvalidMaturityLevel(_) => Some("maturity_level"),
            CalcError::NonFinite { field }
            | CalcError::Negative { field, .. }
            | CalcError::OutOfRange { field, .. } => Some(*field),
        }
    }
}
