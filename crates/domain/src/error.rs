//! Unified error types for the domain layer
//!
//! Lets callers that deal with both notation and direct construction handle a
//! single error type instead of matching on each value object's error.

use thiserror::Error;

use crate::value_objects::{DiceParseError, DiceSpecError};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Sides missing or non-positive, or a negative dice count
    #[error("Invalid dice specification: {0}")]
    InvalidSpec(String),

    /// The maximal attainable sum does not fit the integer range
    #[error("Range overflow: maximal sum {maximum} exceeds {max}", max = i32::MAX)]
    RangeOverflow { maximum: i64 },

    /// Dice notation could not be read
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an invalid specification error
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<DiceSpecError> for DomainError {
    fn from(err: DiceSpecError) -> Self {
        match err {
            DiceSpecError::InvalidSpec(msg) => Self::InvalidSpec(msg),
            DiceSpecError::RangeOverflow { maximum } => Self::RangeOverflow { maximum },
        }
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        match err {
            DiceParseError::Spec(spec_err) => spec_err.into(),
            other => Self::Parse(other.to_string()),
        }
    }
}
