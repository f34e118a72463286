//! # Error Types
//!
//! Structured error types for formula_core. Every error is raised while a
//! formula is being constructed; evaluation and rendering never fail.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::errors::{FormulaError, FormulaResult};
//!
//! fn check_height(height: f64) -> FormulaResult<()> {
//!     if height < 0.0 {
//!         return Err(FormulaError::negative_value("height", height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_height(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formula_core operations
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Structured error type for formula construction.
///
/// The first four variants are the validation taxonomy every formula shares.
/// The remaining variants are only produced by the dynamic catalog, where
/// formulas and attributes are addressed by name.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FormulaError {
    /// A value required to be >= 0 is negative
    #[error("Negative value: '{name}' = {value}, must be zero or positive")]
    NegativeValue { name: String, value: f64 },

    /// A value required to be > 0 is zero or negative
    #[error("Value less or equal to zero: '{name}' = {value}, must be positive")]
    LessOrEqualToZero { name: String, value: f64 },

    /// Parallel sequences have different lengths
    #[error("Lists not same length: {} have lengths {lengths:?}", .names.join(", "))]
    ListsNotSameLength { names: Vec<String>, lengths: Vec<usize> },

    /// A sequence that must contain at least one element is empty
    #[error("Empty list: '{name}' must contain at least one value")]
    EmptyList { name: String },

    /// A write was attempted on an already evaluated formula
    #[error("Immutability violation: formula {label} is evaluated, '{attribute}' cannot be changed")]
    ImmutabilityViolation { label: String, attribute: String },

    /// No formula is registered under this document and clause label
    #[error("Unknown formula: {label} in {document}")]
    UnknownFormula { document: String, label: String },

    /// The formula has no input or result with this name
    #[error("Unknown attribute: formula {label} has no attribute '{attribute}'")]
    UnknownAttribute { label: String, attribute: String },

    /// Dynamic input could not be interpreted (bad number, wrong shape, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl FormulaError {
    /// Create a NegativeValue error
    pub fn negative_value(name: impl Into<String>, value: f64) -> Self {
        FormulaError::NegativeValue {
            name: name.into(),
            value,
        }
    }

    /// Create a LessOrEqualToZero error
    pub fn less_or_equal_to_zero(name: impl Into<String>, value: f64) -> Self {
        FormulaError::LessOrEqualToZero {
            name: name.into(),
            value,
        }
    }

    /// Create a ListsNotSameLength error
    pub fn lists_not_same_length(names: Vec<String>, lengths: Vec<usize>) -> Self {
        FormulaError::ListsNotSameLength { names, lengths }
    }

    /// Create an EmptyList error
    pub fn empty_list(name: impl Into<String>) -> Self {
        FormulaError::EmptyList { name: name.into() }
    }

    /// Create an ImmutabilityViolation error
    pub fn immutability_violation(label: impl Into<String>, attribute: impl Into<String>) -> Self {
        FormulaError::ImmutabilityViolation {
            label: label.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(document: impl Into<String>, label: impl Into<String>) -> Self {
        FormulaError::UnknownFormula {
            document: document.into(),
            label: label.into(),
        }
    }

    /// Create an UnknownAttribute error
    pub fn unknown_attribute(label: impl Into<String>, attribute: impl Into<String>) -> Self {
        FormulaError::UnknownAttribute {
            label: label.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FormulaError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from a validation guard
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            FormulaError::NegativeValue { .. }
                | FormulaError::LessOrEqualToZero { .. }
                | FormulaError::ListsNotSameLength { .. }
                | FormulaError::EmptyList { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FormulaError::NegativeValue { .. } => "NEGATIVE_VALUE",
            FormulaError::LessOrEqualToZero { .. } => "LESS_OR_EQUAL_TO_ZERO",
            FormulaError::ListsNotSameLength { .. } => "LISTS_NOT_SAME_LENGTH",
            FormulaError::EmptyList { .. } => "EMPTY_LIST",
            FormulaError::ImmutabilityViolation { .. } => "IMMUTABILITY_VIOLATION",
            FormulaError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            FormulaError::UnknownAttribute { .. } => "UNKNOWN_ATTRIBUTE",
            FormulaError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
