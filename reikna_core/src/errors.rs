//! # Error Types
//!
//! Structured error types for reikna_core. Errors are raised synchronously
//! and never retried internally; each carries enough context for a caller
//! (or the response-formatting layer) to explain what went wrong.
//!
//! Geometric constraint failures (too many benches for a circle, etc.) are
//! NOT errors. They are returned as [`Constrained::Violation`] so callers can
//! branch on them like any other result.
//!
//! ## Example
//!
//! ```rust
//! use reikna_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_m".to_string(),
//!             value: length_m.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for reikna_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive dimension, zero count, NaN)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required sub-field of a configuration is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The router was asked for a calculation kind it has no formula for
    #[error("Unknown calculation kind: {kind}")]
    UnknownKind { kind: String },

    /// File I/O error while loading configuration or reference data
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML/JSON parse error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownKind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        CalcError::UnknownKind { kind: kind.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Fatal errors indicate a caller/classifier mismatch rather than bad user input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CalcError::UnknownKind { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownKind { .. } => "UNKNOWN_KIND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

// ============================================================================
// Input validation helpers
// ============================================================================

/// Reject NaN, infinite, zero and negative values for a physical dimension.
pub fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Reject zero counts. Counts are unsigned, so integrality is enforced by the type.
pub fn require_count(field: &str, value: u32) -> CalcResult<u32> {
    if value == 0 {
        return Err(CalcError::invalid_input(field, "0", "Count must be at least 1"));
    }
    Ok(value)
}

/// Convert a computed (already rounded) quantity to a `u32` count.
///
/// Quantities no `u32` can hold are rejected instead of saturating.
pub fn to_count(field: &str, value: f64) -> CalcResult<u32> {
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Result is too large to count"));
    }
    Ok(value as u32)
}

/// [`to_count`] for `u64` counts
pub fn to_count_u64(field: &str, value: f64) -> CalcResult<u64> {
    // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Result is too large to count"));
    }
    Ok(value as u64)
}

/// Turn the `None` of a `checked_*` integer operation into an error.
pub fn checked<T>(field: &str, value: Option<T>) -> CalcResult<T> {
    value.ok_or_else(|| CalcError::invalid_input(field, "overflow", "Result is too large to count"))
}

// ============================================================================
// Capacity violations
// ============================================================================

/// A geometric constraint that could not be met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityViolation {
    /// Which constraint failed (e.g. "circle_capacity")
    pub constraint: String,
    /// What was asked for
    pub requested: u32,
    /// What actually fits
    pub capacity: u32,
    /// Human-readable explanation
    pub message: String,
}

/// Result of a calculation that can legitimately fail a geometric constraint.
///
/// Serializes with a `status` discriminator: `"satisfied"` or `"violation"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Constrained<T> {
    Satisfied(T),
    Violation(CapacityViolation),
}

impl<T> Constrained<T> {
    pub fn is_violation(&self) -> bool {
        matches!(self, Constrained::Violation(_))
    }

    /// The result, if the constraint was satisfied
    pub fn satisfied(self) -> Option<T> {
        match self {
            Constrained::Satisfied(value) => Some(value),
            Constrained::Violation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length_m", "-5", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("circle_diameter").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_kind("fooBar").error_code(), "UNKNOWN_KIND");
        assert!(CalcError::unknown_kind("fooBar").is_fatal());
        assert!(!CalcError::missing_field("x").is_fatal());
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("w", 2.0).is_ok());
        assert!(require_positive("w", 0.0).is_err());
        assert!(require_positive("w", -1.0).is_err());
        assert!(require_positive("w", f64::NAN).is_err());
        assert!(require_count("n", 0).is_err());
        assert_eq!(require_count("n", 3).unwrap(), 3);
    }

    #[test]
    fn test_counts_reject_overflow() {
        assert_eq!(to_count("n", 7.0).unwrap(), 7);
        assert_eq!(to_count("n", u32::MAX as f64).unwrap(), u32::MAX);
        assert!(to_count("n", 1e10).is_err());
        assert!(to_count("n", f64::INFINITY).is_err());
        assert_eq!(to_count_u64("n", 1e10).unwrap(), 10_000_000_000);
        assert!(to_count_u64("n", 1e20).is_err());
        assert!(checked("n", u32::MAX.checked_add(1)).is_err());
        assert_eq!(checked("n", 2u32.checked_mul(3)).unwrap(), 6);
    }

    #[test]
    fn test_constrained_serialization() {
        let ok: Constrained<u32> = Constrained::Violation(CapacityViolation {
            constraint: "circle_capacity".to_string(),
            requested: 10,
            capacity: 6,
            message: "too many".to_string(),
        });
        let json = serde_json::to_string(&ok).unwrap();
        assert!(json.contains("\"status\":\"violation\""));
        assert!(ok.is_violation());
    }
}
