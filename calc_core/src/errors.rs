//! # Error Types
//!
//! Every calculator fails the same way: one input field is rejected before any
//! formula runs. The error names the field, echoes the offending value, and
//! says why, so a presentation layer can show it verbatim.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::non_positive("span_m", span_m));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_span(-2.0).unwrap_err();
//! assert_eq!(err.field(), "span_m");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// There is a single kind: invalid input. The `reason` carries the detail
/// (non-positive value, zero divisor, unknown option, out of range).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, zero divisor, unknown option, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
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

    /// Value must be strictly greater than zero
    pub fn non_positive(field: impl Into<String>, value: f64) -> Self {
        let field = field.into();
        let reason = format!("{} must be positive", field);
        Self::invalid_input(field, value.to_string(), reason)
    }

    /// Value is NaN or infinite
    pub fn not_finite(field: impl Into<String>, value: f64) -> Self {
        let field = field.into();
        let reason = format!("{} must be a finite number", field);
        Self::invalid_input(field, value.to_string(), reason)
    }

    /// Value is used as a divisor and must not be zero
    pub fn zero_divisor(field: impl Into<String>, value: f64) -> Self {
        let field = field.into();
        let reason = format!("{} must not be zero", field);
        Self::invalid_input(field, value.to_string(), reason)
    }

    /// Enumerated selector does not match any supported option
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>, accepted: &[&str]) -> Self {
        Self::invalid_input(
            field,
            value,
            format!("unknown option, expected one of: {}", accepted.join(", ")),
        )
    }

    /// Value is outside the range the formula or table covers
    pub fn out_of_range(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::invalid_input(field, value.to_string(), reason)
    }

    /// Name of the rejected field
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }

    /// Human-readable reason the field was rejected
    pub fn reason(&self) -> &str {
        match self {
            CalcError::InvalidInput { reason, .. } => reason,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

/// Reject NaN/infinite values, then anything not strictly positive.
pub fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::non_positive(field, value));
    }
    Ok(())
}

/// Reject NaN and infinite values.
pub fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::not_finite(field, value));
    }
    Ok(())
}

/// Reject zero (and non-finite) divisors. Negative values are allowed.
pub fn require_nonzero(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value == 0.0 {
        return Err(CalcError::zero_divisor(field, value));
    }
    Ok(())
}

/// Reject a derived quantity that overflowed or underflowed to a
/// non-finite value. The error names the input `field` that drove it.
pub fn require_representable(field: &str, value: f64, quantity: &str, derived: f64) -> CalcResult<()> {
    if !derived.is_finite() {
        return Err(CalcError::out_of_range(
            field,
            value,
            format!("{} is out of the representable range ({})", quantity, derived),
        ));
    }
    Ok(())
}
