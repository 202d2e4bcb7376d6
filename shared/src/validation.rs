//! Input validation functions
//!
//! Calculators call these before touching a formula so that bad input
//! surfaces as a `CalcError` naming the field instead of a NaN result.

use crate::errors::{CalcError, CalcResult, InputField, InvalidReason};
use crate::units::{Length, Mass};

/// Require a finite value strictly greater than zero
pub fn require_positive(field: InputField, value: f64) -> CalcResult<f64> {
    if value.is_nan() || value.is_infinite() {
        return Err(CalcError::invalid(field, InvalidReason::NotFinite));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid(field, InvalidReason::NotPositive));
    }
    Ok(value)
}

/// Require a finite value that is zero or greater
pub fn require_non_negative(field: InputField, value: f64) -> CalcResult<f64> {
    if value.is_nan() || value.is_infinite() {
        return Err(CalcError::invalid(field, InvalidReason::NotFinite));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, InvalidReason::Negative));
    }
    Ok(value)
}

/// Require a positive whole-number count (ages, heart rates)
pub fn require_positive_count(field: InputField, value: u32) -> CalcResult<u32> {
    if value == 0 {
        return Err(CalcError::invalid(field, InvalidReason::NotPositive));
    }
    Ok(value)
}

/// Require an optional value to be present
pub fn require_present<T>(field: InputField, value: Option<T>) -> CalcResult<T> {
    value.ok_or(CalcError::invalid(field, InvalidReason::Missing))
}

/// Validate a length measurement
pub fn validate_length(field: InputField, length: &Length) -> CalcResult<()> {
    require_positive(field, length.value).map(|_| ())
}

/// Validate a mass measurement
pub fn validate_mass(field: InputField, mass: &Mass) -> CalcResult<()> {
    require_positive(field, mass.value).map(|_| ())
}
