//! Error types for the FitCalc formula library

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Every user-supplied value a calculator can reject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Height,
    Weight,
    Age,
    Waist,
    Neck,
    Hip,
    Tricep,
    Subscapular,
    Suprailiac,
    RestingHeartRate,
    RateOfChange,
    CurrentWeight,
    GoalWeight,
    DailyCalorieDelta,
}

impl InputField {
    /// Wire name of the field, as used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Height => "height",
            InputField::Weight => "weight",
            InputField::Age => "age",
            InputField::Waist => "waist",
            InputField::Neck => "neck",
            InputField::Hip => "hip",
            InputField::Tricep => "tricep",
            InputField::Subscapular => "subscapular",
            InputField::Suprailiac => "suprailiac",
            InputField::RestingHeartRate => "resting_heart_rate",
            InputField::RateOfChange => "rate_of_change",
            InputField::CurrentWeight => "current_weight",
            InputField::GoalWeight => "goal_weight",
            InputField::DailyCalorieDelta => "daily_calorie_delta",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    NotFinite,
    NotPositive,
    Negative,
    Missing,
    /// Navy method: waist (plus hip for women) must exceed the neck
    NotAboveNeck,
    /// Karvonen method: resting rate must leave a positive reserve
    NotBelowMaxHeartRate,
}

impl InvalidReason {
    pub fn message(&self) -> &'static str {
        match self {
            InvalidReason::NotFinite => "must be a valid number",
            InvalidReason::NotPositive => "must be greater than zero",
            InvalidReason::Negative => "cannot be negative",
            InvalidReason::Missing => "is required",
            InvalidReason::NotAboveNeck => "must be larger than the neck measurement",
            InvalidReason::NotBelowMaxHeartRate => "must be below the maximum heart rate",
        }
    }
}

/// Calculator error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid {field}: {}", reason.message())]
    InvalidInput {
        field: InputField,
        reason: InvalidReason,
    },

    #[error("Timeline of {weeks} weeks exceeds the supported projection length")]
    TimelineTooLong { weeks: u64 },
}

impl CalcError {
    pub fn invalid(field: InputField, reason: InvalidReason) -> Self {
        CalcError::InvalidInput { field, reason }
    }

    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<InputField> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(*field),
            CalcError::TimelineTooLong { .. } => Some(InputField::DailyCalorieDelta),
        }
    }
}

/// Result alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = CalcError::invalid(InputField::Height, InvalidReason::NotPositive);
        assert_eq!(err.to_string(), "Invalid height: must be greater than zero");
        assert_eq!(err.field(), Some(InputField::Height));
    }

    #[test]
    fn test_field_serializes_snake_case() {
        let json = serde_json::to_string(&InputField::RestingHeartRate).unwrap();
        assert_eq!(json, "\"resting_heart_rate\"");
        assert_eq!(InputField::RestingHeartRate.as_str(), "resting_heart_rate");
    }
}
