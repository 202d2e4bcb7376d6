//! Waist-to-hip ratio

use super::BiologicalSex;
use crate::errors::{CalcResult, InputField};
use crate::units::Length;
use crate::validation::validate_length;
use serde::{Deserialize, Serialize};

/// Cardiovascular risk implied by a waist-to-hip ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaistHipRisk {
    Low,
    Moderate,
    High,
}

impl WaistHipRisk {
    pub fn label(&self) -> &'static str {
        match self {
            WaistHipRisk::Low => "Low Risk",
            WaistHipRisk::Moderate => "Moderate Risk",
            WaistHipRisk::High => "High Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WaistHipRisk::Low => "Your waist-to-hip ratio indicates a lower risk of heart disease and other weight-related health issues.",
            WaistHipRisk::Moderate => "Your waist-to-hip ratio indicates a moderate risk of heart disease and other weight-related health issues. Consider discussing with a healthcare provider.",
            WaistHipRisk::High => "Your waist-to-hip ratio indicates a higher risk of heart disease and other weight-related health issues. We recommend consulting with a healthcare provider.",
        }
    }
}

/// `(low below, moderate up to and including)` cut-offs by sex
fn cutoffs(sex: BiologicalSex) -> (f64, f64) {
    match sex {
        BiologicalSex::Male => (0.90, 0.95),
        BiologicalSex::Female => (0.80, 0.85),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaistHipResult {
    pub ratio: f64,
    pub risk: WaistHipRisk,
    pub label: String,
    pub description: String,
}

/// Calculate waist-to-hip ratio; both lengths may use different units
pub fn calculate_waist_hip_ratio(waist: Length, hip: Length) -> CalcResult<f64> {
    validate_length(InputField::Waist, &waist)?;
    validate_length(InputField::Hip, &hip)?;

    if waist.unit == hip.unit {
        Ok(waist.value / hip.value)
    } else {
        Ok(waist.to_cm() / hip.to_cm())
    }
}

/// Classify a ratio: below the first cut-off is low, up to the second is moderate
pub fn classify_waist_hip_risk(ratio: f64, sex: BiologicalSex) -> WaistHipRisk {
    let (low, moderate) = cutoffs(sex);
    if ratio < low {
        WaistHipRisk::Low
    } else if ratio <= moderate {
        WaistHipRisk::Moderate
    } else {
        WaistHipRisk::High
    }
}

/// Ratio together with its risk level
pub fn calculate_waist_hip_result(waist: Length, hip: Length, sex: BiologicalSex) -> CalcResult<WaistHipResult> {
    let ratio = calculate_waist_hip_ratio(waist, hip)?;
    let risk = classify_waist_hip_risk(ratio, sex);
    Ok(WaistHipResult {
        ratio,
        risk,
        label: risk.label().to_string(),
        description: risk.description().to_string(),
    })
}
