//! Health metrics calculations module
//!
//! The anthropometric formula library: BMI, ideal weight, daily calories,
//! body fat, heart rate zones, weight timeline and waist-hip ratio.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Published formulas, constants named at the top
//! 3. **Validated Input**: Each calculator rejects bad input with `CalcError`
//! 4. **Type Safety**: Units and categories are closed enums, not strings

use serde::{Deserialize, Serialize};

pub mod bmi;
pub mod body_fat;
pub mod calories;
pub mod heart_rate;
pub mod ideal_weight;
pub mod thresholds;
pub mod waist_hip;
pub mod weight_timeline;

pub use bmi::*;
pub use body_fat::*;
pub use calories::*;
pub use heart_rate::*;
pub use ideal_weight::*;
pub use thresholds::{classify, CategoryThreshold};
pub use waist_hip::*;
pub use weight_timeline::*;

// ============================================================================
// Profile Enumerations
// ============================================================================

/// Biological sex for health calculations
/// Note: This only selects sex-specific formula coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Body frame size, scales the ideal weight formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FrameSize {
    pub fn multiplier(&self) -> f64 {
        match self {
            FrameSize::Small => 0.9,
            FrameSize::Medium => 1.0,
            FrameSize::Large => 1.1,
        }
    }
}

impl std::str::FromStr for FrameSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(FrameSize::Small),
            "medium" => Ok(FrameSize::Medium),
            "large" => Ok(FrameSize::Large),
            _ => Err(format!("Unknown frame size: {}", s)),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job, or training twice a day
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise/sports 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise/sports 3-5 days/week",
            ActivityLevel::Active => "Hard exercise/sports 6-7 days/week",
            ActivityLevel::VeryActive => {
                "Very hard exercise, physical job, or training twice a day"
            }
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very-active" | "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Weight goal, sets the sign of the calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl std::str::FromStr for WeightGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(WeightGoal::Lose),
            "maintain" => Ok(WeightGoal::Maintain),
            "gain" => Ok(WeightGoal::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_multipliers_increase() {
        let multipliers: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.multiplier()).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_activity_level_wire_names() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
            "\"very-active\""
        );
        assert_eq!("very-active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert!("extreme".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_frame_multipliers() {
        assert_eq!(FrameSize::Small.multiplier(), 0.9);
        assert_eq!(FrameSize::Medium.multiplier(), 1.0);
        assert_eq!(FrameSize::Large.multiplier(), 1.1);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Female".parse::<BiologicalSex>().unwrap(), BiologicalSex::Female);
        assert_eq!("large".parse::<FrameSize>().unwrap(), FrameSize::Large);
        assert_eq!("gain".parse::<WeightGoal>().unwrap(), WeightGoal::Gain);
    }
}
