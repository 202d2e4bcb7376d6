//! Daily calorie needs: BMR, TDEE and goal adjustment

use super::{ActivityLevel, BiologicalSex, WeightGoal};
use crate::errors::{CalcResult, InputField};
use crate::units::{Length, Mass};
use crate::validation::{require_non_negative, require_positive_count, validate_length, validate_mass};
use serde::{Deserialize, Serialize};

/// Everything the calorie calculator needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieInput {
    pub age_years: u32,
    pub sex: BiologicalSex,
    pub height: Length,
    pub weight: Mass,
    pub activity_level: ActivityLevel,
    pub goal: WeightGoal,
    /// Desired weekly weight change, in the unit of `weight`
    #[serde(default)]
    pub rate_of_change: f64,
}

/// Calorie calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal Metabolic Rate (Mifflin-St Jeor)
    pub bmr: f64,
    /// BMR × activity multiplier
    pub maintenance_calories: f64,
    /// Maintenance adjusted for the goal
    pub target_calories: f64,
    /// Daily deficit; negative means a surplus
    pub deficit: f64,
}

/// Macro-nutrient split of a calorie target, in kcal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
}

const PROTEIN_SHARE: f64 = 0.3;
const FAT_SHARE: f64 = 0.3;
const CARB_SHARE: f64 = 0.4;

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate maintenance and goal-adjusted daily calories
///
/// A weekly change of `rate_of_change` units needs
/// `rate × kcal_per_unit / 7` kcal per day, taken off maintenance to lose
/// and added to gain. The rate is ignored when maintaining.
pub fn calculate_daily_calories(input: &CalorieInput) -> CalcResult<CalorieResult> {
    let age = require_positive_count(InputField::Age, input.age_years)?;
    validate_length(InputField::Height, &input.height)?;
    validate_mass(InputField::Weight, &input.weight)?;

    let bmr = calculate_bmr_mifflin(input.weight.to_kg(), input.height.to_cm(), age, input.sex);
    let maintenance_calories = bmr * input.activity_level.multiplier();

    let daily_change = match input.goal {
        WeightGoal::Maintain => 0.0,
        WeightGoal::Lose | WeightGoal::Gain => {
            let rate = require_non_negative(InputField::RateOfChange, input.rate_of_change)?;
            rate * input.weight.unit.kcal_per_unit() / 7.0
        }
    };

    let deficit = match input.goal {
        WeightGoal::Lose => daily_change,
        WeightGoal::Maintain => 0.0,
        WeightGoal::Gain => -daily_change,
    };

    Ok(CalorieResult {
        bmr,
        maintenance_calories,
        target_calories: maintenance_calories - deficit,
        deficit,
    })
}

/// Split a calorie target 30% protein, 30% fat, 40% carbs
pub fn macro_breakdown(target_calories: f64) -> MacroBreakdown {
    let target = target_calories.round();
    MacroBreakdown {
        protein: (target * PROTEIN_SHARE).round() as i64,
        fat: (target * FAT_SHARE).round() as i64,
        carbs: (target * CARB_SHARE).round() as i64,
    }
}
