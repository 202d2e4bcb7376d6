//! Body fat estimation: U.S. Navy circumference and Jackson/Pollock skinfold methods

use super::thresholds::{classify, CategoryThreshold};
use super::BiologicalSex;
use crate::errors::{CalcError, CalcResult, InputField, InvalidReason};
use crate::units::Length;
use crate::validation::{require_positive, require_positive_count, require_present, validate_length};
use serde::{Deserialize, Serialize};

/// Age used by the skinfold density formula when none is supplied
pub const SKINFOLD_REFERENCE_AGE: u32 = 30;

/// Circumference measurements for the Navy method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavyMeasurements {
    pub waist: Length,
    pub neck: Length,
    /// Required for women, ignored for men
    #[serde(default)]
    pub hip: Option<Length>,
    pub height: Length,
}

/// Skinfold thickness readings in millimeters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinfoldMeasurements {
    pub tricep_mm: f64,
    pub subscapular_mm: f64,
    pub suprailiac_mm: f64,
    /// Falls back to `SKINFOLD_REFERENCE_AGE`
    #[serde(default)]
    pub age_years: Option<u32>,
}

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }
}

/// Lower bounds of each male body fat band, ascending
pub const MALE_BODY_FAT_THRESHOLDS: [CategoryThreshold<BodyFatCategory>; 5] = [
    CategoryThreshold::new(f64::NEG_INFINITY, BodyFatCategory::EssentialFat),
    CategoryThreshold::new(6.0, BodyFatCategory::Athletes),
    CategoryThreshold::new(14.0, BodyFatCategory::Fitness),
    CategoryThreshold::new(18.0, BodyFatCategory::Average),
    CategoryThreshold::new(25.0, BodyFatCategory::Obese),
];

/// Lower bounds of each female body fat band, ascending
pub const FEMALE_BODY_FAT_THRESHOLDS: [CategoryThreshold<BodyFatCategory>; 5] = [
    CategoryThreshold::new(f64::NEG_INFINITY, BodyFatCategory::EssentialFat),
    CategoryThreshold::new(16.0, BodyFatCategory::Athletes),
    CategoryThreshold::new(21.0, BodyFatCategory::Fitness),
    CategoryThreshold::new(25.0, BodyFatCategory::Average),
    CategoryThreshold::new(32.0, BodyFatCategory::Obese),
];

/// Body fat estimate with its category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatResult {
    pub percentage: f64,
    pub category: BodyFatCategory,
    pub label: String,
}

impl BodyFatResult {
    pub fn new(percentage: f64, sex: BiologicalSex) -> Self {
        let category = classify_body_fat(percentage, sex);
        Self {
            percentage,
            category,
            label: category.label().to_string(),
        }
    }
}

/// Calculate body fat percentage using the U.S. Navy circumference method
///
/// All lengths in inches:
/// Men: 86.010 × log10(waist − neck) − 70.041 × log10(height) + 36.76
/// Women: 163.205 × log10(waist + hip − neck) − 97.684 × log10(height) − 78.387
///
/// A non-positive log argument is rejected; results are clamped at 0%.
pub fn calculate_body_fat_navy(sex: BiologicalSex, m: &NavyMeasurements) -> CalcResult<f64> {
    validate_length(InputField::Waist, &m.waist)?;
    validate_length(InputField::Neck, &m.neck)?;
    validate_length(InputField::Height, &m.height)?;

    let waist = m.waist.to_inches();
    let neck = m.neck.to_inches();
    let height = m.height.to_inches();

    let percentage = match sex {
        BiologicalSex::Male => {
            let girth = waist - neck;
            if girth <= 0.0 {
                return Err(CalcError::invalid(InputField::Waist, InvalidReason::NotAboveNeck));
            }
            86.010 * girth.log10() - 70.041 * height.log10() + 36.76
        }
        BiologicalSex::Female => {
            let hip = require_present(InputField::Hip, m.hip)?;
            validate_length(InputField::Hip, &hip)?;
            let girth = waist + hip.to_inches() - neck;
            if girth <= 0.0 {
                return Err(CalcError::invalid(InputField::Waist, InvalidReason::NotAboveNeck));
            }
            163.205 * girth.log10() - 97.684 * height.log10() - 78.387
        }
    };

    Ok(percentage.max(0.0))
}

/// Body density from the Jackson/Pollock 3-site skinfold equation
pub fn jackson_pollock_density(sex: BiologicalSex, sum_mm: f64, age_years: u32) -> f64 {
    let age = f64::from(age_years);
    match sex {
        BiologicalSex::Male => {
            1.1093800 - 0.0008267 * sum_mm + 0.0000016 * sum_mm.powi(2) - 0.0002574 * age
        }
        BiologicalSex::Female => {
            1.0994921 - 0.0009929 * sum_mm + 0.0000023 * sum_mm.powi(2) - 0.0001392 * age
        }
    }
}

/// Siri equation: body fat % from body density
pub fn siri_body_fat(density: f64) -> f64 {
    495.0 / density - 450.0
}

/// Calculate body fat percentage from three skinfold readings
///
/// Results are clamped at 0%.
pub fn calculate_body_fat_skinfold(sex: BiologicalSex, m: &SkinfoldMeasurements) -> CalcResult<f64> {
    let tricep = require_positive(InputField::Tricep, m.tricep_mm)?;
    let subscapular = require_positive(InputField::Subscapular, m.subscapular_mm)?;
    let suprailiac = require_positive(InputField::Suprailiac, m.suprailiac_mm)?;
    let age = match m.age_years {
        Some(age) => require_positive_count(InputField::Age, age)?,
        None => SKINFOLD_REFERENCE_AGE,
    };

    let density = jackson_pollock_density(sex, tricep + subscapular + suprailiac, age);
    Ok(siri_body_fat(density).max(0.0))
}

/// Classify body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, sex: BiologicalSex) -> BodyFatCategory {
    match sex {
        BiologicalSex::Male => classify(&MALE_BODY_FAT_THRESHOLDS, body_fat_percent),
        BiologicalSex::Female => classify(&FEMALE_BODY_FAT_THRESHOLDS, body_fat_percent),
    }
}
