//! Body Mass Index

use super::thresholds::{classify, CategoryThreshold};
use crate::errors::{CalcResult, InputField};
use crate::units::{Length, Mass};
use crate::validation::{validate_length, validate_mass};
use serde::{Deserialize, Serialize};

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

/// Lower bounds of each BMI band, ascending
pub const BMI_THRESHOLDS: [CategoryThreshold<BmiCategory>; 4] = [
    CategoryThreshold::new(f64::NEG_INFINITY, BmiCategory::Underweight),
    CategoryThreshold::new(18.5, BmiCategory::NormalWeight),
    CategoryThreshold::new(25.0, BmiCategory::Overweight),
    CategoryThreshold::new(30.0, BmiCategory::Obese),
];

impl BmiCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Advice shown next to a result in this category
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Your BMI is below the healthy range. Consider consulting a healthcare provider."
            }
            BmiCategory::NormalWeight => {
                "Your BMI indicates you are in a healthy weight range for your height."
            }
            BmiCategory::Overweight => {
                "Your BMI is above the healthy range. Consider healthy lifestyle changes."
            }
            BmiCategory::Obese => {
                "Your BMI indicates obesity. Consider consulting a healthcare provider."
            }
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
    pub label: String,
    pub description: String,
}

/// Calculate BMI
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(height: Length, weight: Mass) -> CalcResult<f64> {
    validate_length(InputField::Height, &height)?;
    validate_mass(InputField::Weight, &weight)?;

    let height_m = height.to_meters();
    Ok(weight.to_kg() / (height_m * height_m))
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    classify(&BMI_THRESHOLDS, bmi)
}

/// Calculate BMI together with its category
pub fn calculate_bmi_result(height: Length, weight: Mass) -> CalcResult<BmiResult> {
    let value = calculate_bmi(height, weight)?;
    let category = classify_bmi(value);

    Ok(BmiResult {
        value,
        category,
        label: category.label().to_string(),
        description: category.description().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CalcError, InvalidReason};
    use crate::units::{cm_to_inches, kg_to_lbs};
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_bmi_calculation() {
        // 180cm, 80kg -> 24.69
        let bmi = calculate_bmi(Length::cm(180.0), Mass::kg(80.0)).unwrap();
        assert!((bmi - 80.0 / (1.8 * 1.8)).abs() < 1e-12);
        assert!((bmi - 24.69).abs() < 0.01);
        assert_eq!(classify_bmi(bmi), BmiCategory::NormalWeight);
    }

    #[test]
    fn test_bmi_imperial_inputs() {
        // 70 in, 154 lbs -> ~22.1
        let bmi = calculate_bmi(Length::inches(70.0), Mass::lbs(154.0)).unwrap();
        assert!((bmi - 22.1).abs() < 0.05);
    }

    #[rstest]
    #[case(10.0, BmiCategory::Underweight)]
    #[case(18.49, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::NormalWeight)]
    #[case(24.99, BmiCategory::NormalWeight)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.99, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(55.0, BmiCategory::Obese)]
    fn test_bmi_category_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_nan_bmi_is_lowest_category() {
        assert_eq!(classify_bmi(f64::NAN), BmiCategory::Underweight);
    }

    #[test]
    fn test_bmi_result_labels() {
        let result = calculate_bmi_result(Length::cm(180.0), Mass::kg(80.0)).unwrap();
        assert_eq!(result.label, "Normal weight");
        assert_eq!(
            result.description,
            "Your BMI indicates you are in a healthy weight range for your height."
        );
    }

    #[test]
    fn test_bmi_rejects_bad_input() {
        assert_eq!(
            calculate_bmi(Length::cm(0.0), Mass::kg(80.0)),
            Err(CalcError::invalid(InputField::Height, InvalidReason::NotPositive))
        );
        assert_eq!(
            calculate_bmi(Length::cm(180.0), Mass::kg(f64::NAN)),
            Err(CalcError::invalid(InputField::Weight, InvalidReason::NotFinite))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: metric BMI equals w / (h/100)²
        #[test]
        fn prop_bmi_metric_formula(height in 50.0f64..250.0, weight in 2.0f64..400.0) {
            let bmi = calculate_bmi(Length::cm(height), Mass::kg(weight)).unwrap();
            let expected = weight / ((height / 100.0) * (height / 100.0));
            prop_assert!((bmi - expected).abs() < 1e-9);
        }

        /// Property: equivalent metric and imperial inputs give the same BMI
        #[test]
        fn prop_bmi_unit_independent(height in 50.0f64..250.0, weight in 2.0f64..400.0) {
            let metric = calculate_bmi(Length::cm(height), Mass::kg(weight)).unwrap();
            let imperial = calculate_bmi(
                Length::inches(cm_to_inches(height)),
                Mass::lbs(kg_to_lbs(weight)),
            ).unwrap();
            prop_assert!((metric - imperial).abs() < 1e-9,
                "metric {} != imperial {}", metric, imperial);
        }

        /// Property: heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            let bmi1 = calculate_bmi(Length::cm(height), Mass::kg(weight1)).unwrap();
            let bmi2 = calculate_bmi(Length::cm(height), Mass::kg(weight2)).unwrap();
            prop_assert!(bmi2 > bmi1);
        }

        /// Property: categories never decrease as BMI increases
        #[test]
        fn prop_bmi_category_monotonic(a in 5.0f64..60.0, b in 5.0f64..60.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_bmi(lo) <= classify_bmi(hi));
        }
    }
}
