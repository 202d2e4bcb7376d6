//! Ideal body weight

use super::{BiologicalSex, FrameSize};
use crate::errors::{CalcResult, InputField};
use crate::units::{Length, WeightUnit};
use crate::validation::validate_length;
use serde::{Deserialize, Serialize};

/// Height (inches) the regression formulas are anchored at
const BASE_HEIGHT_INCHES: f64 = 60.0;

/// `(base kg, kg per inch over 5 ft)` for one formula
#[derive(Debug, Clone, Copy, PartialEq)]
struct Regression {
    base: f64,
    slope: f64,
}

impl Regression {
    const fn new(base: f64, slope: f64) -> Self {
        Self { base, slope }
    }

    fn at(&self, height_inches: f64) -> f64 {
        self.base + self.slope * (height_inches - BASE_HEIGHT_INCHES)
    }
}

/// Devine, Hamwi, Robinson, Miller
fn coefficients(sex: BiologicalSex) -> [Regression; 4] {
    match sex {
        BiologicalSex::Male => [
            Regression::new(50.0, 2.3),
            Regression::new(48.0, 2.7),
            Regression::new(52.0, 1.9),
            Regression::new(56.2, 1.41),
        ],
        BiologicalSex::Female => [
            Regression::new(45.5, 2.3),
            Regression::new(45.5, 2.2),
            Regression::new(49.0, 1.7),
            Regression::new(53.1, 1.36),
        ],
    }
}

/// Ideal weight by each formula, in `display_unit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightResult {
    pub devine: f64,
    pub hamwi: f64,
    pub robinson: f64,
    pub miller: f64,
    /// Lowest of the four formulas
    pub range_low: f64,
    /// Highest of the four formulas
    pub range_high: f64,
    pub display_unit: WeightUnit,
}

impl IdealWeightResult {
    /// The four formula results in Devine, Hamwi, Robinson, Miller order
    pub fn formulas(&self) -> [(&'static str, f64); 4] {
        [
            ("Devine", self.devine),
            ("Hamwi", self.hamwi),
            ("Robinson", self.robinson),
            ("Miller", self.miller),
        ]
    }

    /// Range rounded to whole units, e.g. `"64 - 73 kg"`
    pub fn range_label(&self) -> String {
        format!(
            "{} - {} {}",
            self.range_low.round(),
            self.range_high.round(),
            self.display_unit
        )
    }
}

/// Calculate ideal body weight using the Devine, Hamwi, Robinson and Miller formulas
///
/// Each formula gives kilograms as `base + slope × (height_in − 60)`, scaled
/// by the frame multiplier. Results are reported in kg for metric heights
/// and lbs for heights given in inches.
pub fn calculate_ideal_weight(
    height: Length,
    sex: BiologicalSex,
    frame: FrameSize,
) -> CalcResult<IdealWeightResult> {
    validate_length(InputField::Height, &height)?;

    let height_inches = height.to_inches();
    let display_unit = height.unit.display_weight_unit();
    let [devine, hamwi, robinson, miller] = coefficients(sex)
        .map(|formula| display_unit.from_kg(formula.at(height_inches) * frame.multiplier()));

    let all = [devine, hamwi, robinson, miller];
    let range_low = all.iter().copied().fold(f64::INFINITY, f64::min);
    let range_high = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(IdealWeightResult {
        devine,
        hamwi,
        robinson,
        miller,
        range_low,
        range_high,
        display_unit,
    })
}
