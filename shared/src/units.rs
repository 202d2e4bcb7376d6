//! Unit conversion module
//!
//! Lengths and masses arrive tagged with the unit the user typed them in.
//! Calculators convert to the unit their formula is defined in at the
//! point of use, so the tags never leak into formula code as strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Centimeters in one inch
pub const CM_PER_INCH: f64 = 2.54;
/// Kilograms in one pound
pub const KG_PER_LB: f64 = 0.453592;
/// Energy stored in one kilogram of body fat (kcal)
pub const KCAL_PER_KG: f64 = 7700.0;
/// Energy stored in one pound of body fat (kcal)
pub const KCAL_PER_LB: f64 = 3500.0;

/// Convert centimeters to inches
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Convert inches to centimeters
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

// ============================================================================
// Weight Units
// ============================================================================

/// Mass unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => lbs_to_kg(value),
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg_to_lbs(kg),
        }
    }

    /// Calories per unit of body-fat mass
    pub fn kcal_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Kg => KCAL_PER_KG,
            WeightUnit::Lbs => KCAL_PER_LB,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length unit, used for heights and body circumferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Cm,
    Inches,
}

impl LengthUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Cm => value,
            LengthUnit::Inches => inches_to_cm(value),
        }
    }

    /// Convert from this unit to inches
    pub fn to_inches(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Cm => cm_to_inches(value),
            LengthUnit::Inches => value,
        }
    }

    /// Mass unit shown alongside results computed from this length unit
    pub fn display_weight_unit(&self) -> WeightUnit {
        match self {
            LengthUnit::Cm => WeightUnit::Kg,
            LengthUnit::Inches => WeightUnit::Lbs,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            LengthUnit::Cm => "cm",
            LengthUnit::Inches => "in",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Cm),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

// ============================================================================
// Tagged Measurements
// ============================================================================

/// A length paired with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn cm(value: f64) -> Self {
        Self::new(value, LengthUnit::Cm)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inches)
    }

    pub fn to_cm(&self) -> f64 {
        self.unit.to_cm(self.value)
    }

    pub fn to_inches(&self) -> f64 {
        self.unit.to_inches(self.value)
    }

    pub fn to_meters(&self) -> f64 {
        match self.unit {
            LengthUnit::Cm => self.value / 100.0,
            LengthUnit::Inches => self.value * 0.0254,
        }
    }
}

/// A mass paired with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Mass {
    pub fn new(value: f64, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    pub fn kg(value: f64) -> Self {
        Self::new(value, WeightUnit::Kg)
    }

    pub fn lbs(value: f64) -> Self {
        Self::new(value, WeightUnit::Lbs)
    }

    pub fn to_kg(&self) -> f64 {
        self.unit.to_kg(self.value)
    }

    pub fn to_lbs(&self) -> f64 {
        match self.unit {
            WeightUnit::Kg => kg_to_lbs(self.value),
            WeightUnit::Lbs => self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Weight Unit Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip_kg(kg in 20.0f64..500.0) {
            let lbs = WeightUnit::Lbs.from_kg(kg);
            let back_to_kg = WeightUnit::Lbs.to_kg(lbs);
            prop_assert!((kg - back_to_kg).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", kg, lbs, back_to_kg);
        }

        /// Property: Length conversion round-trip preserves value
        #[test]
        fn prop_length_roundtrip_cm(cm in 10.0f64..250.0) {
            let inches = cm_to_inches(cm);
            let back_to_cm = LengthUnit::Inches.to_cm(inches);
            prop_assert!((cm - back_to_cm).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", cm, inches, back_to_cm);
        }

        /// Property: meters agree whichever unit the length was given in
        #[test]
        fn prop_meters_unit_independent(cm in 50.0f64..250.0) {
            let metric = Length::cm(cm).to_meters();
            let imperial = Length::inches(cm_to_inches(cm)).to_meters();
            prop_assert!((metric - imperial).abs() < 1e-9);
        }
    }

    #[test]
    fn test_known_weight_conversions() {
        // 100 lbs = 45.3592 kg
        assert!((Mass::lbs(100.0).to_kg() - 45.3592).abs() < 1e-9);
        // 1 kg = 2.20462 lbs
        assert!((Mass::kg(1.0).to_lbs() - 2.20462).abs() < 0.001);
    }

    #[test]
    fn test_known_length_conversions() {
        // 180 cm = 70.866 inches
        assert!((Length::cm(180.0).to_inches() - 70.866).abs() < 0.01);
        // 72 inches = 182.88 cm
        assert!((Length::inches(72.0).to_cm() - 182.88).abs() < 1e-9);
    }

    #[test]
    fn test_kcal_per_unit() {
        assert_eq!(WeightUnit::Kg.kcal_per_unit(), 7700.0);
        assert_eq!(WeightUnit::Lbs.kcal_per_unit(), 3500.0);
    }

    #[test]
    fn test_display_weight_unit_follows_length_unit() {
        assert_eq!(LengthUnit::Cm.display_weight_unit(), WeightUnit::Kg);
        assert_eq!(LengthUnit::Inches.display_weight_unit(), WeightUnit::Lbs);
    }

    // =========================================================================
    // String Parsing Tests
    // =========================================================================

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kg);
        assert_eq!("pounds".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert_eq!("inches".parse::<LengthUnit>().unwrap(), LengthUnit::Inches);
        assert_eq!("CM".parse::<LengthUnit>().unwrap(), LengthUnit::Cm);
        assert!("stone".parse::<WeightUnit>().is_err());
        assert!("ft".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_unit_serde_tags() {
        assert_eq!(serde_json::to_string(&LengthUnit::Inches).unwrap(), "\"inches\"");
        assert_eq!(serde_json::to_string(&WeightUnit::Lbs).unwrap(), "\"lbs\"");
        let unit: LengthUnit = serde_json::from_str("\"cm\"").unwrap();
        assert_eq!(unit, LengthUnit::Cm);
    }
}
