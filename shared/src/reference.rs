//! Static reference ranges published to clients
//!
//! These mirror the classifier tables for display. Whole-number bounds
//! serialize as JSON integers (`0`, not `0.0`) so existing clients see the
//! same documents they always have.

use serde::{Serialize, Serializer};

/// A range bound that serializes integral values without a fraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound(pub f64);

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < 9_007_199_254_740_992.0 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

const fn range(low: f64, high: f64) -> [Bound; 2] {
    [Bound(low), Bound(high)]
}

#[derive(Debug, Clone, Serialize)]
pub struct DescribedRange {
    pub name: &'static str,
    pub range: [Bound; 2],
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedRange {
    pub name: &'static str,
    pub range: [Bound; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelRange {
    pub level: &'static str,
    pub range: [Bound; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct BmiReference {
    pub categories: Vec<DescribedRange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BySex<T> {
    pub male: Vec<T>,
    pub female: Vec<T>,
}

pub type BodyFatReference = BySex<NamedRange>;
pub type WaistHipReference = BySex<LevelRange>;

pub fn bmi_categories() -> BmiReference {
    let described = |name, low, high, description| DescribedRange {
        name,
        range: range(low, high),
        description,
    };
    BmiReference {
        categories: vec![
            described("Underweight", 0.0, 18.5, "BMI is below the healthy range."),
            described("Normal weight", 18.5, 25.0, "BMI is within the healthy range."),
            described("Overweight", 25.0, 30.0, "BMI is above the healthy range."),
            described("Obese", 30.0, 100.0, "BMI indicates obesity."),
        ],
    }
}

pub fn body_fat_categories() -> BodyFatReference {
    let named = |name, low, high| NamedRange {
        name,
        range: range(low, high),
    };
    BySex {
        male: vec![
            named("Essential Fat", 2.0, 6.0),
            named("Athletes", 6.0, 14.0),
            named("Fitness", 14.0, 18.0),
            named("Average", 18.0, 25.0),
            named("Obese", 25.0, 40.0),
        ],
        female: vec![
            named("Essential Fat", 10.0, 16.0),
            named("Athletes", 16.0, 21.0),
            named("Fitness", 21.0, 25.0),
            named("Average", 25.0, 32.0),
            named("Obese", 32.0, 45.0),
        ],
    }
}

pub fn waist_hip_ratio() -> WaistHipReference {
    let level = |level, low, high| LevelRange {
        level,
        range: range(low, high),
    };
    BySex {
        male: vec![
            level("Low Risk", 0.0, 0.9),
            level("Moderate Risk", 0.9, 0.95),
            level("High Risk", 0.95, 2.0),
        ],
        female: vec![
            level("Low Risk", 0.0, 0.8),
            level("Moderate Risk", 0.8, 0.85),
            level("High Risk", 0.85, 2.0),
        ],
    }
}
