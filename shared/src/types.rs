//! API request and response types
//!
//! Requests carry raw numbers plus unit tags, the way a form posts them.
//! Each calculator request converts into the library's typed input.

use crate::errors::CalcResult;
use crate::health_metrics::{
    calculate_body_fat_navy, calculate_body_fat_skinfold, calculate_bmi_result,
    calculate_daily_calories, calculate_heart_rate_zones, calculate_ideal_weight,
    calculate_waist_hip_result, calculate_weight_timeline_from, macro_breakdown, ActivityLevel,
    BiologicalSex, BmiResult, BodyFatResult, CalorieInput, CalorieResult, FrameSize,
    HeartRateZones, IdealWeightResult, MacroBreakdown, Milestone, NavyMeasurements,
    SkinfoldMeasurements, TimelineInput, WaistHipResult, WeightGoal, WeightTimeline,
};
use crate::units::{Length, LengthUnit, Mass, WeightUnit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Service Types
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Feedback form submission
///
/// Fields are optional so a missing field is a validation failure rather
/// than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Feedback acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
}

impl FeedbackResponse {
    pub fn received() -> Self {
        Self {
            success: true,
            message: "Feedback received successfully".to_string(),
        }
    }

    pub fn missing_fields() -> Self {
        Self {
            success: false,
            message: "Missing required fields".to_string(),
        }
    }
}

// ============================================================================
// Calculator Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub height_unit: LengthUnit,
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

impl BmiRequest {
    pub fn calculate(&self) -> CalcResult<BmiResult> {
        calculate_bmi_result(
            Length::new(self.height, self.height_unit),
            Mass::new(self.weight, self.weight_unit),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightRequest {
    pub height: f64,
    #[serde(default)]
    pub height_unit: LengthUnit,
    pub sex: BiologicalSex,
    #[serde(default)]
    pub frame: FrameSize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightResponse {
    #[serde(flatten)]
    pub result: IdealWeightResult,
    pub range: String,
}

impl IdealWeightRequest {
    pub fn calculate(&self) -> CalcResult<IdealWeightResponse> {
        let result = calculate_ideal_weight(
            Length::new(self.height, self.height_unit),
            self.sex,
            self.frame,
        )?;
        Ok(IdealWeightResponse {
            range: result.range_label(),
            result,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieRequest {
    pub age: u32,
    pub sex: BiologicalSex,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub height_unit: LengthUnit,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: WeightGoal,
    #[serde(default)]
    pub rate_of_change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieResponse {
    #[serde(flatten)]
    pub result: CalorieResult,
    pub macros: MacroBreakdown,
    pub activity_description: String,
}

impl CalorieRequest {
    pub fn to_input(&self) -> CalorieInput {
        CalorieInput {
            age_years: self.age,
            sex: self.sex,
            height: Length::new(self.height, self.height_unit),
            weight: Mass::new(self.weight, self.weight_unit),
            activity_level: self.activity_level,
            goal: self.goal,
            rate_of_change: self.rate_of_change,
        }
    }

    pub fn calculate(&self) -> CalcResult<CalorieResponse> {
        let result = calculate_daily_calories(&self.to_input())?;
        Ok(CalorieResponse {
            macros: macro_breakdown(result.target_calories),
            activity_description: self.activity_level.description().to_string(),
            result,
        })
    }
}

/// Body fat request, tagged by `method`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum BodyFatRequest {
    Navy {
        sex: BiologicalSex,
        waist: f64,
        neck: f64,
        #[serde(default)]
        hip: Option<f64>,
        height: f64,
        #[serde(default)]
        measure_unit: LengthUnit,
        #[serde(default)]
        height_unit: LengthUnit,
    },
    Skinfold {
        sex: BiologicalSex,
        tricep: f64,
        subscapular: f64,
        suprailiac: f64,
        #[serde(default)]
        age: Option<u32>,
    },
}

impl BodyFatRequest {
    pub fn sex(&self) -> BiologicalSex {
        match self {
            BodyFatRequest::Navy { sex, .. } | BodyFatRequest::Skinfold { sex, .. } => *sex,
        }
    }

    pub fn calculate(&self) -> CalcResult<BodyFatResult> {
        let percentage = match self {
            BodyFatRequest::Navy {
                sex,
                waist,
                neck,
                hip,
                height,
                measure_unit,
                height_unit,
            } => {
                let measurements = NavyMeasurements {
                    waist: Length::new(*waist, *measure_unit),
                    neck: Length::new(*neck, *measure_unit),
                    hip: hip.map(|h| Length::new(h, *measure_unit)),
                    height: Length::new(*height, *height_unit),
                };
                calculate_body_fat_navy(*sex, &measurements)?
            }
            BodyFatRequest::Skinfold {
                sex,
                tricep,
                subscapular,
                suprailiac,
                age,
            } => {
                let measurements = SkinfoldMeasurements {
                    tricep_mm: *tricep,
                    subscapular_mm: *subscapular,
                    suprailiac_mm: *suprailiac,
                    age_years: *age,
                };
                calculate_body_fat_skinfold(*sex, &measurements)?
            }
        };
        Ok(BodyFatResult::new(percentage, self.sex()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateRequest {
    pub age: u32,
    #[serde(default)]
    pub resting_hr: Option<u32>,
}

impl HeartRateRequest {
    pub fn calculate(&self) -> CalcResult<HeartRateZones> {
        calculate_heart_rate_zones(self.age, self.resting_hr)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightTimelineRequest {
    pub current_weight: f64,
    pub goal_weight: f64,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    pub daily_calorie_delta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightTimelineResponse {
    #[serde(flatten)]
    pub timeline: WeightTimeline,
    pub milestones: Vec<Milestone>,
}

impl WeightTimelineRequest {
    pub fn calculate_from(&self, start: NaiveDate) -> CalcResult<WeightTimelineResponse> {
        let input = TimelineInput {
            current_weight: self.current_weight,
            goal_weight: self.goal_weight,
            weight_unit: self.weight_unit,
            daily_calorie_delta: self.daily_calorie_delta,
        };
        let timeline = calculate_weight_timeline_from(start, &input)?;
        Ok(WeightTimelineResponse {
            milestones: timeline.milestones(),
            timeline,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaistHipRequest {
    pub waist: f64,
    pub hip: f64,
    #[serde(default)]
    pub unit: LengthUnit,
    pub sex: BiologicalSex,
}

impl WaistHipRequest {
    pub fn calculate(&self) -> CalcResult<WaistHipResult> {
        calculate_waist_hip_result(
            Length::new(self.waist, self.unit),
            Length::new(self.hip, self.unit),
            self.sex,
        )
    }
}
