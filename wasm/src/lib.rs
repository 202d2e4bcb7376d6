//! FitCalc WASM Module
//!
//! Browser bindings for every calculator. Each export takes plain numbers
//! and unit names, and returns the result as a JSON string matching the
//! backend's response bodies. Bad input becomes a thrown JS `Error`.

use chrono::NaiveDate;
use fitcalc_shared::types::{
    BmiRequest, BodyFatRequest, CalorieRequest, HeartRateRequest, IdealWeightRequest,
    WaistHipRequest, WeightTimelineRequest,
};
use fitcalc_shared::CalcError;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Failure inside a binding, before it is handed to JavaScript
#[derive(Error, Debug)]
pub enum BindingError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("{0}")]
    UnknownOption(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

type BindingResult = Result<String, BindingError>;

fn parse<T: FromStr<Err = String>>(value: &str) -> Result<T, BindingError> {
    value.parse().map_err(BindingError::UnknownOption)
}

fn to_json<T: Serialize>(value: &T) -> BindingResult {
    Ok(serde_json::to_string(value)?)
}

fn into_js(result: BindingResult) -> Result<String, JsError> {
    result.map_err(|e| JsError::new(&e.to_string()))
}

/// Calculate BMI with its category
#[wasm_bindgen(js_name = calculateBmi)]
pub fn calculate_bmi(height: f64, weight: f64, height_unit: &str, weight_unit: &str) -> Result<String, JsError> {
    into_js(bmi_json(height, weight, height_unit, weight_unit))
}

fn bmi_json(height: f64, weight: f64, height_unit: &str, weight_unit: &str) -> BindingResult {
    let req = BmiRequest {
        height,
        weight,
        height_unit: parse(height_unit)?,
        weight_unit: parse(weight_unit)?,
    };
    to_json(&req.calculate()?)
}

/// Ideal weight by the four classic formulas
#[wasm_bindgen(js_name = calculateIdealWeight)]
pub fn calculate_ideal_weight(height: f64, height_unit: &str, sex: &str, frame: &str) -> Result<String, JsError> {
    into_js(ideal_weight_json(height, height_unit, sex, frame))
}

fn ideal_weight_json(height: f64, height_unit: &str, sex: &str, frame: &str) -> BindingResult {
    let req = IdealWeightRequest {
        height,
        height_unit: parse(height_unit)?,
        sex: parse(sex)?,
        frame: parse(frame)?,
    };
    to_json(&req.calculate()?)
}

/// Daily calorie needs, goal target and macro split
#[wasm_bindgen(js_name = calculateCalories)]
#[allow(clippy::too_many_arguments)]
pub fn calculate_calories(
    age: u32,
    sex: &str,
    height: f64,
    weight: f64,
    height_unit: &str,
    weight_unit: &str,
    activity_level: &str,
    goal: &str,
    rate_of_change: f64,
) -> Result<String, JsError> {
    into_js(calories_json(
        age,
        sex,
        height,
        weight,
        height_unit,
        weight_unit,
        activity_level,
        goal,
        rate_of_change,
    ))
}

#[allow(clippy::too_many_arguments)]
fn calories_json(
    age: u32,
    sex: &str,
    height: f64,
    weight: f64,
    height_unit: &str,
    weight_unit: &str,
    activity_level: &str,
    goal: &str,
    rate_of_change: f64,
) -> BindingResult {
    let req = CalorieRequest {
        age,
        sex: parse(sex)?,
        height,
        weight,
        height_unit: parse(height_unit)?,
        weight_unit: parse(weight_unit)?,
        activity_level: parse(activity_level)?,
        goal: parse(goal)?,
        rate_of_change,
    };
    to_json(&req.calculate()?)
}

/// Body fat from Navy tape measurements; `hip` is required for women
#[wasm_bindgen(js_name = calculateBodyFatNavy)]
pub fn calculate_body_fat_navy(
    sex: &str,
    waist: f64,
    neck: f64,
    hip: Option<f64>,
    height: f64,
    measure_unit: &str,
    height_unit: &str,
) -> Result<String, JsError> {
    into_js(body_fat_navy_json(sex, waist, neck, hip, height, measure_unit, height_unit))
}

fn body_fat_navy_json(
    sex: &str,
    waist: f64,
    neck: f64,
    hip: Option<f64>,
    height: f64,
    measure_unit: &str,
    height_unit: &str,
) -> BindingResult {
    let req = BodyFatRequest::Navy {
        sex: parse(sex)?,
        waist,
        neck,
        hip,
        height,
        measure_unit: parse(measure_unit)?,
        height_unit: parse(height_unit)?,
    };
    to_json(&req.calculate()?)
}

/// Body fat from three skinfold sites in millimetres
#[wasm_bindgen(js_name = calculateBodyFatSkinfold)]
pub fn calculate_body_fat_skinfold(
    sex: &str,
    tricep: f64,
    subscapular: f64,
    suprailiac: f64,
    age: Option<u32>,
) -> Result<String, JsError> {
    into_js(body_fat_skinfold_json(sex, tricep, subscapular, suprailiac, age))
}

fn body_fat_skinfold_json(
    sex: &str,
    tricep: f64,
    subscapular: f64,
    suprailiac: f64,
    age: Option<u32>,
) -> BindingResult {
    let req = BodyFatRequest::Skinfold {
        sex: parse(sex)?,
        tricep,
        subscapular,
        suprailiac,
        age,
    };
    to_json(&req.calculate()?)
}

/// Heart rate training zones
#[wasm_bindgen(js_name = calculateHeartRateZones)]
pub fn calculate_heart_rate_zones(age: u32, resting_hr: Option<u32>) -> Result<String, JsError> {
    into_js(heart_rate_json(age, resting_hr))
}

fn heart_rate_json(age: u32, resting_hr: Option<u32>) -> BindingResult {
    to_json(&HeartRateRequest { age, resting_hr }.calculate()?)
}

/// Week-by-week projection toward a goal weight
///
/// `start_date` is an ISO `YYYY-MM-DD` date, normally today in the
/// browser's timezone.
#[wasm_bindgen(js_name = calculateWeightTimeline)]
pub fn calculate_weight_timeline(
    current_weight: f64,
    goal_weight: f64,
    weight_unit: &str,
    daily_calorie_delta: f64,
    start_date: &str,
) -> Result<String, JsError> {
    into_js(weight_timeline_json(
        current_weight,
        goal_weight,
        weight_unit,
        daily_calorie_delta,
        start_date,
    ))
}

fn weight_timeline_json(
    current_weight: f64,
    goal_weight: f64,
    weight_unit: &str,
    daily_calorie_delta: f64,
    start_date: &str,
) -> BindingResult {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| BindingError::InvalidDate(start_date.to_string()))?;
    let req = WeightTimelineRequest {
        current_weight,
        goal_weight,
        weight_unit: parse(weight_unit)?,
        daily_calorie_delta,
    };
    to_json(&req.calculate_from(start)?)
}

/// Waist-to-hip ratio and risk level
#[wasm_bindgen(js_name = calculateWaistHipRatio)]
pub fn calculate_waist_hip_ratio(waist: f64, hip: f64, unit: &str, sex: &str) -> Result<String, JsError> {
    into_js(waist_hip_json(waist, hip, unit, sex))
}

fn waist_hip_json(waist: f64, hip: f64, unit: &str, sex: &str) -> BindingResult {
    let req = WaistHipRequest {
        waist,
        hip,
        unit: parse(unit)?,
        sex: parse(sex)?,
    };
    to_json(&req.calculate()?)
}
