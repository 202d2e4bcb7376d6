//! Calculator API routes
//!
//! Each handler parses a request, runs the matching formula from the shared
//! crate and returns the result. Invalid numbers come back as 400 with the
//! offending field named.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use chrono::Utc;
use fitcalc_shared::types::{
    BmiRequest, BodyFatRequest, CalorieRequest, CalorieResponse, HeartRateRequest,
    IdealWeightRequest, IdealWeightResponse, WaistHipRequest, WeightTimelineRequest,
    WeightTimelineResponse,
};
use fitcalc_shared::{BmiResult, BodyFatResult, HeartRateZones, WaistHipResult};
use tracing::debug;

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/bmi", post(calculate_bmi))
        .route("/ideal-weight", post(calculate_ideal_weight))
        .route("/calories", post(calculate_calories))
        .route("/body-fat", post(calculate_body_fat))
        .route("/heart-rate", post(calculate_heart_rate))
        .route("/weight-timeline", post(calculate_weight_timeline))
        .route("/waist-hip", post(calculate_waist_hip))
}

/// POST /api/calculate/bmi
async fn calculate_bmi(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> ApiResult<Json<BmiResult>> {
    let Json(req) = payload?;
    let result = req.calculate()?;
    debug!(bmi = result.value, category = ?result.category, "BMI calculated");
    Ok(Json(result))
}

/// POST /api/calculate/ideal-weight
async fn calculate_ideal_weight(
    payload: Result<Json<IdealWeightRequest>, JsonRejection>,
) -> ApiResult<Json<IdealWeightResponse>> {
    let Json(req) = payload?;
    Ok(Json(req.calculate()?))
}

/// POST /api/calculate/calories
async fn calculate_calories(
    payload: Result<Json<CalorieRequest>, JsonRejection>,
) -> ApiResult<Json<CalorieResponse>> {
    let Json(req) = payload?;
    let response = req.calculate()?;
    debug!(
        bmr = response.result.bmr,
        target = response.result.target_calories,
        "Calories calculated"
    );
    Ok(Json(response))
}

/// POST /api/calculate/body-fat
///
/// The body's `method` field selects Navy tape or skinfold caliper input.
async fn calculate_body_fat(
    payload: Result<Json<BodyFatRequest>, JsonRejection>,
) -> ApiResult<Json<BodyFatResult>> {
    let Json(req) = payload?;
    Ok(Json(req.calculate()?))
}

/// POST /api/calculate/heart-rate
async fn calculate_heart_rate(
    payload: Result<Json<HeartRateRequest>, JsonRejection>,
) -> ApiResult<Json<HeartRateZones>> {
    let Json(req) = payload?;
    Ok(Json(req.calculate()?))
}

/// POST /api/calculate/weight-timeline
///
/// Projections start from today's date (UTC).
async fn calculate_weight_timeline(
    payload: Result<Json<WeightTimelineRequest>, JsonRejection>,
) -> ApiResult<Json<WeightTimelineResponse>> {
    let Json(req) = payload?;
    let response = req.calculate_from(Utc::now().date_naive())?;
    debug!(
        weeks = response.timeline.total_weeks,
        target_date = %response.timeline.target_date,
        "Weight timeline projected"
    );
    Ok(Json(response))
}

/// POST /api/calculate/waist-hip
async fn calculate_waist_hip(
    payload: Result<Json<WaistHipRequest>, JsonRejection>,
) -> ApiResult<Json<WaistHipResult>> {
    let Json(req) = payload?;
    Ok(Json(req.calculate()?))
}
