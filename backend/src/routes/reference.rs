//! Reference range endpoints
//!
//! The documents never change, so each is built once on first request.

use crate::state::AppState;
use axum::{routing::get, Json, Router};
use fitcalc_shared::reference::{
    bmi_categories, body_fat_categories, waist_hip_ratio, BmiReference, BodyFatReference,
    WaistHipReference,
};
use once_cell::sync::Lazy;

static BMI_CATEGORIES: Lazy<BmiReference> = Lazy::new(bmi_categories);
static BODY_FAT_CATEGORIES: Lazy<BodyFatReference> = Lazy::new(body_fat_categories);
static WAIST_HIP_RATIO: Lazy<WaistHipReference> = Lazy::new(waist_hip_ratio);

/// Create reference routes
pub fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/bmi-categories", get(get_bmi_categories))
        .route("/body-fat-categories", get(get_body_fat_categories))
        .route("/waist-hip-ratio", get(get_waist_hip_ratio))
}

/// GET /api/reference/bmi-categories
async fn get_bmi_categories() -> Json<&'static BmiReference> {
    Json(&*BMI_CATEGORIES)
}

/// GET /api/reference/body-fat-categories
async fn get_body_fat_categories() -> Json<&'static BodyFatReference> {
    Json(&*BODY_FAT_CATEGORIES)
}

/// GET /api/reference/waist-hip-ratio
async fn get_waist_hip_ratio() -> Json<&'static WaistHipReference> {
    Json(&*WAIST_HIP_RATIO)
}
