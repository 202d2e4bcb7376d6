//! Feedback submission route

use crate::services::FeedbackService;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use fitcalc_shared::types::{FeedbackRequest, FeedbackResponse};
use tracing::debug;

/// Create feedback routes
pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_feedback))
}

/// POST /api/feedback - Acknowledge a feedback form
///
/// An unreadable body counts as missing fields, the same as an empty one.
async fn submit_feedback(
    body: Result<Json<FeedbackRequest>, JsonRejection>,
) -> (StatusCode, Json<FeedbackResponse>) {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unreadable feedback body");
            FeedbackRequest::default()
        }
    };

    match FeedbackService::submit(&req) {
        Ok(()) => (StatusCode::OK, Json(FeedbackResponse::received())),
        Err(errors) => {
            debug!(%errors, "Feedback rejected");
            (StatusCode::BAD_REQUEST, Json(FeedbackResponse::missing_fields()))
        }
    }
}
