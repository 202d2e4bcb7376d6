//! Feedback service
//!
//! Feedback is acknowledged and logged; nothing is stored. Only the message
//! length is logged, never who sent it.

use fitcalc_shared::types::FeedbackRequest;
use tracing::info;
use validator::{Validate, ValidationErrors};

/// Service for feedback form submissions
pub struct FeedbackService;

impl FeedbackService {
    /// Accept a submission if every field is present and non-empty
    pub fn submit(req: &FeedbackRequest) -> Result<(), ValidationErrors> {
        req.validate()?;

        info!(
            message_len = req.message.as_deref().map(str::len).unwrap_or_default(),
            "Feedback received"
        );
        Ok(())
    }
}
