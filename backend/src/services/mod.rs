//! Business logic services
//!
//! Services hold the logic handlers delegate to, keeping routes thin.

pub mod feedback;

pub use feedback::FeedbackService;
