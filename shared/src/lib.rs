//! FitCalc Shared Library
//!
//! The anthropometric formula library plus the request/response types
//! shared by the backend and WASM modules.

pub mod errors;
pub mod health_metrics;
pub mod reference;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use units::*;
