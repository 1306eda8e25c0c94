//! Domain-level types shared across the classification pipeline.
//!
//! This module groups the class-label table and the request/response
//! contracts exchanged with the (out-of-scope) transport layer.

pub mod labels;
pub mod types;

pub use labels::ClassLabel;
pub use types::{Correction, ErrorResponse, PredictRequest, Prediction};
