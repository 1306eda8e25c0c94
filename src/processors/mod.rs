//! Image processing for the classification pipeline.
//!
//! # Modules
//!
//! * `roi` - Region-of-interest validation, clamping and extraction
//! * `normalize` - Resize and scale into the fixed model input tensor

pub mod normalize;
pub mod roi;

pub use normalize::Normalize;
pub use roi::{Roi, extract_roi};
