//! Hand-sign image classification pipeline.
//!
//! This crate turns a single camera frame into one of 29 hand-sign classes:
//! the letters `A` through `Z` plus the control signs `del`, `nothing` and
//! `space`. The pipeline is deliberately small: decode the image payload,
//! crop the region of interest, normalize it into a `(1, 224, 224, 3)` f32
//! tensor, score it through a pre-trained classifier and pick the top class.
//! A frequency-based spelling corrector cleans up words assembled from
//! successive letter predictions.
//!
//! # Architecture
//!
//! * [`core`] - Error taxonomy, configuration and logging setup
//! * [`domain`] - The class label table and request/response types
//! * [`processors`] - ROI extraction and tensor normalization
//! * [`inference`] - Interchangeable scoring backends (ONNX Runtime and tract)
//! * [`predictor`] - The end-to-end classification pipeline
//! * [`spell`] - Word-level spelling correction
//! * [`artifact`] - Model artifact provisioning from the Hugging Face Hub
//! * [`utils`] - base64 and data-URI image payload helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use handsign::core::config::{BackendKind, ClassifierConfig};
//! use handsign::inference::load_backend;
//! use handsign::predictor::SignPredictor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClassifierConfig::new(BackendKind::Dense, "models/sign_classifier.onnx");
//! let backend = load_backend(&config)?;
//! let predictor = SignPredictor::new(backend);
//!
//! let prediction = predictor.predict_base64("data:image/png;base64,...", None)?;
//! println!("{} ({:.3})", prediction.letter, prediction.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! Backends are loaded once at startup and shared behind an `Arc`; all
//! per-request state lives on the stack, so a single predictor serves
//! concurrent callers without coordination.

pub mod artifact;
pub mod core;
pub mod domain;
pub mod inference;
pub mod predictor;
pub mod processors;
pub mod spell;
pub mod utils;

/// Commonly used items, re-exported for convenient glob import.
pub mod prelude {
    pub use crate::artifact::{ArtifactSpec, ensure_artifact};
    pub use crate::core::config::{BackendKind, ClassifierConfig, QuantizationParams};
    pub use crate::core::errors::{SignError, SignResult};
    pub use crate::domain::labels::ClassLabel;
    pub use crate::domain::types::{Correction, ErrorResponse, PredictRequest, Prediction};
    pub use crate::inference::{ScoreBackend, ScoreVector, load_backend};
    pub use crate::predictor::SignPredictor;
    pub use crate::processors::{Normalize, Roi, extract_roi};
    pub use crate::spell::{FrequencyCorrector, WordCorrector};
    pub use crate::utils::image::decode_base64_image;
}
