//! End-to-end single-image classification.
//!
//! [`SignPredictor`] ties the pipeline together: decode the request payload,
//! extract and normalize the ROI, score it through the injected backend, and
//! decode the score vector into a labeled, timestamped prediction. The backend
//! handle is constructed once at startup and passed in explicitly so tests can
//! substitute a stub.

use crate::core::errors::{SignError, SignResult};
use crate::domain::labels::ClassLabel;
use crate::domain::types::Prediction;
use crate::inference::{ScoreBackend, ensure_score_contract};
use crate::processors::{Normalize, Roi, extract_roi};
use crate::utils::image::decode_base64_image;
use image::RgbImage;
use std::sync::Arc;
use tracing::debug;

/// Single-image hand-sign classifier.
///
/// Stateless beyond the shared, read-only backend handle; every request runs
/// decode, crop, normalize and score synchronously to completion. A failed
/// request leaves nothing inconsistent behind, and backend failures propagate
/// without retries.
#[derive(Debug)]
pub struct SignPredictor {
    normalize: Normalize,
    backend: Arc<dyn ScoreBackend>,
}

impl SignPredictor {
    /// Creates a predictor around an already-loaded backend.
    pub fn new(backend: Arc<dyn ScoreBackend>) -> Self {
        Self {
            normalize: Normalize::default(),
            backend,
        }
    }

    /// Returns a builder for non-default construction.
    pub fn builder() -> SignPredictorBuilder {
        SignPredictorBuilder::new()
    }

    /// Name of the underlying backend/model.
    pub fn model_name(&self) -> &str {
        self.backend.name()
    }

    /// Classifies a base64 image payload (raw or data-URI form).
    ///
    /// `roi` defaults to the full-frame approximation when `None`. Fails with
    /// [`SignError::Decode`] for unusable payloads and
    /// [`SignError::InvalidRoi`] for regions outside the frame; in both cases
    /// the backend is never invoked.
    pub fn predict_base64(&self, image_data: &str, roi: Option<Roi>) -> SignResult<Prediction> {
        let frame = decode_base64_image(image_data)?;
        self.predict_frame(&frame, roi.unwrap_or_default())
    }

    /// Classifies an already-decoded RGB frame.
    pub fn predict_frame(&self, frame: &RgbImage, roi: Roi) -> SignResult<Prediction> {
        let sub = extract_roi(frame, roi)?;
        let tensor = self.normalize.apply(&sub);
        let scores = self.backend.score(&tensor)?;
        ensure_score_contract(self.backend.name(), scores.len())?;

        let (index, confidence) = argmax(&scores).ok_or_else(|| {
            SignError::backend_msg(self.backend.name(), "backend returned an empty score vector")
        })?;
        let letter = ClassLabel::from_index(index).ok_or_else(|| {
            SignError::backend_msg(
                self.backend.name(),
                format!("winning index {index} outside the label table"),
            )
        })?;

        debug!(%letter, confidence, "classified frame");

        Ok(Prediction {
            letter,
            confidence,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }
}

/// Index and value of the maximal score, first index winning ties.
///
/// Strictly-greater comparison keeps the earliest maximal entry, so equal
/// scores resolve to the lowest index in the fixed label ordering.
fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best
}

/// Builder for [`SignPredictor`].
pub struct SignPredictorBuilder {
    normalize: Option<Normalize>,
    backend: Option<Arc<dyn ScoreBackend>>,
}

impl SignPredictorBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            normalize: None,
            backend: None,
        }
    }

    /// Sets the backend handle (required).
    pub fn backend(mut self, backend: Arc<dyn ScoreBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Overrides the default normalization.
    pub fn normalize(mut self, normalize: Normalize) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Builds the predictor.
    pub fn build(self) -> SignResult<SignPredictor> {
        let backend = self
            .backend
            .ok_or_else(|| SignError::config("predictor requires a backend handle"))?;
        Ok(SignPredictor {
            normalize: self.normalize.unwrap_or_default(),
            backend,
        })
    }
}

impl Default for SignPredictorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_takes_first_of_equal_maxima() {
        let mut scores = vec![0.0f32; 29];
        scores[2] = 0.9;
        scores[5] = 0.9;
        assert_eq!(argmax(&scores), Some((2, 0.9)));
    }

    #[test]
    fn argmax_on_uniform_vector_is_index_zero() {
        let scores = vec![0.5f32; 29];
        assert_eq!(argmax(&scores), Some((0, 0.5)));
    }

    #[test]
    fn argmax_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn builder_without_backend_fails() {
        assert!(SignPredictor::builder().build().is_err());
    }
}
