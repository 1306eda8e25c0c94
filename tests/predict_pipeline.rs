//! End-to-end pipeline tests over a stub scoring backend.
//!
//! Real artifacts are not available in CI, so these tests drive the full
//! decode / crop / normalize / score / decode-scores path through a canned
//! backend and assert the pipeline contract around it.

use handsign::core::errors::{SignError, SignResult};
use handsign::domain::labels::ClassLabel;
use handsign::inference::{ScoreBackend, ScoreVector};
use handsign::predictor::SignPredictor;
use handsign::processors::Roi;
use handsign::utils::image::encode_base64_png;
use image::RgbImage;
use ndarray::Array4;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Backend that returns a fixed score vector and counts invocations.
#[derive(Debug)]
struct CannedBackend {
    scores: Vec<f32>,
    calls: AtomicUsize,
}

impl CannedBackend {
    fn new(scores: Vec<f32>) -> Arc<Self> {
        Arc::new(Self {
            scores,
            calls: AtomicUsize::new(0),
        })
    }

    fn peaked_at(index: usize, peak: f32) -> Arc<Self> {
        let mut scores = vec![0.01f32; ClassLabel::COUNT];
        scores[index] = peak;
        Self::new(scores)
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ScoreBackend for CannedBackend {
    fn name(&self) -> &str {
        "canned"
    }

    fn score(&self, input: &Array4<f32>) -> SignResult<ScoreVector> {
        assert_eq!(input.shape(), &[1, 224, 224, 3]);
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.scores.clone())
    }
}

fn sample_payload(width: u32, height: u32) -> String {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    encode_base64_png(&img).unwrap()
}

#[test]
fn full_pipeline_produces_labeled_prediction() {
    let backend = CannedBackend::peaked_at(ClassLabel::G.index(), 0.92);
    let predictor = SignPredictor::new(backend.clone());

    let payload = format!("data:image/png;base64,{}", sample_payload(320, 240));
    let prediction = predictor
        .predict_base64(&payload, Some(Roi::new(40, 30, 180, 180)))
        .unwrap();

    assert_eq!(prediction.letter, ClassLabel::G);
    assert!((prediction.confidence - 0.92).abs() < f32::EPSILON);
    assert!(chrono::DateTime::parse_from_rfc3339(&prediction.timestamp).is_ok());
    assert_eq!(backend.call_count(), 1);
}

#[test]
fn omitted_roi_uses_full_frame_default() {
    let backend = CannedBackend::peaked_at(ClassLabel::A.index(), 0.5);
    let predictor = SignPredictor::new(backend.clone());

    // Default ROI is (0, 0, 224, 224); any frame covering it works.
    let payload = sample_payload(224, 224);
    let prediction = predictor.predict_base64(&payload, None).unwrap();

    assert_eq!(prediction.letter, ClassLabel::A);
    assert_eq!(backend.call_count(), 1);
}

#[test]
fn roi_outside_frame_fails_before_scoring() {
    let backend = CannedBackend::peaked_at(0, 0.9);
    let predictor = SignPredictor::new(backend.clone());

    let payload = sample_payload(100, 100);
    let err = predictor
        .predict_base64(&payload, Some(Roi::new(500, 500, 50, 50)))
        .unwrap_err();

    assert!(matches!(err, SignError::InvalidRoi { .. }));
    assert!(err.is_request_scoped());
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn undecodable_payload_fails_before_scoring() {
    let backend = CannedBackend::peaked_at(0, 0.9);
    let predictor = SignPredictor::new(backend.clone());

    let err = predictor.predict_base64("!!garbage!!", None).unwrap_err();
    assert!(matches!(err, SignError::Decode { .. }));
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn tied_scores_resolve_to_first_label_in_order() {
    let mut scores = vec![0.0f32; ClassLabel::COUNT];
    scores[ClassLabel::C.index()] = 0.8;
    scores[ClassLabel::F.index()] = 0.8;
    let backend = CannedBackend::new(scores);
    let predictor = SignPredictor::new(backend);

    let payload = sample_payload(224, 224);
    let prediction = predictor.predict_base64(&payload, None).unwrap();

    assert_eq!(prediction.letter, ClassLabel::C);
}

#[test]
fn short_score_vector_is_backend_error() {
    let backend = CannedBackend::new(vec![0.1, 0.9, 0.3]);
    let predictor = SignPredictor::new(backend);

    let payload = sample_payload(224, 224);
    let err = predictor.predict_base64(&payload, None).unwrap_err();

    assert!(matches!(err, SignError::BackendInvocation { .. }));
    assert!(err.to_string().contains("expected 29 scores"));
}

#[test]
fn prediction_serializes_to_wire_shape() {
    let backend = CannedBackend::peaked_at(ClassLabel::Space.index(), 0.66);
    let predictor = SignPredictor::new(backend);

    let payload = sample_payload(224, 224);
    let prediction = predictor.predict_base64(&payload, None).unwrap();

    let json = serde_json::to_value(&prediction).unwrap();
    assert_eq!(json["letter"], "space");
    assert!(json["confidence"].is_number());
    assert!(json["timestamp"].is_string());
}
