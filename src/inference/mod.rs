//! Inference backends behind a single scoring capability.
//!
//! The classifier artifact ships in three interchangeable formats; each is
//! wrapped in a backend that satisfies the same contract: one normalized
//! `(1, 224, 224, 3)` tensor in, one 29-element score vector out. The variant
//! is selected by [`BackendKind`] at startup and never changes for the life of
//! the process.
//!
//! # Modules
//!
//! * `dense` - Full-precision model on ONNX Runtime, with a mutexed session
//!   pool for concurrent scoring
//! * `lite` - Full-precision model on the pure-Rust tract interpreter
//! * `quantized` - u8-quantized model on tract, with explicit input
//!   quantization and output dequantization

pub mod dense;
pub mod lite;
pub mod quantized;

use crate::core::config::{BackendKind, ClassifierConfig};
use crate::core::errors::{SignError, SignResult};
use crate::domain::labels::ClassLabel;
use ndarray::Array4;
use std::sync::Arc;
use tracing::info;

pub use dense::DenseBackend;
pub use lite::LiteBackend;
pub use quantized::QuantizedBackend;

/// A raw score vector: one entry per [`ClassLabel`], in table order.
///
/// Scores are not guaranteed to sum to 1 unless the artifact carries a
/// normalizing final layer.
pub type ScoreVector = Vec<f32>;

/// The scoring capability every backend variant provides.
///
/// Implementations must be safe to invoke concurrently from independent
/// requests: engines whose sessions are not reentrant serialize internally
/// (see [`DenseBackend`]) instead of exposing an unprotected handle.
/// `score` must be deterministic for a fixed artifact and input and must not
/// mutate state observable across calls.
pub trait ScoreBackend: Send + Sync + std::fmt::Debug {
    /// Human-readable backend/model name used in logs and errors.
    fn name(&self) -> &str;

    /// Scores one normalized `(1, 224, 224, 3)` tensor.
    fn score(&self, input: &Array4<f32>) -> SignResult<ScoreVector>;
}

/// Loads the backend variant selected by the configuration.
///
/// The artifact must already be present on local storage; provisioning is a
/// separate startup step (see [`crate::artifact`]). Heavy engine
/// initialization happens here exactly once per process.
pub fn load_backend(config: &ClassifierConfig) -> SignResult<Arc<dyn ScoreBackend>> {
    config.validate()?;

    if !config.model_path.is_file() {
        return Err(SignError::model_load_msg(
            &config.model_path,
            "artifact not found on local storage (run provisioning first)",
        ));
    }

    info!(
        backend = %config.backend,
        path = %config.model_path.display(),
        "loading classifier backend"
    );

    let backend: Arc<dyn ScoreBackend> = match config.backend {
        BackendKind::Dense => Arc::new(DenseBackend::load(config)?),
        BackendKind::Lite => Arc::new(LiteBackend::load(&config.model_path)?),
        BackendKind::Quantized => Arc::new(QuantizedBackend::load(
            &config.model_path,
            config.quantization.unwrap_or_default(),
        )?),
    };

    info!(model = backend.name(), "classifier backend ready");
    Ok(backend)
}

/// Checks the 29-score output contract shared by all backends.
pub(crate) fn ensure_score_contract(model: &str, len: usize) -> SignResult<()> {
    if len != ClassLabel::COUNT {
        return Err(SignError::backend_msg(
            model,
            format!(
                "output contract violation: expected {} scores, got {len}",
                ClassLabel::COUNT
            ),
        ));
    }
    Ok(())
}
