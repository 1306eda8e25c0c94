//! Full-precision ONNX Runtime backend.
//!
//! Wraps one or more `ort` sessions behind the scoring contract. ONNX Runtime
//! sessions take `&mut self` to run, so each session lives in a mutex and
//! invocations pick one round-robin; with the default pool size of 1 this
//! degenerates to a single serialized session, which is the correct (if not
//! maximally parallel) behavior for a non-reentrant engine shared across
//! requests.

use crate::core::config::ClassifierConfig;
use crate::core::errors::{SignError, SignResult};
use crate::inference::{ScoreBackend, ScoreVector, ensure_score_contract};
use ndarray::Array4;
use ort::logging::LogLevel;
use ort::session::Session;
use ort::value::TensorRef;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// ONNX Runtime scoring backend with a pooled session.
pub struct DenseBackend {
    sessions: Vec<Mutex<Session>>,
    next_idx: AtomicUsize,
    input_name: String,
    model_name: String,
}

impl std::fmt::Debug for DenseBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DenseBackend")
            .field("sessions", &self.sessions.len())
            .field("input_name", &self.input_name)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl DenseBackend {
    /// Builds the session pool from the configured artifact.
    ///
    /// The input tensor name is taken from the configuration when present,
    /// otherwise discovered from the session's declared inputs.
    pub fn load(config: &ClassifierConfig) -> SignResult<Self> {
        let path = config.model_path.as_path();
        let pool_size = config.session_pool_size.unwrap_or(1).max(1);

        let mut sessions = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            sessions.push(Mutex::new(Self::build_session(path)?));
        }

        let input_name = match &config.input_name {
            Some(name) => name.clone(),
            None => Self::discover_input_name(path, &sessions[0])?,
        };

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sign_classifier")
            .to_string();

        debug!(
            model = %model_name,
            pool = pool_size,
            input = %input_name,
            "dense backend sessions created"
        );

        Ok(Self {
            sessions,
            next_idx: AtomicUsize::new(0),
            input_name,
            model_name,
        })
    }

    fn build_session(path: &Path) -> SignResult<Session> {
        Session::builder()
            .and_then(|b| b.with_log_level(LogLevel::Error))
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| SignError::model_load(path, "failed to create ONNX session", e))
    }

    fn discover_input_name(path: &Path, session: &Mutex<Session>) -> SignResult<String> {
        let guard = session
            .lock()
            .map_err(|_| SignError::model_load_msg(path, "session lock poisoned during setup"))?;
        guard
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| SignError::model_load_msg(path, "model declares no inputs"))
    }
}

impl ScoreBackend for DenseBackend {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn score(&self, input: &Array4<f32>) -> SignResult<ScoreVector> {
        let input_tensor = TensorRef::from_array_view(input.view()).map_err(|e| {
            SignError::backend(
                &self.model_name,
                format!("failed to convert input tensor with shape {:?}", input.shape()),
                e,
            )
        })?;

        let idx = self.next_idx.fetch_add(1, Ordering::Relaxed) % self.sessions.len();
        let mut session = self.sessions[idx].lock().map_err(|_| {
            SignError::backend_msg(
                &self.model_name,
                format!("session lock poisoned ({}/{})", idx, self.sessions.len()),
            )
        })?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| SignError::backend_msg(&self.model_name, "model declares no outputs"))?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| SignError::backend(&self.model_name, "forward pass failed", e))?;

        let (shape, data) = outputs[output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                SignError::backend(
                    &self.model_name,
                    format!("failed to extract output tensor '{output_name}' as f32"),
                    e,
                )
            })?;

        debug!(model = %self.model_name, ?shape, "dense backend scored one tensor");
        ensure_score_contract(&self.model_name, data.len())?;
        Ok(data.to_vec())
    }
}
