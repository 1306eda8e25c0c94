//! Lightweight interpreter backend on tract.
//!
//! Runs the full-precision graph through `tract-onnx`'s optimized typed plan.
//! tract plans take `&self` to run and are safe to share across threads, so no
//! session pool is needed here. tract reports errors through `anyhow`, which
//! does not implement `std::error::Error` directly; messages are carried
//! instead of sources.

use crate::core::config::MODEL_INPUT_SIZE;
use crate::core::errors::{SignError, SignResult};
use crate::inference::{ScoreBackend, ScoreVector, ensure_score_contract};
use ndarray::Array4;
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::debug;

type Plan = TypedRunnableModel<TypedModel>;

/// tract interpreter backend over the full-precision artifact.
pub struct LiteBackend {
    plan: Plan,
    model_name: String,
}

impl std::fmt::Debug for LiteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiteBackend")
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl LiteBackend {
    /// Loads and optimizes the interpreter plan, pinning the input fact to the
    /// fixed `(1, 224, 224, 3)` f32 shape.
    pub fn load(path: &Path) -> SignResult<Self> {
        let side = MODEL_INPUT_SIZE as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, side, side, 3)),
                )
            })
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| {
                SignError::model_load_msg(path, format!("failed to build tract plan: {e}"))
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sign_classifier_lite")
            .to_string();

        debug!(model = %model_name, "lite backend plan ready");
        Ok(Self { plan, model_name })
    }
}

impl ScoreBackend for LiteBackend {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn score(&self, input: &Array4<f32>) -> SignResult<ScoreVector> {
        let data = input.as_slice().ok_or_else(|| {
            SignError::backend_msg(&self.model_name, "input tensor is not contiguous")
        })?;
        let tensor = Tensor::from_shape(input.shape(), data).map_err(|e| {
            SignError::backend_msg(&self.model_name, format!("input tensor rejected: {e}"))
        })?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| SignError::backend_msg(&self.model_name, format!("run failed: {e}")))?;

        let scores = outputs[0].as_slice::<f32>().map_err(|e| {
            SignError::backend_msg(
                &self.model_name,
                format!("failed to read f32 output tensor: {e}"),
            )
        })?;

        ensure_score_contract(&self.model_name, scores.len())?;
        Ok(scores.to_vec())
    }
}
