//! Quantized interpreter backend on tract.
//!
//! Runs a u8-quantized graph: the normalized f32 tensor is quantized with the
//! configured input parameters, and the output is dequantized when the graph
//! emits u8 (exports that end in an explicit dequantize node already produce
//! f32 and pass through unchanged). Numeric precision is lower than the dense
//! and lite variants; the output contract of 29 scores per invocation is
//! identical.

use crate::core::config::{MODEL_INPUT_SIZE, QuantizationParams};
use crate::core::errors::{SignError, SignResult};
use crate::inference::{ScoreBackend, ScoreVector, ensure_score_contract};
use ndarray::Array4;
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::debug;

type Plan = TypedRunnableModel<TypedModel>;

/// tract interpreter backend over the u8-quantized artifact.
pub struct QuantizedBackend {
    plan: Plan,
    params: QuantizationParams,
    model_name: String,
}

impl std::fmt::Debug for QuantizedBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantizedBackend")
            .field("params", &self.params)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl QuantizedBackend {
    /// Loads the quantized plan, pinning the input fact to `(1, 224, 224, 3)` u8.
    pub fn load(path: &Path, params: QuantizationParams) -> SignResult<Self> {
        let side = MODEL_INPUT_SIZE as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(
                    0,
                    InferenceFact::dt_shape(u8::datum_type(), tvec!(1, side, side, 3)),
                )
            })
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| {
                SignError::model_load_msg(path, format!("failed to build quantized tract plan: {e}"))
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sign_classifier_quant")
            .to_string();

        debug!(model = %model_name, ?params, "quantized backend plan ready");
        Ok(Self {
            plan,
            params,
            model_name,
        })
    }
}

impl ScoreBackend for QuantizedBackend {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn score(&self, input: &Array4<f32>) -> SignResult<ScoreVector> {
        let data = input.as_slice().ok_or_else(|| {
            SignError::backend_msg(&self.model_name, "input tensor is not contiguous")
        })?;
        let quantized: Vec<u8> = data.iter().map(|&v| self.params.input.quantize(v)).collect();

        let tensor = Tensor::from_shape(input.shape(), &quantized).map_err(|e| {
            SignError::backend_msg(&self.model_name, format!("input tensor rejected: {e}"))
        })?;

        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| SignError::backend_msg(&self.model_name, format!("run failed: {e}")))?;

        let output = &outputs[0];
        let scores: Vec<f32> = match output.datum_type() {
            DatumType::F32 => output
                .as_slice::<f32>()
                .map_err(|e| {
                    SignError::backend_msg(
                        &self.model_name,
                        format!("failed to read f32 output: {e}"),
                    )
                })?
                .to_vec(),
            DatumType::U8 => output
                .as_slice::<u8>()
                .map_err(|e| {
                    SignError::backend_msg(
                        &self.model_name,
                        format!("failed to read u8 output: {e}"),
                    )
                })?
                .iter()
                .map(|&q| self.params.output.dequantize(q))
                .collect(),
            other => {
                return Err(SignError::backend_msg(
                    &self.model_name,
                    format!("unsupported output datum type {other:?}"),
                ));
            }
        };

        ensure_score_contract(&self.model_name, scores.len())?;
        Ok(scores)
    }
}
