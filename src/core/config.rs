//! Configuration for the classifier and its inference backends.
//!
//! Configuration is plain serde data, loadable from JSON, and validated up
//! front with [`ClassifierConfig::validate`] so that startup fails before any
//! heavy initialization when a setting is out of range.

use crate::core::errors::{SignError, SignResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Side length of the square model input in pixels.
pub const MODEL_INPUT_SIZE: u32 = 224;

/// Which inference backend variant to load at startup.
///
/// All variants satisfy the same scoring contract (29 scores per invocation);
/// they trade accuracy against latency and binary footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Full-precision model executed by ONNX Runtime.
    #[default]
    Dense,
    /// Full-precision model executed by the pure-Rust tract interpreter.
    Lite,
    /// u8-quantized model executed by tract, with explicit input quantization
    /// and output dequantization. Lower numeric precision by design.
    Quantized,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Dense => write!(f, "dense"),
            BackendKind::Lite => write!(f, "lite"),
            BackendKind::Quantized => write!(f, "quantized"),
        }
    }
}

/// Affine quantization parameters for one tensor: `real = (q - zero_point) * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantParams {
    /// Scale factor. Must be positive and finite.
    pub scale: f32,
    /// Zero point in the quantized domain.
    pub zero_point: i32,
}

impl QuantParams {
    /// Quantizes a real value to u8, rounding to nearest and saturating.
    pub fn quantize(&self, value: f32) -> u8 {
        let q = (value / self.scale).round() + self.zero_point as f32;
        q.clamp(0.0, 255.0) as u8
    }

    /// Dequantizes a u8 value back to the real domain.
    pub fn dequantize(&self, q: u8) -> f32 {
        (q as i32 - self.zero_point) as f32 * self.scale
    }
}

/// Quantization parameters for the quantized backend's input and output tensors.
///
/// Defaults match a TFLite-style export of a model trained on `[0,1]` inputs
/// with a softmax head: input covers `[0,1]` across 256 steps, output covers
/// `[0,1)` across 256 steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizationParams {
    /// Input tensor quantization.
    pub input: QuantParams,
    /// Output tensor quantization, applied only when the graph emits u8.
    pub output: QuantParams,
}

impl Default for QuantizationParams {
    fn default() -> Self {
        Self {
            input: QuantParams {
                scale: 1.0 / 255.0,
                zero_point: 0,
            },
            output: QuantParams {
                scale: 1.0 / 256.0,
                zero_point: 0,
            },
        }
    }
}

/// Configuration for building a [`SignPredictor`](crate::predictor::SignPredictor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Backend variant to load.
    #[serde(default)]
    pub backend: BackendKind,
    /// Path to the local model artifact. Provisioning (remote fetch) happens
    /// before load; see [`crate::artifact`].
    pub model_path: PathBuf,
    /// Model input tensor name. Discovered from the session when omitted
    /// (dense backend only; tract addresses inputs positionally).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    /// Number of pooled ONNX Runtime sessions for concurrent scoring
    /// (dense backend only). Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_pool_size: Option<usize>,
    /// Quantization parameters (quantized backend only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization: Option<QuantizationParams>,
}

impl ClassifierConfig {
    /// Creates a configuration for the given backend and artifact path, with
    /// defaults for everything else.
    pub fn new(backend: BackendKind, model_path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            model_path: model_path.into(),
            input_name: None,
            session_pool_size: None,
            quantization: None,
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SignResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| SignError::config(format!("invalid classifier config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks the session pool size and quantization parameters. Artifact
    /// existence is deliberately not checked here: provisioning may populate
    /// the path after configuration is parsed.
    pub fn validate(&self) -> SignResult<()> {
        if self.model_path.as_os_str().is_empty() {
            return Err(SignError::config("model_path must not be empty"));
        }

        if let Some(size) = self.session_pool_size
            && size == 0
        {
            return Err(SignError::config("session_pool_size must be at least 1"));
        }

        if let Some(q) = &self.quantization {
            for (name, params) in [("input", q.input), ("output", q.output)] {
                if !(params.scale.is_finite() && params.scale > 0.0) {
                    return Err(SignError::config(format!(
                        "{name} quantization scale must be positive and finite, got {}",
                        params.scale
                    )));
                }
            }
        }

        if self.quantization.is_some() && self.backend != BackendKind::Quantized {
            return Err(SignError::config(format!(
                "quantization parameters are only valid for the quantized backend, got {}",
                self.backend
            )));
        }

        Ok(())
    }
}
