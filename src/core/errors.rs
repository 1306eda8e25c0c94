//! Error types for the hand-sign classification pipeline.
//!
//! This module defines the error taxonomy shared across the crate: request-scoped
//! errors (bad image payloads, empty ROIs, failed backend invocations) and fatal
//! startup errors (missing or corrupt model artifacts, invalid configuration).
//! Helper constructors keep call sites short while preserving error chaining.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenient result alias for pipeline operations.
pub type SignResult<T> = Result<T, SignError>;

/// Errors produced by the hand-sign classification pipeline.
///
/// Request-scoped variants (`Decode`, `InvalidRoi`, `BackendInvocation`) are
/// recoverable: they fail a single request and are surfaced to the caller as an
/// explicit error payload. `ModelLoad` and `ConfigError` occur during startup
/// and abort initialization; there is no partial-service mode.
#[derive(Error, Debug)]
pub enum SignError {
    /// The request payload could not be decoded into an image.
    ///
    /// Covers both malformed base64 and byte streams that no supported image
    /// format can parse.
    #[error("image decode failed: {message}")]
    Decode {
        /// What part of decoding failed.
        message: String,
        /// The underlying decoder error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested ROI has no overlap with the frame.
    #[error(
        "invalid ROI: rectangle ({x}, {y}, {w}, {h}) has empty intersection with {frame_w}x{frame_h} frame"
    )]
    InvalidRoi {
        /// ROI x offset in pixels.
        x: i32,
        /// ROI y offset in pixels.
        y: i32,
        /// ROI width in pixels.
        w: u32,
        /// ROI height in pixels.
        h: u32,
        /// Frame width in pixels.
        frame_w: u32,
        /// Frame height in pixels.
        frame_h: u32,
    },

    /// The model artifact is missing or could not be turned into a usable
    /// inference handle. Fatal at startup.
    #[error("model load failed for '{}': {message}", path.display())]
    ModelLoad {
        /// Path of the artifact that failed to load.
        path: PathBuf,
        /// What went wrong.
        message: String,
        /// The underlying loader error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A scoring call failed after the backend was loaded successfully.
    ///
    /// Includes output-contract violations such as a score vector whose length
    /// does not match the label table. Never retried automatically.
    #[error("backend invocation failed for model '{model}': {message}")]
    BackendInvocation {
        /// Name of the backend/model that failed.
        model: String,
        /// What went wrong.
        message: String,
        /// The underlying engine error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid configuration detected before any work started.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl SignError {
    /// Creates a `Decode` error with an underlying source.
    pub fn decode(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SignError::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a `Decode` error without a source (e.g. an empty payload).
    pub fn decode_msg(message: impl Into<String>) -> Self {
        SignError::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `ModelLoad` error with an underlying source.
    pub fn model_load(
        path: impl AsRef<Path>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SignError::ModelLoad {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a `ModelLoad` error without a source (e.g. a missing file).
    pub fn model_load_msg(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        SignError::ModelLoad {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `BackendInvocation` error with an underlying source.
    pub fn backend(
        model: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SignError::BackendInvocation {
            model: model.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a `BackendInvocation` error without a source.
    ///
    /// Used for engines whose error types do not implement `std::error::Error`
    /// (tract reports through `anyhow`) and for contract violations detected by
    /// this crate itself.
    pub fn backend_msg(model: impl Into<String>, message: impl Into<String>) -> Self {
        SignError::BackendInvocation {
            model: model.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `ConfigError`.
    pub fn config(message: impl Into<String>) -> Self {
        SignError::ConfigError {
            message: message.into(),
        }
    }

    /// Returns true for errors that fail a single request rather than the process.
    pub fn is_request_scoped(&self) -> bool {
        matches!(
            self,
            SignError::Decode { .. }
                | SignError::InvalidRoi { .. }
                | SignError::BackendInvocation { .. }
        )
    }
}
