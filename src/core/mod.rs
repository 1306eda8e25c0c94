//! Core building blocks of the classification pipeline.
//!
//! This module contains configuration management and the crate-wide error
//! taxonomy, plus the tracing bootstrap used by binaries and integration
//! hosts.

pub mod config;
pub mod errors;

pub use config::{BackendKind, ClassifierConfig, MODEL_INPUT_SIZE, QuantParams, QuantizationParams};
pub use errors::{SignError, SignResult};

/// Initializes the tracing subscriber for logging.
///
/// Sets up an environment-filtered fmt subscriber. Typically called once at
/// application start; the library itself only emits events.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
