//! Utility functions shared across the pipeline.

pub mod image;

pub use image::{decode_base64_image, decode_image_bytes, encode_base64_png, strip_data_uri};
