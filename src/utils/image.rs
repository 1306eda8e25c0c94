//! Image payload decoding helpers.
//!
//! Requests carry images as base64 text, either raw or wrapped in a data URI
//! (`data:image/png;base64,....`). Decoding strips the marker if present,
//! base64-decodes with the standard alphabet, and parses the bytes with any
//! format the `image` crate supports. Decoded frames are RGB, row-major,
//! origin top-left.

use crate::core::errors::{SignError, SignResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::RgbImage;

/// Marker separating a data-URI header from its payload.
const DATA_URI_MARKER: &str = "base64,";

/// Strips a data-URI header, returning the bare base64 payload.
///
/// Everything up to and including the first `"base64,"` marker is discarded;
/// input without the marker is returned unchanged.
pub fn strip_data_uri(data: &str) -> &str {
    match data.find(DATA_URI_MARKER) {
        Some(idx) => &data[idx + DATA_URI_MARKER.len()..],
        None => data,
    }
}

/// Decodes a base64 payload (raw or data-URI form) into an RGB frame.
pub fn decode_base64_image(data: &str) -> SignResult<RgbImage> {
    let payload = strip_data_uri(data);
    if payload.is_empty() {
        return Err(SignError::decode_msg("empty image payload"));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| SignError::decode("invalid base64 encoding", e))?;

    decode_image_bytes(&bytes)
}

/// Decodes raw encoded image bytes (PNG, JPEG, ...) into an RGB frame.
pub fn decode_image_bytes(bytes: &[u8]) -> SignResult<RgbImage> {
    if bytes.is_empty() {
        return Err(SignError::decode_msg("empty image payload"));
    }

    let img = image::load_from_memory(bytes)
        .map_err(|e| SignError::decode("unparseable image bytes", e))?;
    Ok(img.to_rgb8())
}

/// Encodes an RGB frame as a base64 PNG payload. Lossless, so decoding the
/// result reproduces the pixel data exactly; used by tests and demo tooling.
pub fn encode_base64_png(img: &RgbImage) -> SignResult<String> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|e| SignError::decode("failed to encode PNG", e))?;
    Ok(STANDARD.encode(bytes.into_inner()))
}
