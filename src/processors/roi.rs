//! Region-of-interest validation and extraction.
//!
//! An ROI that partially exceeds the frame is clamped to the valid
//! sub-rectangle; only an ROI whose intersection with the frame has zero area
//! is rejected. A default region is never silently substituted for a bad one.

use crate::core::config::MODEL_INPUT_SIZE;
use crate::core::errors::{SignError, SignResult};
use image::{RgbImage, imageops};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A region of interest: pixel offset and size within a frame.
///
/// Offsets may be negative (the region then starts outside the frame and is
/// clamped); width and height are sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    /// Horizontal offset of the left edge.
    pub x: i32,
    /// Vertical offset of the top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Roi {
    /// Creates an ROI from offset and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Builds an ROI from the wire form `[x, y, w, h]`.
    ///
    /// Negative sizes denote an empty region and will fail extraction.
    pub fn from_array(raw: [i32; 4]) -> Self {
        Self {
            x: raw[0],
            y: raw[1],
            w: raw[2].max(0) as u32,
            h: raw[3].max(0) as u32,
        }
    }

    /// Computes the intersection of this ROI with a `frame_w` x `frame_h`
    /// frame, as a clamped `(x, y, w, h)` rectangle. Returns `None` when the
    /// intersection has zero area.
    pub fn intersect(&self, frame_w: u32, frame_h: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.w)).min(i64::from(frame_w));
        let y1 = (i64::from(self.y) + i64::from(self.h)).min(i64::from(frame_h));

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

/// Full-frame approximation matching the model input size.
impl Default for Roi {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: MODEL_INPUT_SIZE,
            h: MODEL_INPUT_SIZE,
        }
    }
}

/// Extracts the ROI sub-image from a frame.
///
/// The rectangle is clamped to the frame bounds; a zero-area intersection
/// fails with [`SignError::InvalidRoi`]. An ROI fully inside the frame yields
/// a sub-image of exactly `(roi.w, roi.h)` pixels.
pub fn extract_roi(frame: &RgbImage, roi: Roi) -> SignResult<RgbImage> {
    let (frame_w, frame_h) = frame.dimensions();

    let Some((x, y, w, h)) = roi.intersect(frame_w, frame_h) else {
        return Err(SignError::InvalidRoi {
            x: roi.x,
            y: roi.y,
            w: roi.w,
            h: roi.h,
            frame_w,
            frame_h,
        });
    };

    if (x, y, w, h) != (roi.x as u32, roi.y as u32, roi.w, roi.h) {
        debug!(
            "ROI ({}, {}, {}, {}) clamped to ({x}, {y}, {w}, {h}) for {frame_w}x{frame_h} frame",
            roi.x, roi.y, roi.w, roi.h
        );
    }

    Ok(imageops::crop_imm(frame, x, y, w, h).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| image::Rgb([x as u8, y as u8, 0]))
    }

    #[test]
    fn inside_roi_yields_exact_dimensions() {
        let img = frame(300, 300);
        let sub = extract_roi(&img, Roi::new(10, 20, 100, 50)).unwrap();
        assert_eq!(sub.dimensions(), (100, 50));
        // Top-left pixel of the crop comes from (10, 20) in the frame.
        assert_eq!(sub.get_pixel(0, 0), &image::Rgb([10, 20, 0]));
    }

    #[test]
    fn fully_outside_roi_is_rejected() {
        let img = frame(224, 224);
        let err = extract_roi(&img, Roi::new(500, 500, 50, 50)).unwrap_err();
        assert!(matches!(err, SignError::InvalidRoi { .. }));
    }

    #[test]
    fn zero_size_roi_is_rejected() {
        let img = frame(224, 224);
        assert!(extract_roi(&img, Roi::new(10, 10, 0, 50)).is_err());
        assert!(extract_roi(&img, Roi::new(10, 10, 50, 0)).is_err());
    }

    #[test]
    fn partial_overlap_is_clamped() {
        let img = frame(224, 224);
        let sub = extract_roi(&img, Roi::new(200, 200, 100, 100)).unwrap();
        assert_eq!(sub.dimensions(), (24, 24));

        let sub = extract_roi(&img, Roi::new(-50, -50, 100, 100)).unwrap();
        assert_eq!(sub.dimensions(), (50, 50));
        assert_eq!(sub.get_pixel(0, 0), &image::Rgb([0, 0, 0]));
    }

    #[test]
    fn negative_wire_sizes_mean_empty() {
        let roi = Roi::from_array([0, 0, -10, 224]);
        assert_eq!(roi.w, 0);
        let img = frame(224, 224);
        assert!(extract_roi(&img, roi).is_err());
    }

    #[test]
    fn default_matches_model_input() {
        let roi = Roi::default();
        assert_eq!((roi.x, roi.y, roi.w, roi.h), (0, 0, 224, 224));
    }
}
