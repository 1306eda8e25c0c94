//! Pixel normalization into the model input tensor.
//!
//! Turns an RGB sub-image of any size into the fixed `(1, 224, 224, 3)` f32
//! tensor every backend consumes. The steps run in a fixed order: spatial
//! resize first (on integer pixels, so interpolation sees the original value
//! range), then scaling of `[0, 255]` into `[0.0, 1.0]`, then insertion of the
//! leading batch dimension. Channel order is RGB throughout: the decoder
//! already produces RGB and the resize operates per channel, so no reordering
//! pass is needed.

use crate::core::config::MODEL_INPUT_SIZE;
use crate::core::errors::{SignError, SignResult};
use image::{RgbImage, imageops, imageops::FilterType};
use ndarray::Array4;

/// Normalizes sub-images into model input tensors.
///
/// Holds the target spatial size and the pixel scale factor. The defaults
/// (224x224, 1/255) match the trained model; a different scale is only useful
/// for experiments and must stay positive.
#[derive(Debug, Clone)]
pub struct Normalize {
    /// Target side length of the square model input.
    size: u32,
    /// Multiplier applied to each u8 pixel value.
    scale: f32,
}

impl Normalize {
    /// Creates a normalizer with an explicit target size and pixel scale.
    pub fn new(size: u32, scale: f32) -> SignResult<Self> {
        if size == 0 {
            return Err(SignError::config("normalization size must be positive"));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SignError::config(format!(
                "normalization scale must be positive and finite, got {scale}"
            )));
        }
        Ok(Self { size, scale })
    }

    /// Target spatial size (side length in pixels).
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Produces the `(1, size, size, 3)` NHWC tensor for a sub-image.
    ///
    /// Resizing uses bilinear interpolation (`FilterType::Triangle`), which is
    /// deterministic for a fixed input. Every output value lies in
    /// `[0.0, scale * 255]`, i.e. `[0.0, 1.0]` with the default scale.
    pub fn apply(&self, sub: &RgbImage) -> Array4<f32> {
        let resized = if sub.dimensions() == (self.size, self.size) {
            sub.clone()
        } else {
            imageops::resize(sub, self.size, self.size, FilterType::Triangle)
        };

        let side = self.size as usize;
        let mut tensor = Array4::<f32>::zeros((1, side, side, 3));
        for (x, y, pixel) in resized.enumerate_pixels() {
            let (x, y) = (x as usize, y as usize);
            tensor[[0, y, x, 0]] = f32::from(pixel[0]) * self.scale;
            tensor[[0, y, x, 1]] = f32::from(pixel[1]) * self.scale;
            tensor[[0, y, x, 2]] = f32::from(pixel[2]) * self.scale;
        }
        tensor
    }
}

/// Model defaults: 224x224, pixels scaled by 1/255.
impl Default for Normalize {
    fn default() -> Self {
        Self {
            size: MODEL_INPUT_SIZE,
            scale: 1.0 / 255.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_shape_is_fixed_for_any_input_size() {
        let normalize = Normalize::default();
        for (w, h) in [(224, 224), (64, 128), (500, 10), (1, 1)] {
            let img = RgbImage::from_pixel(w, h, image::Rgb([10, 128, 255]));
            let tensor = normalize.apply(&img);
            assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
        }
    }

    #[test]
    fn values_lie_in_unit_interval() {
        let normalize = Normalize::default();
        let img = RgbImage::from_fn(37, 91, |x, y| {
            image::Rgb([(x * 7) as u8, (y * 3) as u8, 255])
        });
        let tensor = normalize.apply(&img);
        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn white_maps_to_one_black_to_zero() {
        let normalize = Normalize::default();
        let white = normalize.apply(&RgbImage::from_pixel(10, 10, image::Rgb([255, 255, 255])));
        assert!(white.iter().all(|&v| (v - 1.0).abs() < 1e-6));

        let black = normalize.apply(&RgbImage::from_pixel(10, 10, image::Rgb([0, 0, 0])));
        assert!(black.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn exact_size_input_keeps_pixel_values() {
        let normalize = Normalize::default();
        let img = RgbImage::from_fn(224, 224, |x, y| image::Rgb([x as u8, y as u8, 51]));
        let tensor = normalize.apply(&img);
        // No interpolation on an exact-size input: pixel (3, 5) maps directly.
        assert!((tensor[[0, 5, 3, 0]] - 3.0 / 255.0).abs() < 1e-6);
        assert!((tensor[[0, 5, 3, 1]] - 5.0 / 255.0).abs() < 1e-6);
        assert!((tensor[[0, 5, 3, 2]] - 51.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn resize_is_deterministic() {
        let normalize = Normalize::default();
        let img = RgbImage::from_fn(123, 77, |x, y| image::Rgb([(x ^ y) as u8, 0, 200]));
        assert_eq!(normalize.apply(&img), normalize.apply(&img));
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(Normalize::new(0, 1.0 / 255.0).is_err());
        assert!(Normalize::new(224, 0.0).is_err());
        assert!(Normalize::new(224, f32::NAN).is_err());
    }
}
