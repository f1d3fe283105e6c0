//! Image decoding and conversion into the classifier input tensor

use crate::io::configuration::{INPUT_CHANNELS, INPUT_RESOLUTION, PIXEL_OFFSET};
use crate::io::error::{AnalysisError, Result};
use image::DynamicImage;
use image::imageops::{self, FilterType};
use ndarray::Array4;
use std::path::Path;

/// Decode an image file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a supported image
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path_buf = path.as_ref().to_path_buf();
    image::open(&path_buf).map_err(|e| AnalysisError::ImageLoad {
        path: path_buf,
        source: e,
    })
}

/// Shape of the tensor produced by [`preprocess_image`]
pub const fn input_shape() -> (usize, usize, usize, usize) {
    let side = INPUT_RESOLUTION as usize;
    (1, side, side, INPUT_CHANNELS)
}

/// Build the classifier input tensor for an image
///
/// The image is resized to a square of [`INPUT_RESOLUTION`] pixels with
/// nearest-neighbour sampling, every RGB channel is mapped from `0..=255`
/// onto `-1.0..=1.0`, and a leading batch axis of length one is added.
/// Alpha is discarded.
pub fn preprocess_image(image: &DynamicImage) -> Array4<f32> {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, INPUT_RESOLUTION, INPUT_RESOLUTION, FilterType::Nearest);

    let mut tensor = Array4::zeros(input_shape());
    for (x, y, pixel) in resized.enumerate_pixels() {
        for (c, &value) in pixel.0.iter().enumerate() {
            if let Some(slot) = tensor.get_mut((0, y as usize, x as usize, c)) {
                *slot = normalize_channel(value);
            }
        }
    }
    tensor
}

/// Map a channel value from `0..=255` onto `-1.0..=1.0`
pub fn normalize_channel(value: u8) -> f32 {
    (f32::from(value) - PIXEL_OFFSET) / PIXEL_OFFSET
}
