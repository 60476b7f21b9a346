//! Image preprocessing into the classifier's fixed input geometry.

use crate::constants::input::{CHANNELS, PAD_FILL, TARGET_SIZE};
use crate::error::Result;
use crate::vision::decode_image;
use image::imageops::FilterType;
use image::{Rgb, RgbImage};

/// Fixed-geometry RGB pixel buffer matching the classifier input shape.
///
/// Invariant: exactly `TARGET_SIZE` x `TARGET_SIZE` pixels, 3 channels,
/// 8 bits per channel, row-major RGB interleaved.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    fn from_image(image: &RgbImage) -> Self {
        debug_assert_eq!(image.dimensions(), (TARGET_SIZE, TARGET_SIZE));
        Self {
            data: image.as_raw().clone(),
        }
    }

    /// Edge length of the square buffer in pixels.
    pub fn size(&self) -> u32 {
        TARGET_SIZE
    }

    /// Number of color channels.
    pub fn channels(&self) -> usize {
        CHANNELS
    }

    /// Raw interleaved RGB bytes, `size * size * channels` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGB value at pixel coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = (y * TARGET_SIZE + x) as usize * CHANNELS;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }
}

/// Convert encoded image bytes into a classifier-ready pixel buffer.
///
/// Steps: decode, force 3-channel RGB, downscale preserving aspect ratio
/// so the larger dimension fits the target box (never upscaling), then pad
/// symmetrically with black to exactly `TARGET_SIZE` square. Pure function
/// of the input bytes.
pub fn preprocess(raw: &[u8]) -> Result<PixelBuffer> {
    let rgb = decode_image(raw)?.to_rgb8();
    let scaled = scale_to_fit(&rgb);
    Ok(pad_to_target(&scaled))
}

/// Downscale so the larger dimension equals the target size, keeping the
/// aspect ratio. Images already inside the target box pass through.
fn scale_to_fit(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    if width <= TARGET_SIZE && height <= TARGET_SIZE {
        return image.clone();
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = f64::from(TARGET_SIZE) / f64::from(width.max(height));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled_width = ((f64::from(width) * scale).round() as u32).clamp(1, TARGET_SIZE);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled_height = ((f64::from(height) * scale).round() as u32).clamp(1, TARGET_SIZE);

    image::imageops::resize(image, scaled_width, scaled_height, FilterType::Triangle)
}

/// Pad symmetrically with the fill color to the exact target square.
///
/// Floor division on the leading edge, so an odd pixel of slack goes to
/// the trailing edge.
fn pad_to_target(image: &RgbImage) -> PixelBuffer {
    let (width, height) = image.dimensions();
    if width == TARGET_SIZE && height == TARGET_SIZE {
        return PixelBuffer::from_image(image);
    }

    let left = (TARGET_SIZE - width) / 2;
    let top = (TARGET_SIZE - height) / 2;

    let mut padded = RgbImage::from_pixel(TARGET_SIZE, TARGET_SIZE, Rgb(PAD_FILL));
    image::imageops::overlay(&mut padded, image, i64::from(left), i64::from(top));
    PixelBuffer::from_image(&padded)
}
