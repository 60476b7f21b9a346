//! Image decoding from uploaded bytes.

use crate::error::{Error, Result};
use image::DynamicImage;

/// Decode encoded image bytes into a dynamic image.
///
/// The format is sniffed from the byte content, not the filename, so a
/// renamed text file fails here regardless of its extension.
pub fn decode_image(raw: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(raw).map_err(|e| Error::ImageDecode {
        reason: e.to_string(),
    })
}
