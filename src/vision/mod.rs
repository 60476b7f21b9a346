//! Image decoding and preprocessing pipeline.

mod decode;
mod preprocess;

pub use decode::decode_image;
pub use preprocess::{preprocess, PixelBuffer};
