//! Header readers, one per supported container format.
//!
//! Each reader is a pure function over a byte slice: it either lifts a
//! positive width/height pair out of the fixed-offset or marker-delimited
//! header fields, or returns `None`. No reader decodes pixel data and no
//! reader touches a byte past the end of the slice.

pub mod gif;
pub mod jpeg;
pub mod png;
pub mod webp;

use crate::types::{Dimensions, ImageFormat};

impl ImageFormat {
    /// Identifies the container from its leading magic bytes alone.
    #[must_use]
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&png::PNG_MAGIC) {
            return Some(Self::Png);
        }
        if data.starts_with(&gif::GIF_MAGIC) {
            return Some(Self::Gif);
        }
        if data.starts_with(&jpeg::JPEG_SOI) {
            return Some(Self::Jpeg);
        }
        if data.len() >= 12 && data[..4] == webp::RIFF_MAGIC && data[8..12] == webp::WEBP_TAG {
            return Some(Self::WebP);
        }
        None
    }

    /// Runs this format's header reader against the buffer.
    #[must_use]
    pub fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions> {
        match self {
            Self::Png => png::read_dimensions(data),
            Self::Gif => gif::read_dimensions(data),
            Self::Jpeg => jpeg::read_dimensions(data),
            Self::WebP => webp::read_dimensions(data),
        }
    }
}
