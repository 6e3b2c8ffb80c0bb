//! Header-level image sniffing for gallery layout.
//!
//! Pulls pixel dimensions out of PNG, GIF, JPEG and WebP buffers by reading
//! header fields directly, with no decoder in the loop, then buckets the
//! result into a closed set of canonical aspect ratios. Detection failure
//! is an expected outcome, not an error: every entry point degrades to
//! absence (or the `1:1` fallback bucket) on unrecognized, truncated or
//! malformed input, and none of them can read out of bounds or panic.
//!
//! ```
//! use imgprobe::AspectRatio;
//!
//! let png = [
//!     0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
//!     0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x07, 0x80, 0x00, 0x00, 0x04, 0x38,
//! ];
//! let dims = imgprobe::detect_dimensions(&png).unwrap();
//! assert_eq!((dims.width, dims.height), (1920, 1080));
//! assert_eq!(dims.aspect(), AspectRatio::Wide);
//! ```

pub mod aspect;
mod error;
pub mod formats;
mod types;

use tracing::debug;

pub use aspect::AspectRatio;
pub use error::{Result, SniffError};
pub use types::{Dimensions, ImageFormat, ImageInfo};

/// Sniffs the format and reads its declared dimensions, reporting which of
/// the two steps failed.
pub fn probe(data: &[u8]) -> Result<ImageInfo> {
    let format = ImageFormat::sniff(data).ok_or_else(|| {
        debug!(len = data.len(), "no known image magic");
        SniffError::UnknownFormat
    })?;

    let dimensions = format.read_dimensions(data).ok_or_else(|| {
        debug!(%format, len = data.len(), "header unreadable");
        SniffError::BadHeader { format }
    })?;

    Ok(ImageInfo { format, dimensions })
}

/// Dimensions of the image in `data`, or `None` when the buffer is not a
/// recognizable image header.
#[must_use]
pub fn detect_dimensions(data: &[u8]) -> Option<Dimensions> {
    probe(data).ok().map(|info| info.dimensions)
}

/// Aspect bucket for the image in `data`, falling back to `1:1` when
/// detection fails.
#[must_use]
pub fn classify_aspect(data: &[u8]) -> AspectRatio {
    detect_dimensions(data)
        .map(|dims| dims.aspect())
        .unwrap_or_default()
}
