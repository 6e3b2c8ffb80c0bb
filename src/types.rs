use serde::{Deserialize, Serialize};

use crate::aspect::AspectRatio;

/// Image container formats this crate can size from header bytes alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Gif,
    Jpeg,
    WebP,
}

impl ImageFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Jpeg => "JPEG",
            Self::WebP => "WebP",
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }

    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pixel dimensions lifted out of an image header.
///
/// Both fields are always positive; a failed sniff produces no
/// `Dimensions` at all rather than a zeroed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Returns `None` when either side is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    #[must_use]
    pub fn aspect(&self) -> AspectRatio {
        AspectRatio::closest(self.width, self.height)
    }

    #[must_use]
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything a header sniff yields: the recognized format plus its
/// declared pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub dimensions: Dimensions,
}

impl ImageInfo {
    #[must_use]
    pub fn aspect(&self) -> AspectRatio {
        self.dimensions.aspect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert_eq!(ImageFormat::WebP.extension(), "webp");
    }

    #[test]
    fn test_media_type() {
        assert_eq!(ImageFormat::Gif.media_type(), "image/gif");
        assert_eq!(ImageFormat::Jpeg.media_type(), "image/jpeg");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ImageFormat::Jpeg), "JPEG");
        assert_eq!(format!("{}", ImageFormat::WebP), "WebP");
    }

    #[test]
    fn test_dimensions_reject_zero() {
        assert!(Dimensions::new(0, 100).is_none());
        assert!(Dimensions::new(100, 0).is_none());
        assert!(Dimensions::new(0, 0).is_none());
        assert!(Dimensions::new(1, 1).is_some());
    }

    #[test]
    fn test_dimensions_display() {
        let dims = Dimensions::new(1920, 1080).unwrap();
        assert_eq!(format!("{dims}"), "1920x1080");
        assert_eq!(dims.pixel_count(), 2_073_600);
    }
}
