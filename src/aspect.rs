use serde::{Deserialize, Serialize};

/// Canonical aspect-ratio buckets used for gallery layout.
///
/// The set is closed: every positive width/height pair maps to exactly one
/// of these five labels. Serialized form is the `"W:H"` string, which is
/// what the upload pipeline persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    /// Candidates in tie-break order: the first equidistant label wins.
    pub const ALL: [Self; 5] = [
        Self::Square,
        Self::Wide,
        Self::Tall,
        Self::Standard,
        Self::Portrait,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Wide => "16:9",
            Self::Tall => "9:16",
            Self::Standard => "4:3",
            Self::Portrait => "3:4",
        }
    }

    // Comparison value only; never part of the public surface.
    const fn value(self) -> f64 {
        match self {
            Self::Square => 1.0,
            Self::Wide => 16.0 / 9.0,
            Self::Tall => 9.0 / 16.0,
            Self::Standard => 4.0 / 3.0,
            Self::Portrait => 3.0 / 4.0,
        }
    }

    /// Maps a width/height pair to the nearest canonical bucket.
    ///
    /// Total over positive inputs. Zero on either side is a caller error:
    /// callers are expected to hand over dimensions that came out of a
    /// successful sniff, which never produces zeros.
    #[must_use]
    pub fn closest(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "zero dimension");

        let ratio = width as f64 / height as f64;
        let mut best = Self::Square;
        let mut best_distance = f64::INFINITY;
        for candidate in Self::ALL {
            let distance = (ratio - candidate.value()).abs();
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
