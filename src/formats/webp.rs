use crate::types::Dimensions;

pub const RIFF_MAGIC: [u8; 4] = *b"RIFF";
pub const WEBP_TAG: [u8; 4] = *b"WEBP";

/// RIFF header (12) + first chunk tag (4).
const MIN_HEADER_LEN: usize = 16;

/// VP8 / VP8X frame fields both end at byte 30.
const MIN_VP8_LEN: usize = 30;
const MIN_VP8X_LEN: usize = 30;
/// VP8L packed size field ends at byte 25.
const MIN_VP8L_LEN: usize = 25;

#[inline]
fn le16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

#[inline]
fn le24(data: &[u8], offset: usize) -> u32 {
    u32::from(data[offset]) | u32::from(data[offset + 1]) << 8 | u32::from(data[offset + 2]) << 16
}

/// Reads the frame size out of a WebP container. The chunk tag at offset 12
/// picks one of three encodings: lossy `VP8 ` keeps 14-bit dimensions in the
/// frame header, lossless `VP8L` packs both into one little-endian u32, and
/// extended `VP8X` stores the canvas as two 24-bit minus-one fields.
pub fn read_dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.len() < MIN_HEADER_LEN || data[..4] != RIFF_MAGIC || data[8..12] != WEBP_TAG {
        return None;
    }

    let (width, height) = match &data[12..16] {
        b"VP8 " => {
            if data.len() < MIN_VP8_LEN {
                return None;
            }
            let width = u32::from(le16(data, 26) & 0x3FFF);
            let height = u32::from(le16(data, 28) & 0x3FFF);
            (width, height)
        }
        b"VP8L" => {
            if data.len() < MIN_VP8L_LEN {
                return None;
            }
            let packed = u32::from_le_bytes([data[21], data[22], data[23], data[24]]);
            let width = (packed & 0x3FFF) + 1;
            let height = ((packed >> 14) & 0x3FFF) + 1;
            (width, height)
        }
        b"VP8X" => {
            if data.len() < MIN_VP8X_LEN {
                return None;
            }
            // Three-byte reads: the fields abut, so a wider read would
            // alias the neighboring field.
            let width = le24(data, 24) + 1;
            let height = le24(data, 27) + 1;
            (width, height)
        }
        _ => return None,
    };

    Dimensions::new(width, height)
}
