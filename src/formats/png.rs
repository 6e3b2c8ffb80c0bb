use crate::types::Dimensions;

pub const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Signature (8) + IHDR length/type (8) + width and height (8).
const MIN_HEADER_LEN: usize = 24;

const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;

/// Reads the IHDR width/height fields without touching the rest of the
/// chunk. PNG is big-endian throughout.
#[inline]
pub fn read_dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.len() < MIN_HEADER_LEN || data[..4] != PNG_MAGIC {
        return None;
    }

    let width = u32::from_be_bytes([
        data[WIDTH_OFFSET],
        data[WIDTH_OFFSET + 1],
        data[WIDTH_OFFSET + 2],
        data[WIDTH_OFFSET + 3],
    ]);
    let height = u32::from_be_bytes([
        data[HEIGHT_OFFSET],
        data[HEIGHT_OFFSET + 1],
        data[HEIGHT_OFFSET + 2],
        data[HEIGHT_OFFSET + 3],
    ]);

    Dimensions::new(width, height)
}
