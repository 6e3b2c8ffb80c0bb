use crate::types::Dimensions;

pub const GIF_MAGIC: [u8; 3] = *b"GIF";

/// Magic + version (6) + logical screen width/height (4).
const MIN_HEADER_LEN: usize = 10;

const WIDTH_OFFSET: usize = 6;
const HEIGHT_OFFSET: usize = 8;

/// Reads the logical screen descriptor. GIF is little-endian.
#[inline]
pub fn read_dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.len() < MIN_HEADER_LEN || data[..3] != GIF_MAGIC {
        return None;
    }

    let width = u16::from_le_bytes([data[WIDTH_OFFSET], data[WIDTH_OFFSET + 1]]);
    let height = u16::from_le_bytes([data[HEIGHT_OFFSET], data[HEIGHT_OFFSET + 1]]);

    Dimensions::new(u32::from(width), u32::from(height))
}
