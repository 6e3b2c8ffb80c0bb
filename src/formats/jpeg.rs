use memchr::memchr;

use crate::types::Dimensions;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// A SOF marker is followed by length (2), precision (1), height (2) and
/// width (2); sizing a frame therefore needs 8 bytes past the marker.
const SOF_READ_SPAN: usize = 8;

/// SOF0-SOF15, minus DHT (C4), JPG (C8) and DAC (CC) which share the range
/// but carry no frame header.
#[inline]
pub const fn is_sof_marker(byte: u8) -> bool {
    matches!(byte, 0xC0..=0xCF) && byte != 0xC4 && byte != 0xC8 && byte != 0xCC
}

/// Markers with no length field: TEM, RST0-RST7 and a stray SOI. Skipping
/// these by a phantom length would land the scan in entropy data.
#[inline]
pub const fn is_standalone_marker(byte: u8) -> bool {
    byte == 0x01 || matches!(byte, 0xD0..=0xD8)
}

/// Scans the marker stream for a SOF segment and reads the frame size out
/// of it. Tolerates fill bytes, `FF FF` runs and stuffed `FF 00` pairs;
/// gives up at EOI or SOS, since no frame header can follow either.
pub fn read_dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.len() < 2 || data[..2] != JPEG_SOI {
        return None;
    }

    let mut pos = 2usize;

    while pos + SOF_READ_SPAN < data.len() {
        if data[pos] != 0xFF {
            // Fill bytes; hop to the next candidate marker.
            match memchr(0xFF, &data[pos..]) {
                Some(skip) => pos += skip,
                None => return None,
            }
            continue;
        }

        let marker = data[pos + 1];

        if marker == 0xFF {
            pos += 1;
            continue;
        }

        if marker == 0x00 {
            // Byte stuffing, not a marker.
            pos += 2;
            continue;
        }

        if is_standalone_marker(marker) {
            pos += 2;
            continue;
        }

        if marker == 0xD9 || marker == 0xDA {
            return None;
        }

        if is_sof_marker(marker) {
            let height = u16::from_be_bytes([data[pos + 5], data[pos + 6]]);
            let width = u16::from_be_bytes([data[pos + 7], data[pos + 8]]);
            return Dimensions::new(u32::from(width), u32::from(height));
        }

        let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if seg_len < 2 {
            return None;
        }

        pos += 2 + seg_len;
    }

    None
}
