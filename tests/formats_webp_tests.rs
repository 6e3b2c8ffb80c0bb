use imgprobe::{ImageFormat, detect_dimensions, probe};

fn riff_header(chunk_tag: &[u8; 4], body_len: u32) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(body_len + 12).to_le_bytes());
    data.extend_from_slice(b"WEBP");
    data.extend_from_slice(chunk_tag);
    data.extend_from_slice(&body_len.to_le_bytes());
    data
}

fn make_vp8(width: u16, height: u16) -> Vec<u8> {
    let mut data = riff_header(b"VP8 ", 10);
    data.extend_from_slice(&[0x30, 0x01, 0x00]);
    data.extend_from_slice(&[0x9D, 0x01, 0x2A]);
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data
}

fn make_vp8l(width: u32, height: u32) -> Vec<u8> {
    let mut data = riff_header(b"VP8L", 5);
    data.push(0x2F);
    let packed = (width - 1) | (height - 1) << 14;
    data.extend_from_slice(&packed.to_le_bytes());
    data
}

fn make_vp8x(width: u32, height: u32) -> Vec<u8> {
    let mut data = riff_header(b"VP8X", 10);
    data.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]);
    data.extend_from_slice(&(width - 1).to_le_bytes()[..3]);
    data.extend_from_slice(&(height - 1).to_le_bytes()[..3]);
    data
}

#[test]
fn test_lossy_vp8() {
    let info = probe(&make_vp8(550, 368)).unwrap();
    assert_eq!(info.format, ImageFormat::WebP);
    assert_eq!((info.dimensions.width, info.dimensions.height), (550, 368));
}

#[test]
fn test_lossless_vp8l() {
    let dims = detect_dimensions(&make_vp8l(2048, 1536)).unwrap();
    assert_eq!((dims.width, dims.height), (2048, 1536));
}

#[test]
fn test_extended_vp8x() {
    let dims = detect_dimensions(&make_vp8x(3840, 2160)).unwrap();
    assert_eq!((dims.width, dims.height), (3840, 2160));

    // 24-bit fields can carry the full 16383x16383 canvas and beyond.
    let dims = detect_dimensions(&make_vp8x(100_000, 50_000)).unwrap();
    assert_eq!((dims.width, dims.height), (100_000, 50_000));
}

#[test]
fn test_each_subformat_bit_packing_differs() {
    // The same nominal size must come back identical across sub-formats.
    for maker in [
        make_vp8(1200, 900),
        make_vp8l(1200, 900),
        make_vp8x(1200, 900),
    ] {
        let dims = detect_dimensions(&maker).unwrap();
        assert_eq!((dims.width, dims.height), (1200, 900));
    }
}

#[test]
fn test_truncated_webp_is_absent() {
    let data = make_vp8(550, 368);
    for cut in [0, 4, 11, 15, 20, 29] {
        assert!(detect_dimensions(&data[..cut]).is_none(), "cut at {cut}");
    }
}

#[test]
fn test_unknown_first_chunk_is_absent() {
    assert!(detect_dimensions(&riff_header(b"ANIM", 6)).is_none());
}
