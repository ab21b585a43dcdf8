//! QOI container framing and encode driver (internal).
//!
//! A QOI file is a 14-byte header (`qoif`, big-endian width and height,
//! channel count, colorspace), a stream of 1 to 5 byte records, and an
//! 8-byte end marker. See <https://qoiformat.org/qoi-specification.pdf>.

mod delta;
mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::QoiError;
use crate::info::Colorspace;
use crate::limits::Limits;
use crate::pixel::Pixel;
use encode::QoiEncoder;

pub(crate) const MAGIC: [u8; 4] = *b"qoif";
pub(crate) const HEADER_LEN: usize = 14;
pub(crate) const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];
/// Channel count written to every header; pixels are always stored as RGBA.
pub(crate) const CHANNELS: u8 = 4;

pub(crate) const OP_INDEX: u8 = 0b0000_0000;
pub(crate) const OP_DIFF: u8 = 0b0100_0000;
pub(crate) const OP_LUMA: u8 = 0b1000_0000;
pub(crate) const OP_RUN: u8 = 0b1100_0000;
pub(crate) const OP_RGB: u8 = 0b1111_1110;
pub(crate) const OP_RGBA: u8 = 0b1111_1111;

/// Longest run one record holds; lengths 63 and 64 would collide with
/// `OP_RGB` and `OP_RGBA`.
pub(crate) const MAX_RUN: u8 = 62;

/// Largest single record (`OP_RGBA`).
const MAX_OP_LEN: usize = 5;

/// Previous-pixel value before the first pixel.
pub(crate) const START_PIXEL: Pixel = Pixel::new(0, 0, 0, 255);

/// Worst-case encoded size: every pixel as a 5-byte RGBA record, plus
/// header and end marker. `None` on overflow.
pub(crate) fn max_encoded_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(MAX_OP_LEN)?
        .checked_add(HEADER_LEN + END_MARKER.len())
}

fn write_header(out: &mut Vec<u8>, width: u32, height: u32, colorspace: Colorspace) {
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.push(CHANNELS);
    out.push(colorspace as u8);
}

/// Encode rows of pixels. The caller has already checked that `rows`
/// yields exactly `width * height` pixels.
pub(crate) fn encode_rows<I, R>(
    rows: I,
    width: u32,
    height: u32,
    colorspace: Colorspace,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, QoiError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = Pixel>,
{
    let capacity =
        max_encoded_len(width, height).ok_or(QoiError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_encode(width, height, capacity)?;
    }

    let mut out = Vec::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| QoiError::OutOfMemory { bytes: capacity })?;

    stop.check()?;

    write_header(&mut out, width, height, colorspace);
    let mut encoder = QoiEncoder::new(out);
    for (row_idx, row) in rows.into_iter().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            encoder.push(px);
        }
    }
    let out = encoder.finish();
    debug_assert!(out.len() <= capacity);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use enough::Unstoppable;

    use super::*;

    fn single_row(pixels: &[Pixel]) -> [Vec<Pixel>; 1] {
        [pixels.to_vec()]
    }

    #[test]
    fn header_layout() {
        let mut header = Vec::new();
        write_header(&mut header, 0x0102_0304, 0x0a0b_0c0d, Colorspace::Linear);
        assert_eq!(
            header,
            vec![b'q', b'o', b'i', b'f', 1, 2, 3, 4, 0x0a, 0x0b, 0x0c, 0x0d, 4, 1]
        );
    }

    #[test]
    fn empty_image_is_header_and_end_marker() {
        let rows: [Vec<Pixel>; 0] = [];
        let out = encode_rows(rows, 0, 7, Colorspace::Srgb, None, &Unstoppable).unwrap();
        assert_eq!(out.len(), HEADER_LEN + END_MARKER.len());
        assert_eq!(&out[..4], b"qoif");
        assert_eq!(&out[4..8], &0u32.to_be_bytes());
        assert_eq!(&out[8..12], &7u32.to_be_bytes());
        assert_eq!(&out[12..14], &[4, 0]);
        assert_eq!(&out[14..], &END_MARKER);
    }

    #[test]
    fn output_is_reserved_for_worst_case() {
        let pixels = [Pixel::new(1, 2, 3, 4), Pixel::new(200, 2, 3, 5)];
        let out = encode_rows(single_row(&pixels), 2, 1, Colorspace::Srgb, None, &Unstoppable)
            .unwrap();
        assert!(out.capacity() >= 5 * 2 + 22);
        // two RGBA records
        assert_eq!(out.len(), 14 + 5 + 5 + 8);
        assert_eq!(out.len(), max_encoded_len(2, 1).unwrap());
    }

    #[test]
    fn max_encoded_len_overflow() {
        assert_eq!(max_encoded_len(0, 0), Some(22));
        assert_eq!(max_encoded_len(10, 10), Some(522));
        if usize::BITS == 64 {
            assert!(max_encoded_len(u32::MAX, u32::MAX).is_none());
        }
    }

    #[test]
    fn limits_checked_before_allocation() {
        let limits = Limits {
            max_memory_bytes: Some(100),
            ..Default::default()
        };
        let pixels = vec![Pixel::default(); 16];
        let err = encode_rows(
            single_row(&pixels),
            16,
            1,
            Colorspace::Srgb,
            Some(&limits),
            &Unstoppable,
        )
        .unwrap_err();
        assert!(matches!(err, QoiError::LimitExceeded(_)));
    }
}
