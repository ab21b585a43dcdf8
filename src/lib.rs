//! # zenqoi
//!
//! Lossless [QOI](https://qoiformat.org/) ("Quite OK Image") encoder for
//! 8-bit RGBA pixel data.
//!
//! ## Format
//!
//! A QOI stream is a 14-byte header, one record per pixel (or per run of
//! identical pixels), and an 8-byte end marker. Each pixel takes the first of
//! these that applies:
//!
//! - **run** of pixels equal to the previous one (1 byte per up to 62 pixels)
//! - **index** into a 64-slot array of recently seen pixels (1 byte)
//! - **diff**, each RGB channel within -2..=1 of the previous pixel (1 byte)
//! - **luma**, green within -32..=31, red and blue within -8..=7 of green's
//!   delta (2 bytes)
//! - **rgb**, full color with unchanged alpha (4 bytes)
//! - **rgba**, full pixel (5 bytes)
//!
//! Deltas wrap around on the 8-bit ring, so 255 → 0 is a delta of +1.
//! Output is byte-identical for identical input and decodes with any
//! conforming QOI decoder.
//!
//! ## Non-Goals
//!
//! - Decoding QOI (use rapid-qoi or zenbitmaps for that)
//! - Streaming encode of images larger than memory
//! - Bit depths other than 8
//!
//! ## Usage
//!
//! ```
//! use zenqoi::{EncodeRequest, ImageInfo, Limits, PixelLayout};
//! use enough::Unstoppable;
//!
//! let pixels = vec![255u8; 3 * 2 * 4]; // 3x2 white RGBA
//!
//! let encoded = zenqoi::encode_qoi(&pixels, 3, 2, PixelLayout::Rgba8, Unstoppable)?;
//! assert!(encoded.len() <= zenqoi::max_encoded_len(3, 2).unwrap());
//!
//! // Probe the header back
//! let info = ImageInfo::from_bytes(encoded.data())?;
//! assert_eq!((info.width, info.height), (3, 2));
//!
//! // With limits
//! let limits = Limits {
//!     max_pixels: Some(1_000_000),
//!     ..Default::default()
//! };
//! let encoded = EncodeRequest::new()
//!     .with_limits(&limits)
//!     .encode(&pixels, 3, 2, PixelLayout::Rgba8, Unstoppable)?;
//! # let _ = encoded;
//! # Ok::<(), zenqoi::QoiError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod encode;
mod error;
mod info;
mod limits;
mod pixel;
mod qoi;

// Re-exports
pub use encode::{EncodeOutput, EncodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::QoiError;
pub use info::{Colorspace, ImageInfo};
pub use limits::Limits;
pub use pixel::{Pixel, PixelLayout};

/// Worst-case encoded size for a `width` x `height` image
/// (`5 * width * height + 22`), or `None` if it overflows `usize`.
pub fn max_encoded_len(width: u32, height: u32) -> Option<usize> {
    qoi::max_encoded_len(width, height)
}

/// Encode a flat 8-bit pixel buffer as QOI with default settings.
pub fn encode_qoi(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: impl Stop,
) -> Result<EncodeOutput, QoiError> {
    EncodeRequest::new().encode(pixels, width, height, layout, stop)
}

/// Encode a slice of [`Pixel`]s as QOI with default settings.
pub fn encode_pixels(
    pixels: &[Pixel],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<EncodeOutput, QoiError> {
    EncodeRequest::new().encode_pixels(pixels, width, height, stop)
}

/// Encode typed RGBA8 pixels as QOI with default settings.
#[cfg(feature = "rgb")]
pub fn encode_rgba8(
    pixels: &[rgb::RGBA8],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<EncodeOutput, QoiError> {
    EncodeRequest::new().encode_rgba8(pixels, width, height, stop)
}

/// Encode an [`imgref::ImgRef`] of RGBA8 pixels as QOI with default settings.
#[cfg(feature = "imgref")]
pub fn encode_img(
    img: imgref::ImgRef<'_, rgb::RGBA8>,
    stop: impl Stop,
) -> Result<EncodeOutput, QoiError> {
    EncodeRequest::new().encode_img(img, stop)
}
