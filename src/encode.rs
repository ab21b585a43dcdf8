use alloc::vec::Vec;
use enough::Stop;

use crate::error::QoiError;
use crate::info::Colorspace;
use crate::limits::Limits;
use crate::pixel::{Pixel, PixelLayout};
use crate::qoi;

/// Encoded QOI stream.
///
/// The buffer is reserved for the worst case up front, so `capacity()` is
/// usually larger than `len()`; only `data()` is meaningful.
#[derive(Clone, Debug)]
pub struct EncodeOutput {
    data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub colorspace: Colorspace,
}

impl EncodeOutput {
    /// The encoded bytes, header through end marker.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Exact encoded length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: even an empty image has a header and end marker.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes reserved for the output buffer.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Take ownership of the encoded bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for EncodeOutput {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// QOI encode request with optional colorspace tag and resource limits.
///
/// ```
/// use zenqoi::{Colorspace, EncodeRequest, PixelLayout, Unstoppable};
///
/// let pixels = [255u8, 0, 0, 255].repeat(4);
/// let out = EncodeRequest::new()
///     .with_colorspace(Colorspace::Linear)
///     .encode(&pixels, 2, 2, PixelLayout::Rgba8, Unstoppable)?;
/// assert_eq!(&out.data()[..4], b"qoif");
/// # Ok::<(), zenqoi::QoiError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest<'a> {
    colorspace: Colorspace,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    /// sRGB colorspace tag, no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colorspace byte written to the header.
    pub fn with_colorspace(mut self, colorspace: Colorspace) -> Self {
        self.colorspace = colorspace;
        self
    }

    /// Set resource limits, checked before the output buffer is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode a flat byte buffer of exactly `width * height` pixels in `layout`.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        stop: impl Stop,
    ) -> Result<EncodeOutput, QoiError> {
        let bpp = layout.bytes_per_pixel();
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(bpp))
            .ok_or(QoiError::DimensionsTooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(QoiError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        // max(1): a zero-width image has an empty buffer and no rows
        let row_bytes = (width as usize * bpp).max(1);
        let rows = pixels
            .chunks_exact(row_bytes)
            .map(|row| row.chunks_exact(bpp).map(move |px| layout.read(px)));
        self.finish(rows, width, height, &stop)
    }

    /// Encode exactly `width * height` pixels.
    pub fn encode_pixels(
        &self,
        pixels: &[Pixel],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<EncodeOutput, QoiError> {
        check_pixel_count(pixels.len(), width, height)?;
        let rows = pixels
            .chunks_exact((width as usize).max(1))
            .map(|row| row.iter().copied());
        self.finish(rows, width, height, &stop)
    }

    /// Encode exactly `width * height` typed RGBA8 pixels.
    #[cfg(feature = "rgb")]
    pub fn encode_rgba8(
        &self,
        pixels: &[rgb::RGBA8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<EncodeOutput, QoiError> {
        check_pixel_count(pixels.len(), width, height)?;
        let rows = pixels
            .chunks_exact((width as usize).max(1))
            .map(|row| row.iter().map(|&px| Pixel::from(px)));
        self.finish(rows, width, height, &stop)
    }

    /// Encode an [`imgref::ImgRef`], honoring its stride.
    #[cfg(feature = "imgref")]
    pub fn encode_img(
        &self,
        img: imgref::ImgRef<'_, rgb::RGBA8>,
        stop: impl Stop,
    ) -> Result<EncodeOutput, QoiError> {
        let (width, height) = header_dimensions(img.width(), img.height())?;
        let rows = img.rows().map(|row| row.iter().map(|&px| Pixel::from(px)));
        self.finish(rows, width, height, &stop)
    }

    fn finish<I, R>(
        &self,
        rows: I,
        width: u32,
        height: u32,
        stop: &dyn Stop,
    ) -> Result<EncodeOutput, QoiError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Pixel>,
    {
        let data = qoi::encode_rows(rows, width, height, self.colorspace, self.limits, stop)?;
        Ok(EncodeOutput {
            data,
            width,
            height,
            colorspace: self.colorspace,
        })
    }
}

/// Narrow in-memory dimensions to the header's 32-bit fields.
#[cfg(feature = "imgref")]
fn header_dimensions(width: usize, height: usize) -> Result<(u32, u32), QoiError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(QoiError::LimitExceeded(alloc::format!(
            "{width}x{height} does not fit the 32-bit header fields"
        ))),
    }
}

fn check_pixel_count(actual: usize, width: u32, height: u32) -> Result<(), QoiError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(QoiError::DimensionsTooLarge { width, height })?;
    if actual != expected {
        return Err(QoiError::PixelCountMismatch { expected, actual });
    }
    Ok(())
}
