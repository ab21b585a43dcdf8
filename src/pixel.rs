/// One 8-bit RGBA pixel.
///
/// Compared by value on all four channels. Pixels have no ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Create a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel (alpha = 255).
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Running-array slot for this pixel: `(3r + 5g + 7b + 11a) mod 64`.
    pub(crate) fn qoi_hash(self) -> usize {
        let sum = u32::from(self.r) * 3
            + u32::from(self.g) * 5
            + u32::from(self.b) * 7
            + u32::from(self.a) * 11;
        (sum % 64) as usize
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Pixel {
    fn from(p: rgb::RGBA8) -> Self {
        Self::new(p.r, p.g, p.b, p.a)
    }
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::RGBA8 {
    fn from(p: Pixel) -> Self {
        rgb::RGBA8 {
            r: p.r,
            g: p.g,
            b: p.b,
            a: p.a,
        }
    }
}

/// Memory layout of a flat 8-bit pixel buffer handed to the encoder.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 4 channels, 8-bit RGBA.
    Rgba8,
    /// 3 channels, 8-bit RGB (encoded with alpha = 255).
    Rgb8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
    /// 4 channels, 8-bit BGRX (opaque; 4th byte is padding, not alpha).
    Bgrx8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Bgra8 | Self::Bgrx8 => 4,
        }
    }

    /// Read one pixel from a chunk of exactly `bytes_per_pixel()` bytes.
    pub(crate) fn read(self, px: &[u8]) -> Pixel {
        match self {
            Self::Rgba8 => Pixel::new(px[0], px[1], px[2], px[3]),
            Self::Rgb8 => Pixel::opaque(px[0], px[1], px[2]),
            Self::Bgra8 => Pixel::new(px[2], px[1], px[0], px[3]),
            Self::Bgrx8 => Pixel::opaque(px[2], px[1], px[0]),
        }
    }
}
