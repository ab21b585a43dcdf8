use alloc::format;

use crate::error::QoiError;
use crate::qoi::{HEADER_LEN, MAGIC};

/// Colorspace tag stored in the header. Informational only; it does not
/// change how pixels are encoded.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Colorspace {
    /// sRGB color channels with linear alpha.
    #[default]
    Srgb = 0,
    /// All channels linear.
    Linear = 1,
}

impl TryFrom<u8> for Colorspace {
    type Error = QoiError;

    fn try_from(v: u8) -> Result<Self, QoiError> {
        match v {
            0 => Ok(Self::Srgb),
            1 => Ok(Self::Linear),
            other => Err(QoiError::InvalidHeader(format!(
                "colorspace {other} is not 0 or 1"
            ))),
        }
    }
}

/// Header fields of a QOI stream, read without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// 3 (RGB) or 4 (RGBA). This encoder always writes 4.
    pub channels: u8,
    pub colorspace: Colorspace,
}

impl ImageInfo {
    /// Probe a QOI header.
    pub fn from_bytes(data: &[u8]) -> Result<Self, QoiError> {
        if data.len() >= MAGIC.len() && data[..4] != MAGIC {
            return Err(QoiError::UnrecognizedFormat);
        }
        let header = data.get(..HEADER_LEN).ok_or(QoiError::UnexpectedEof)?;
        let width = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
        let height = u32::from_be_bytes([header[8], header[9], header[10], header[11]]);
        let channels = header[12];
        if channels != 3 && channels != 4 {
            return Err(QoiError::InvalidHeader(format!(
                "channel count {channels} is not 3 or 4"
            )));
        }
        let colorspace = Colorspace::try_from(header[13])?;
        Ok(Self {
            width,
            height,
            channels,
            colorspace,
        })
    }
}
