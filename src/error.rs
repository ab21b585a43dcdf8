use alloc::string::String;
use enough::StopReason;

/// Errors from QOI encoding and header probing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum QoiError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel count mismatch: expected {expected} pixels, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("failed to allocate {bytes} byte output buffer")]
    OutOfMemory { bytes: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for QoiError {
    fn from(r: StopReason) -> Self {
        QoiError::Cancelled(r)
    }
}
