use alloc::format;

use crate::error::QoiError;

/// Caps applied to an encode before any output memory is reserved.
///
/// Unset fields are not checked; `Limits::default()` accepts everything.
/// The memory cap applies to the worst-case output reservation
/// (see [`max_encoded_len`](crate::max_encoded_len)), not to the final length.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Largest accepted `width * height`.
    pub max_pixels: Option<u64>,
    /// Largest accepted output reservation in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject an encode of `width` x `height` that would reserve `reserve` bytes.
    pub(crate) fn check_encode(
        &self,
        width: u32,
        height: u32,
        reserve: usize,
    ) -> Result<(), QoiError> {
        let pixels = u64::from(width) * u64::from(height);
        let bounds = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("output reservation", reserve as u64, self.max_memory_bytes),
        ];
        for (what, value, max) in bounds {
            match max {
                Some(max) if value > max => {
                    return Err(QoiError::LimitExceeded(format!(
                        "{what} {value} exceeds limit {max}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        let limits = Limits::default();
        assert!(limits.check_encode(u32::MAX, u32::MAX, usize::MAX).is_ok());
    }

    #[test]
    fn each_bound_is_enforced() {
        let limits = Limits {
            max_width: Some(10),
            max_height: Some(20),
            max_pixels: Some(150),
            max_memory_bytes: Some(1000),
        };
        assert!(limits.check_encode(10, 15, 1000).is_ok());
        for (w, h, reserve) in [(11, 1, 0), (1, 21, 0), (10, 16, 0), (1, 1, 1001)] {
            assert!(
                matches!(
                    limits.check_encode(w, h, reserve),
                    Err(QoiError::LimitExceeded(_))
                ),
                "{w}x{h} reserving {reserve} should be rejected"
            );
        }
    }

    #[test]
    fn message_names_the_bound() {
        let limits = Limits {
            max_height: Some(4),
            ..Default::default()
        };
        match limits.check_encode(1, 5, 27) {
            Err(QoiError::LimitExceeded(msg)) => assert_eq!(msg, "height 5 exceeds limit 4"),
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }
}
