//! Signed channel differences on the 8-bit ring.

/// Difference `candidate - original` on the mod-256 ring, if it lies in
/// `[min_offset, max_offset]`.
///
/// `original` may fall outside `0..=255` (the luma check passes
/// `previous + dg`); it is reduced onto the ring first so the returned delta
/// always lies inside the window. Windows must span less than 256 values.
///
/// `None` is the "does not fit" signal the strategy chain branches on.
pub(crate) fn within_wrapped_range(
    original: i16,
    candidate: u8,
    min_offset: i16,
    max_offset: i16,
) -> Option<i8> {
    debug_assert!(min_offset <= 0 && max_offset >= 0);
    debug_assert!(max_offset - min_offset < 256);

    let original = original.rem_euclid(256);
    let candidate = i16::from(candidate);
    let low = original + min_offset;
    let high = original + max_offset;

    let delta = if (low..=high).contains(&candidate) {
        candidate - original
    } else if low < 0 && candidate >= low + 256 {
        // window reaches below 0: 255 reads as -1
        candidate - (original + 256)
    } else if high > 255 && candidate <= high - 256 {
        // window reaches above 255: 0 reads as +1
        candidate - (original - 256)
    } else {
        return None;
    };

    debug_assert!((min_offset..=max_offset).contains(&delta));
    Some(delta as i8)
}
