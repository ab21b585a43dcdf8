//! Property tests: any image survives the reference decoder unchanged.

use enough::Unstoppable;
use proptest::prelude::*;
use zenqoi::*;

/// Pixels biased toward what exercises each record type: repeats of the
/// start pixel, small steps on a gray ramp near the wrap points, a tiny
/// palette (index hits) and fully random values.
fn pixel() -> impl Strategy<Value = Pixel> {
    prop_oneof![
        Just(Pixel::new(0, 0, 0, 255)),
        (0u8..4, 252u8..=255).prop_map(|(d, v)| Pixel::opaque(v, v.wrapping_add(d), d)),
        (0usize..3).prop_map(|i| [
            Pixel::new(255, 0, 0, 255),
            Pixel::new(0, 0, 255, 128),
            Pixel::new(7, 7, 7, 0),
        ][i]),
        any::<[u8; 4]>().prop_map(|[r, g, b, a]| Pixel::new(r, g, b, a)),
    ]
}

fn image() -> impl Strategy<Value = (u32, u32, Vec<Pixel>)> {
    (1u32..24, 1u32..24).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec(pixel(), (w * h) as usize),
        )
    })
}

proptest! {
    #[test]
    fn roundtrips_through_reference_decoder((w, h, pixels) in image()) {
        let encoded = encode_pixels(&pixels, w, h, Unstoppable).unwrap();
        let (header, decoded) = rapid_qoi::Qoi::decode_alloc(encoded.data()).unwrap();
        prop_assert_eq!(header.width, w);
        prop_assert_eq!(header.height, h);
        let expected: Vec<u8> = pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn length_is_bounded_and_deterministic((w, h, pixels) in image()) {
        let a = encode_pixels(&pixels, w, h, Unstoppable).unwrap();
        let b = encode_pixels(&pixels, w, h, Unstoppable).unwrap();
        prop_assert_eq!(a.data(), b.data());
        prop_assert!(a.len() <= max_encoded_len(w, h).unwrap());
        prop_assert!(a.len() >= 22);
        prop_assert_eq!(&a.data()[a.len() - 8..], &[0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn byte_layouts_match_typed_pixels((w, h, pixels) in image()) {
        let rgba: Vec<u8> = pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();
        let bgra: Vec<u8> = pixels.iter().flat_map(|p| [p.b, p.g, p.r, p.a]).collect();
        let want = encode_pixels(&pixels, w, h, Unstoppable).unwrap();
        let from_rgba = encode_qoi(&rgba, w, h, PixelLayout::Rgba8, Unstoppable).unwrap();
        let from_bgra = encode_qoi(&bgra, w, h, PixelLayout::Bgra8, Unstoppable).unwrap();
        prop_assert_eq!(want.data(), from_rgba.data());
        prop_assert_eq!(want.data(), from_bgra.data());
    }
}
