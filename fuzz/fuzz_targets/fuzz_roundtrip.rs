#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the width; the rest is RGBA, truncated to whole rows
    let Some((&w, rest)) = data.split_first() else {
        return;
    };
    let width = u32::from(w.max(1));
    let height = (rest.len() / (width as usize * 4)) as u32;
    if height == 0 {
        return;
    }
    let pixels = &rest[..(width * height * 4) as usize];

    let encoded = zenqoi::encode_qoi(
        pixels,
        width,
        height,
        zenqoi::PixelLayout::Rgba8,
        enough::Unstoppable,
    )
    .expect("valid input must encode");

    let (header, decoded) =
        rapid_qoi::Qoi::decode_alloc(encoded.data()).expect("encoded data failed to decode");
    assert_eq!(header.width, width);
    assert_eq!(header.height, height);
    assert_eq!(decoded, pixels, "roundtrip pixel mismatch");
});
