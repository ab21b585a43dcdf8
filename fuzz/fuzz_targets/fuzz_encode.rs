#![no_main]
use libfuzzer_sys::fuzz_target;
use zenqoi::PixelLayout;

fuzz_target!(|data: &[u8]| {
    let Some((&w, rest)) = data.split_first() else {
        return;
    };
    let width = u32::from(w);

    // Every layout, including buffers that are not whole rows. Must never panic.
    for layout in [
        PixelLayout::Rgba8,
        PixelLayout::Rgb8,
        PixelLayout::Bgra8,
        PixelLayout::Bgrx8,
    ] {
        let bpp = layout.bytes_per_pixel() as u32;
        let height = if width == 0 {
            0
        } else {
            rest.len() as u32 / (width * bpp)
        };
        if let Ok(out) = zenqoi::encode_qoi(rest, width, height, layout, enough::Unstoppable) {
            assert!(out.len() <= zenqoi::max_encoded_len(width, height).unwrap());
        }
    }
});
