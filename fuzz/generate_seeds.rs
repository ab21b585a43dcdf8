#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs
//!
//! Seed layout for both targets: one width byte, then RGBA pixel bytes.

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_roundtrip", "fuzz/corpus/fuzz_encode"] {
        fs::create_dir_all(dir).unwrap();

        // 4x4 solid: runs only
        let mut solid = vec![4u8];
        solid.extend([200, 10, 10, 255].repeat(16));
        fs::write(format!("{dir}/solid_4x4.bin"), solid).unwrap();

        // 8x2 ramp across the 255 -> 0 wrap: diff records
        let mut ramp = vec![8u8];
        for i in 0..16u8 {
            ramp.extend([250u8.wrapping_add(i), 3u8.wrapping_sub(i), 128, 255]);
        }
        fs::write(format!("{dir}/wrap_ramp_8x2.bin"), ramp).unwrap();

        // 3x3 with alpha changes and repeated colors: rgba and index records
        let mut mixed = vec![3u8];
        for px in [
            [1, 2, 3, 4],
            [90, 80, 70, 255],
            [1, 2, 3, 4],
            [0, 0, 0, 0],
            [90, 80, 70, 255],
            [90, 80, 70, 255],
            [200, 100, 50, 128],
            [1, 2, 3, 4],
            [0, 0, 0, 255],
        ] {
            mixed.extend(px);
        }
        fs::write(format!("{dir}/mixed_3x3.bin"), mixed).unwrap();

        // Degenerate inputs
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/width_only.bin"), [7u8]).unwrap();
        fs::write(format!("{dir}/partial_row.bin"), [2u8, 1, 2, 3]).unwrap();
    }

    println!("Generated seed corpus in fuzz/corpus/");
}
