use criterion::{criterion_group, criterion_main, Criterion};
use enough::Unstoppable;
use std::hint::black_box;
use zenqoi::{encode_qoi, PixelLayout};

fn generate_gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / width.max(1)) as u8);
            pixels.push(((y * 255) / height.max(1)) as u8);
            pixels.push(128);
            pixels.push(255);
        }
    }
    pixels
}

fn generate_noise_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..width * height * 4)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

fn bench_encode_gradient(c: &mut Criterion) {
    let rgba = generate_gradient_rgba(512, 512);
    c.bench_function("qoi_encode_gradient_512x512", |b| {
        b.iter(|| {
            let result = encode_qoi(black_box(&rgba), 512, 512, PixelLayout::Rgba8, Unstoppable);
            assert!(result.is_ok());
            result
        })
    });
}

fn bench_encode_noise(c: &mut Criterion) {
    let rgba = generate_noise_rgba(512, 512);
    c.bench_function("qoi_encode_noise_512x512", |b| {
        b.iter(|| {
            let result = encode_qoi(black_box(&rgba), 512, 512, PixelLayout::Rgba8, Unstoppable);
            assert!(result.is_ok());
            result
        })
    });
}

fn bench_encode_solid(c: &mut Criterion) {
    let rgba = [40u8, 80, 120, 255].repeat(1024 * 1024);
    c.bench_function("qoi_encode_solid_1024x1024", |b| {
        b.iter(|| {
            let result =
                encode_qoi(black_box(&rgba), 1024, 1024, PixelLayout::Rgba8, Unstoppable);
            assert!(result.is_ok());
            result
        })
    });
}

criterion_group!(
    benches,
    bench_encode_gradient,
    bench_encode_noise,
    bench_encode_solid
);
criterion_main!(benches);
