use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use refstega_core::{
    codecs::{capacity, collision, lsb::StegaLsb},
    image_wrapper::ImageWrapper,
    utilities::bit_utils,
};
use std::hint::black_box;

/// Generate a smooth gradient, including channels at the value boundary.
fn generate_gradient(width: u32, height: u32) -> ImageWrapper {
    let mut bytes = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            let b = ((x.wrapping_add(y) as f32 / (width + height) as f32) * 255.0) as u8;
            bytes.extend_from_slice(&[r, g, b]);
        }
    }

    ImageWrapper::from_rgb_bytes(width, height, bytes).expect("invalid gradient dimensions")
}

fn benchmark_lsb_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let test_configs = [("tiny", 320, 240), ("small", 640, 480), ("medium", 1920, 1080)];

    let stega = StegaLsb::with_seed(1);
    for (name, width, height) in test_configs.iter() {
        let original = generate_gradient(*width, *height);
        let bits = capacity::max_payload_bits(collision::count_safe_slots(&original))
            .expect("image too small");
        let data: Vec<u8> = (0..bits / 8).map(|i| i as u8).collect();

        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", name), &data, |b, data| {
            b.iter_batched(
                || original.clone(),
                |mut img| stega.encode_into(&mut img, black_box(data)),
                criterion::BatchSize::LargeInput,
            );
        });

        let mut encoded = original.clone();
        stega
            .encode_into(&mut encoded, &data)
            .expect("failed to encode the data");

        group.bench_with_input(BenchmarkId::new("decode", name), &encoded, |b, encoded| {
            b.iter(|| stega.decode_from(black_box(&original), black_box(encoded)));
        });
    }

    group.finish();
}

fn benchmark_bit_codec(c: &mut Criterion) {
    let data: Vec<u8> = (0..65_536u32).map(|i| (i % 251) as u8).collect();

    c.bench_function("bytes_to_bits_64k", |b| {
        b.iter(|| bit_utils::bytes_to_bits(black_box(&data)));
    });
}

criterion_group!(benches, benchmark_lsb_roundtrip, benchmark_bit_codec);
criterion_main!(benches);
