//! Benchmark for noise sampling performance.
//!
//! TARGET: one 640x480 frame of 3-octave noise in well under 50ms
//!
//! Run with: cargo bench --package perlin_noise --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use perlin_noise::{GradientField, NoiseSampler};

fn sampler() -> NoiseSampler {
    NoiseSampler::new(GradientField::from_seed(640, 480, 40, 42).expect("valid dimensions"))
}

fn benchmark_raw_noise(c: &mut Criterion) {
    let noise = sampler();

    c.bench_function("raw_noise_sample", |b| {
        let mut x = 0i64;
        b.iter(|| {
            x += 7;
            black_box(noise.raw_noise(black_box(x), black_box(x / 3)))
        });
    });
}

fn benchmark_octave_noise(c: &mut Criterion) {
    let mut noise = sampler();
    noise.set_octave_count(6).expect("valid octave count");

    c.bench_function("octave_noise_6_octaves", |b| {
        let mut x = 0i64;
        b.iter(|| {
            x += 7;
            black_box(noise.sample(black_box(x), black_box(x / 3)))
        });
    });
}

fn benchmark_full_frame(c: &mut Criterion) {
    let noise = sampler();

    let mut group = c.benchmark_group("full_frame");
    group.throughput(Throughput::Elements(640 * 480));
    group.sample_size(10);

    group.bench_function("640x480_sample_many", |b| {
        b.iter(|| {
            let coords = (0..640i64).flat_map(|x| (0..480i64).map(move |y| (x, y)));
            black_box(noise.sample_many(coords))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_raw_noise,
    benchmark_octave_noise,
    benchmark_full_frame
);
criterion_main!(benches);
