use criterion::{criterion_group, criterion_main, Criterion};
use image::imageops::{resize, FilterType};

use iconsmith::{sparkle_source, IconSource, BASE_SIZE};

// Benchmarks exercise the two hot paths: drawing the base image and the
// Lanczos3 resample the derivation loop performs per table entry.

fn bench_draw_base(c: &mut Criterion) {
    let source = sparkle_source();
    c.bench_function("draw_base_512", |b| {
        b.iter(|| source.produce_base_image(BASE_SIZE).unwrap())
    });
}

fn bench_lanczos_resample(c: &mut Criterion) {
    let base = sparkle_source()
        .produce_base_image(BASE_SIZE)
        .expect("base image");
    c.bench_function("lanczos_512_to_64", |b| {
        b.iter(|| resize(&base, 64, 64, FilterType::Lanczos3))
    });
    c.bench_function("lanczos_512_to_192", |b| {
        b.iter(|| resize(&base, 192, 192, FilterType::Lanczos3))
    });
}

criterion_group!(benches, bench_draw_base, bench_lanczos_resample);
criterion_main!(benches);
