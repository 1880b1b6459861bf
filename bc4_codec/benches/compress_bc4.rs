use bc4_codec::compress_bc4;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let block = [
        10, 25, 63, 100, 10, 12, 30, 125, 14, 101, 215, 13, 14, 12, 200, 189,
    ];
    c.bench_function("compress_bc4", |b| b.iter(|| compress_bc4(black_box(&block))));

    let block = [64u8; 16];
    c.bench_function("compress_bc4_uniform", |b| {
        b.iter(|| compress_bc4(black_box(&block)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
