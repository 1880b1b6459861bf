use bc4_codec::{decompress_bc4, decompress_bc4_f32};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let bc4 = 0xDEAD_BEEF_0123_0AD7u64;
    c.bench_function("decompress_bc4", |b| b.iter(|| decompress_bc4(black_box(bc4))));
    c.bench_function("decompress_bc4_f32", |b| {
        b.iter(|| decompress_bc4_f32(black_box(bc4)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
