//! Serialize/deserialize throughput over generated messages

use codec::{deserialize, serialize, ConvertOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use generator::Generator;

fn bench_pipeline(c: &mut Criterion) {
    let mut generator = Generator::new()
        .with_body_content("text")
        .with_body_size(1024)
        .with_header_count(5);
    let text_msg = generator.message().unwrap();

    let mut generator = Generator::new()
        .with_body_content("binary")
        .with_body_size(10240);
    let binary_msg = generator.message().unwrap();

    c.bench_function("serialize/text-1k", |b| {
        b.iter(|| serialize(black_box(&text_msg), &ConvertOptions::none()).unwrap())
    });
    c.bench_function("serialize/text-1k-zlib", |b| {
        b.iter(|| serialize(black_box(&text_msg), &ConvertOptions::compression("zlib")).unwrap())
    });
    c.bench_function("serialize/binary-10k", |b| {
        b.iter(|| serialize(black_box(&binary_msg), &ConvertOptions::none()).unwrap())
    });

    let wire = serialize(&text_msg, &ConvertOptions::compression("zlib")).unwrap();
    c.bench_function("deserialize/text-1k-zlib", |b| {
        b.iter(|| deserialize(black_box(&wire)).unwrap())
    });

    let wire = serialize(&binary_msg, &ConvertOptions::none()).unwrap();
    c.bench_function("deserialize/binary-10k", |b| {
        b.iter(|| deserialize(black_box(&wire)).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
