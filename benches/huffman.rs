use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffpack::{compress_text, decompress_text};
use lipsum::lipsum;

fn huffman_compression(c: &mut Criterion) {
    let input = lipsum(2048);

    c.bench_function("huffman text compression", |b| {
        b.iter(|| compress_text(black_box(&input)))
    });
}

fn huffman_decompression(c: &mut Criterion) {
    let input = lipsum(4096);
    let compressed = compress_text(&input).unwrap();

    c.bench_function("huffman text decompression", |b| {
        b.iter(|| decompress_text(black_box(&compressed)))
    });
}

criterion_group!(benches, huffman_compression, huffman_decompression);
criterion_main!(benches);
