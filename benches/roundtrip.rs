//! Benchmarks for compression and decompression throughput per format.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use retrolz::Format;

/// Pseudo-random (nearly incompressible) data from a xorshift PRNG
fn generate_random_data(size: usize, seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.push((state & 0xFF) as u8);
    }
    data
}

/// Tile-like data: repeated rows with small variations
fn generate_tile_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut row = 0u8;
    while data.len() < size {
        let take = 16.min(size - data.len());
        for i in 0..take {
            data.push(if i % 4 == 0 { row } else { 0x80 | i as u8 });
        }
        row = row.wrapping_add(1);
    }
    data
}

const ENCODE_FORMATS: [Format; 5] =
    [Format::Lz10, Format::Cxlz, Format::Lzss, Format::Lz01, Format::Prs];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    let size = 64 * 1024;
    let data = generate_tile_data(size);

    group.throughput(Throughput::Bytes(size as u64));
    for format in ENCODE_FORMATS {
        group.bench_with_input(BenchmarkId::new("tile", format), &data, |b, data| {
            b.iter(|| retrolz::compress(data, format).unwrap());
        });
    }
    group.finish();
}

fn bench_compress_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_patterns");
    let size = 64 * 1024;

    let random = generate_random_data(size, 0xBEEF);
    let repetitive = vec![0x41u8; size];

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("random", |b| {
        b.iter(|| retrolz::compress(&random, Format::Lz10).unwrap());
    });
    group.bench_function("repetitive", |b| {
        b.iter(|| retrolz::compress(&repetitive, Format::Lz10).unwrap());
    });
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    let size = 64 * 1024;
    let data = generate_tile_data(size);

    group.throughput(Throughput::Bytes(size as u64));
    for format in ENCODE_FORMATS {
        let compressed = retrolz::compress(&data, format).unwrap();
        group.bench_with_input(BenchmarkId::new("tile", format), &compressed, |b, compressed| {
            b.iter(|| retrolz::decompress_as(compressed, format).unwrap());
        });
    }
    group.finish();
}

fn bench_identify(c: &mut Criterion) {
    let data = generate_tile_data(16 * 1024);
    let cxlz = retrolz::compress(&data, Format::Cxlz).unwrap();
    let lzss = retrolz::compress(&data, Format::Lzss).unwrap();

    let mut group = c.benchmark_group("identify");
    group.bench_function("magic", |b| {
        b.iter(|| retrolz::identify(&cxlz));
    });
    group.bench_function("structural", |b| {
        b.iter(|| retrolz::identify(&lzss));
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_compress_patterns, bench_decompress, bench_identify);
criterion_main!(benches);
