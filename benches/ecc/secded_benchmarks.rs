use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};

use secded::ecc::{decode, encode, ErrorCorrection, HammingSecded};
use secded::DataBits;

fn random_bits(len: usize) -> DataBits {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen::<bool>()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("secded_encode");

    for len in [64usize, 1024, 16384].iter() {
        let data = random_bits(*len);
        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| encode(black_box(data)).unwrap())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("secded_decode");

    for len in [64usize, 1024, 16384].iter() {
        let block = encode(&random_bits(*len)).unwrap();

        let mut corrupted = block.clone();
        let bit = corrupted[len / 2];
        corrupted.set(len / 2, !bit);

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::new("clean", len), &block, |b, block| {
            b.iter(|| decode(black_box(block)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("corrected", len), &corrupted, |b, block| {
            b.iter(|| decode(black_box(block)).unwrap())
        });
    }

    group.finish();
}

fn bench_block_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("secded_72_64");
    let hamming = HammingSecded::ecc_72_64();

    for size in [64usize, 4096].iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i * 7) as u8).collect();
        let encoded = hamming.encode(&data).unwrap();

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| hamming.encode(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| hamming.decode(black_box(encoded)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_block_codec);
criterion_main!(benches);
