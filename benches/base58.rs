//! This bench measures the Base58 long-division codec on identifier-sized and
//! larger buffers.

#![allow(missing_docs)]

use std::hint::black_box;

use baidkit::codec::{base58, baid64};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Deterministic bytes with a run of leading zeros
#[allow(clippy::cast_possible_truncation)]
fn sample(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| if i < 2 { 0 } else { (i * 37 % 251) as u8 }) // below 251
        .collect()
}

fn encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58 encode");
    for len in [32, 128, 512] {
        let bytes = sample(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &bytes, |b, bytes| {
            b.iter(|| base58::encode(black_box(bytes)));
        });
    }
    group.finish();
}

fn decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("baid64 decode");
    for len in [32, 128, 512] {
        let text = baid64::encode(&sample(len), baid64::DEFAULT_GROUP_SIZE);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| baid64::decode(black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, encode, decode);
criterion_main!(benches);
