//! Comparison benchmarks: BinArray1024 vs a 1024-bit `bitvec::BitVec`.
//!
//! Both sides use 32-bit words in LSB0 order, so the only difference is
//! inline fixed-size storage against a heap-allocated, dynamically sized
//! vector. Every group has a `binarray` and a `bitvec` entry.

use binarray::BinArray1024;
use bitvec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;

const SIZE_STANDARD: usize = 1024;
const ACTIVATION_PCT: f64 = 0.1;
const SEED: u64 = 42;

fn random_binarray(seed: u64) -> BinArray1024 {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut ba = BinArray1024::new();
    ba.random_set_pct(&mut rng, ACTIVATION_PCT);
    ba
}

/// The same bit pattern as `random_binarray(seed)`, held in a BitVec.
fn random_bitvec(seed: u64) -> BitVec<u32, Lsb0> {
    random_binarray(seed).to_bitvec()
}

// =============================================================================
// Single Bit Operations (Hot Paths)
// =============================================================================

fn bench_set_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_bit");

    group.bench_function("binarray", |b| {
        let mut ba = BinArray1024::new();
        let mut i = 0;
        b.iter(|| {
            ba.set_bit(black_box(i % SIZE_STANDARD));
            i += 1;
        });
    });

    group.bench_function("bitvec", |b| {
        let mut bv: BitVec<u32, Lsb0> = BitVec::repeat(false, SIZE_STANDARD);
        let mut i = 0;
        b.iter(|| {
            bv.set(black_box(i % SIZE_STANDARD), true);
            i += 1;
        });
    });

    group.finish();
}

fn bench_get_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_bit");

    group.bench_function("binarray", |b| {
        let ba = random_binarray(SEED);
        let mut i = 0;
        b.iter(|| {
            black_box(ba.get_bit(black_box(i % SIZE_STANDARD)));
            i += 1;
        });
    });

    group.bench_function("bitvec", |b| {
        let bv = random_bitvec(SEED);
        let mut i = 0;
        b.iter(|| {
            black_box(bv[black_box(i % SIZE_STANDARD)]);
            i += 1;
        });
    });

    group.finish();
}

fn bench_toggle_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_bit");

    group.bench_function("binarray", |b| {
        let mut ba = BinArray1024::new();
        let mut i = 0;
        b.iter(|| {
            ba.toggle_bit(black_box(i % SIZE_STANDARD));
            i += 1;
        });
    });

    group.bench_function("bitvec", |b| {
        let mut bv: BitVec<u32, Lsb0> = BitVec::repeat(false, SIZE_STANDARD);
        let mut i = 0;
        b.iter(|| {
            let idx = black_box(i % SIZE_STANDARD);
            let cur = bv[idx];
            bv.set(idx, !cur);
            i += 1;
        });
    });

    group.finish();
}

// =============================================================================
// Counting Operations
// =============================================================================

fn bench_num_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("num_set");

    let ba = random_binarray(SEED);
    group.bench_function("binarray", |b| b.iter(|| black_box(ba.num_set())));

    let bv = random_bitvec(SEED);
    group.bench_function("bitvec", |b| b.iter(|| black_box(bv.count_ones())));

    group.finish();
}

fn bench_num_similar(c: &mut Criterion) {
    let mut group = c.benchmark_group("num_similar");

    let (ba1, ba2) = (random_binarray(SEED), random_binarray(SEED + 1));
    group.bench_function("binarray", |b| b.iter(|| black_box(ba1.num_similar(&ba2))));

    let (bv1, bv2) = (random_bitvec(SEED), random_bitvec(SEED + 1));
    group.bench_function("bitvec", |b| {
        b.iter(|| black_box((bv1.clone() & bv2.as_bitslice()).count_ones()))
    });

    group.finish();
}

// =============================================================================
// Bulk Operations
// =============================================================================

fn bench_set_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_all");

    group.bench_function("binarray", |b| {
        let mut ba = BinArray1024::new();
        b.iter(|| ba.set_all());
    });

    group.bench_function("bitvec", |b| {
        let mut bv: BitVec<u32, Lsb0> = BitVec::repeat(false, SIZE_STANDARD);
        b.iter(|| bv.fill(true));
    });

    group.finish();
}

fn bench_get_acts(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_acts");

    let ba = random_binarray(SEED);
    group.bench_function("binarray", |b| b.iter(|| black_box(ba.get_acts())));

    let bv = random_bitvec(SEED);
    group.bench_function("bitvec", |b| {
        b.iter(|| black_box(bv.iter_ones().collect::<Vec<usize>>()))
    });

    group.finish();
}

// =============================================================================
// Logical Operations
// =============================================================================

fn bench_bitwise_and(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwise_and");

    let (ba1, ba2) = (random_binarray(SEED), random_binarray(SEED + 1));
    group.bench_function("binarray", |b| b.iter(|| black_box(&ba1 & &ba2)));

    let (bv1, bv2) = (random_bitvec(SEED), random_bitvec(SEED + 1));
    group.bench_function("bitvec", |b| b.iter(|| black_box(bv1.clone() & bv2.as_bitslice())));

    group.finish();
}

fn bench_bitwise_not(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwise_not");

    let ba = random_binarray(SEED);
    group.bench_function("binarray", |b| b.iter(|| black_box(!&ba)));

    let bv = random_bitvec(SEED);
    group.bench_function("bitvec", |b| b.iter(|| black_box(!bv.clone())));

    group.finish();
}

// =============================================================================
// Comparison, Copy and Shift
// =============================================================================

fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");

    let (ba1, ba2) = (random_binarray(SEED), random_binarray(SEED));
    group.bench_function("binarray", |b| b.iter(|| black_box(ba1 == ba2)));

    let (bv1, bv2) = (random_bitvec(SEED), random_bitvec(SEED));
    group.bench_function("bitvec", |b| b.iter(|| black_box(bv1 == bv2)));

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");

    let ba = random_binarray(SEED);
    group.bench_function("binarray", |b| b.iter(|| black_box(ba)));

    let bv = random_bitvec(SEED);
    group.bench_function("bitvec", |b| b.iter(|| black_box(bv.clone())));

    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_toward_msb");

    let ba = random_binarray(SEED);
    group.bench_function("binarray", |b| b.iter(|| black_box(ba << black_box(37))));

    let bv = random_bitvec(SEED);
    group.bench_function("bitvec", |b| {
        b.iter(|| {
            let mut shifted = bv.clone();
            shifted.shift_right(black_box(37));
            black_box(shifted)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set_bit,
    bench_get_bit,
    bench_toggle_bit,
    bench_num_set,
    bench_num_similar,
    bench_set_all,
    bench_get_acts,
    bench_bitwise_and,
    bench_bitwise_not,
    bench_equality,
    bench_copy,
    bench_shift
);

criterion_main!(benches);
