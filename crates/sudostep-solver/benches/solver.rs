//! Benchmarks for the hot strategy finders and the brute-force solver.
//!
//! The finders spend essentially all of their time in 128-bit pattern-mask
//! operations; these benches keep an eye on that inner loop.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use sudostep_core::Board;
use sudostep_solver::strategy::{
    chains::{LengthRange, XChain},
    fish::Fish,
    subsets::NakedSubset,
    wings::XyWing,
};

// A singles-only puzzle and a grid state rich in fish patterns.
const CLASSIC: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const FISHY: &str =
    "1.....569492.561.8.561.924...964.8.1.64.1....218.356.4.4.5...169.1.64.85.6.9.1.2.";

fn bench_brute_force(c: &mut Criterion) {
    let board = Board::from_short(CLASSIC).unwrap();
    c.bench_function("brute_force_unique", |b| {
        b.iter_batched_ref(
            || hint::black_box(board.clone()),
            |board| hint::black_box(board.brute_force(2)),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_finders(c: &mut Criterion) {
    let classic = Board::from_short(CLASSIC).unwrap();
    let fishy = Board::from_short(FISHY).unwrap();

    c.bench_function("find_naked_pair", |b| {
        b.iter(|| hint::black_box(NakedSubset::find(hint::black_box(&classic), 2)));
    });
    c.bench_function("find_x_wing", |b| {
        b.iter(|| hint::black_box(Fish::find(hint::black_box(&fishy), 2, false)));
    });
    c.bench_function("find_finned_swordfish", |b| {
        b.iter(|| hint::black_box(Fish::find(hint::black_box(&fishy), 3, true)));
    });
    c.bench_function("find_xy_wing", |b| {
        b.iter(|| hint::black_box(XyWing::find(hint::black_box(&fishy))));
    });
    c.bench_function("find_turbot_fish", |b| {
        b.iter(|| {
            hint::black_box(XChain::find(
                hint::black_box(&fishy),
                LengthRange::at_most(3),
            ))
        });
    });
}

criterion_group!(benches, bench_brute_force, bench_finders);
criterion_main!(benches);
