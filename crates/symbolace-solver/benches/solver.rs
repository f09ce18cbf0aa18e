//! Benchmarks for propagation and full solving.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use symbolace_solver::{propagate, solve, testing::SolveTester};

const EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const HARD: &str = "
    4__ ___ 8_5
    _3_ ___ ___
    ___ 7__ ___
    _2_ ___ _6_
    ___ _8_ 4__
    ___ _1_ ___
    ___ 6_3 _7_
    5__ 2__ ___
    1_4 ___ ___
";

fn bench_propagate(c: &mut Criterion) {
    let puzzle = SolveTester::classic(EASY).into_puzzle();
    c.bench_function("propagate/classic", |b| {
        b.iter(|| propagate(puzzle.incidence(), black_box(puzzle.board().clone())));
    });
}

fn bench_solve(c: &mut Criterion) {
    let easy = SolveTester::classic(EASY).into_puzzle();
    c.bench_function("solve/easy", |b| {
        b.iter(|| solve(black_box(&easy)));
    });

    let hard = SolveTester::classic(HARD).into_puzzle();
    c.bench_function("solve/hard", |b| {
        b.iter(|| solve(black_box(&hard)));
    });
}

criterion_group!(benches, bench_propagate, bench_solve);
criterion_main!(benches);
