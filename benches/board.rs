//! Benchmarks for the puzzle engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fifteen::Board;

/// Benchmark the full 100 × size shuffle walk on a 4x4 board.
fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("shuffle_4x4", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::new(4).unwrap();
        b.iter(|| {
            board.shuffle(&mut rng);
            black_box(board.blank())
        })
    });
}

/// Benchmark a legal move and the move that undoes it.
fn bench_apply_move(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut board = Board::new(4).unwrap();
    board.shuffle(&mut rng);
    let here = board.blank();
    let there = board.movable_cells()[0];

    c.bench_function("apply_move_pair", |b| {
        b.iter(|| {
            board.apply_move(there.0, there.1).unwrap();
            board.apply_move(here.0, here.1).unwrap();
            black_box(board.move_count())
        })
    });
}

/// Benchmark the exact-equality win check on a 5x5 board.
fn bench_is_won(c: &mut Criterion) {
    let board = Board::new(5).unwrap();
    c.bench_function("is_won_5x5", |b| b.iter(|| black_box(&board).is_won()));
}

/// Benchmark enumerating the blank's neighbors.
fn bench_movable_cells(c: &mut Criterion) {
    let board = Board::new(5).unwrap();
    c.bench_function("movable_cells", |b| {
        b.iter(|| black_box(&board).movable_cells())
    });
}

criterion_group!(
    benches,
    bench_shuffle,
    bench_apply_move,
    bench_is_won,
    bench_movable_cells
);
criterion_main!(benches);
