//! Benchmarks for the puzzle engine hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eight_puzzle::core::{Board, EngineConfig, Position};
use eight_puzzle::engine::PuzzleEngine;

/// Benchmark a full shuffle and counter reset.
fn bench_new_game(c: &mut Criterion) {
    let mut engine = PuzzleEngine::with_seed(EngineConfig::default(), 42);

    c.bench_function("new_game", |b| b.iter(|| black_box(engine.new_game())));
}

/// Benchmark clicking every cell once on a shuffled board.
fn bench_move_sweep(c: &mut Criterion) {
    let mut engine = PuzzleEngine::with_seed(EngineConfig::default(), 42);
    engine.new_game();

    c.bench_function("attempt_move_sweep", |b| {
        b.iter(|| {
            for position in Position::ALL {
                black_box(engine.attempt_move(black_box(position)));
            }
        })
    });
}

/// Benchmark the win check on its own.
fn bench_win_check(c: &mut Criterion) {
    let board = Board::solved();

    c.bench_function("is_solved", |b| b.iter(|| black_box(&board).is_solved()));
}

criterion_group!(benches, bench_new_game, bench_move_sweep, bench_win_check);
criterion_main!(benches);
