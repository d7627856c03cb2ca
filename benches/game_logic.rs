use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gestris::core::rng::FixedPieces;
use gestris::core::{Board, GameState};
use gestris::gesture::{GestureTranslator, Point};
use gestris::types::{Color, PieceKind};

fn bench_soft_drop_cycle(c: &mut Criterion) {
    c.bench_function("soft_drop_full_column", |b| {
        b.iter(|| {
            let mut state = GameState::with_source(Box::new(FixedPieces::repeating(
                black_box(PieceKind::I),
            )));
            while state.soft_drop_step() {}
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(Color::Cyan));
                }
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            state.move_piece(black_box(1));
            state.move_piece(black_box(-1));
        })
    });

    c.bench_function("rotate", |b| {
        b.iter(|| state.rotate())
    });
}

fn bench_translate(c: &mut Criterion) {
    let mut translator = GestureTranslator::default();
    let point = Point::new(100.0, 240.0);
    let mut t = Duration::ZERO;

    c.bench_function("translate_poll", |b| {
        b.iter(|| {
            t += Duration::from_millis(33);
            translator.translate(black_box(Some(point)), t)
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_soft_drop_cycle,
    bench_line_clear,
    bench_move_and_rotate,
    bench_translate,
    bench_snapshot
);
criterion_main!(benches);
