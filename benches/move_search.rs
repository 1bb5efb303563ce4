use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyomino_arena::board::Board;
use polyomino_arena::core::{Color, GameConfig, GameState};
use polyomino_arena::events::NullSink;
use polyomino_arena::pieces::{oriented, Orientation, PieceType};
use polyomino_arena::rules::TurnDriver;
use polyomino_arena::search::{any_legal_placement, choose_move, legal_anchors};

/// A mid-game position: three automated rounds from a fresh game.
fn midgame() -> GameState {
    let mut state = GameState::new(&GameConfig::new());
    let driver = TurnDriver::default();
    let _ = driver.start(&mut state, &mut NullSink);
    for _ in 0..3 {
        let _ = driver.run(&mut state, &mut NullSink);
    }
    state
}

fn bench_is_legal(c: &mut Criterion) {
    let board = midgame().board().clone();
    let shape = oriented(PieceType::F5, Orientation::IDENTITY);

    c.bench_function("is_legal_f5", |b| {
        b.iter(|| board.is_legal(black_box(shape), black_box(7), black_box(9), Color::Green))
    });
}

fn bench_choose_move_empty(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("choose_move_empty_board", |b| {
        b.iter(|| choose_move(black_box(&board), &PieceType::ALL, Color::Red))
    });
}

fn bench_choose_move_midgame(c: &mut Criterion) {
    let state = midgame();
    let seat = state.current_seat();

    c.bench_function("choose_move_midgame", |b| {
        b.iter(|| choose_move(black_box(state.board()), state.inventory(seat), seat.color()))
    });
}

fn bench_any_legal(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("any_legal_placement_midgame", |b| {
        b.iter(|| any_legal_placement(black_box(state.board()), &PieceType::ALL, Color::Yellow))
    });
}

fn bench_legal_anchors(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("legal_anchors_midgame", |b| {
        b.iter(|| {
            let board = black_box(state.board());
            legal_anchors(board, PieceType::V3, Orientation::IDENTITY, Color::Blue)
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("automated_game", |b| {
        b.iter(|| {
            let mut state = GameState::new(&GameConfig::new());
            let driver = TurnDriver::default();
            let _ = driver.start(&mut state, &mut NullSink);
            for _ in 0..30 {
                let _ = driver.run(&mut state, &mut NullSink);
            }
            state
        })
    });
}

criterion_group!(
    benches,
    bench_is_legal,
    bench_choose_move_empty,
    bench_choose_move_midgame,
    bench_any_legal,
    bench_legal_anchors,
    bench_full_game,
);
criterion_main!(benches);
