//! End-to-end rule scenarios.
//!
//! Each test walks one complete situation through the public API: move
//! choice on a fresh board, the diagonal rule next to an existing piece,
//! a seat running out of pieces, and a full round of turn advances.

use polyomino_arena::board::Board;
use polyomino_arena::core::{Color, EngineError, GameConfig, GameState, Move, SeatId, TurnAction};
use polyomino_arena::pieces::{oriented, Orientation, PieceType, Rotation, Shape};
use polyomino_arena::search::{choose_move, legal_anchors};

fn seat(n: u8) -> SeatId {
    SeatId::new(n).unwrap()
}

/// A lone monomino on an empty board goes to the first corner in scan
/// order, unturned.
#[test]
fn test_single_cell_takes_top_left_corner() {
    let action = choose_move(&Board::new(), &[PieceType::I1], Color::Red);

    let TurnAction::Place(mv) = action else {
        panic!("expected a placement, got {action:?}");
    };
    assert_eq!(mv.piece, PieceType::I1);
    assert_eq!((mv.x, mv.y), (0, 0));
    assert_eq!(mv.orientation.rotation, Rotation::R0);
    assert!(!mv.orientation.mirrored);
}

/// Red owns (0,0). A red domino may not touch it edge-to-edge but may
/// touch it corner-to-corner at (1,1).
#[test]
fn test_domino_next_to_single_red_cell() {
    let mut board = Board::new();
    board.place(&Shape::canonical(PieceType::I1), 0, 0, Color::Red);

    for orientation in Orientation::ALL {
        let domino = oriented(PieceType::I2, orientation);
        // Anchors whose cells include (1,0) or (0,1).
        for (x, y) in [(1, 0), (0, 1)] {
            assert!(!board.is_legal(domino, x, y, Color::Red), "{orientation:?} at ({x},{y})");
        }
    }

    let flat = oriented(PieceType::I2, Orientation::IDENTITY);
    let upright = oriented(PieceType::I2, Orientation::new(Rotation::R90, false));
    assert!(board.is_legal(flat, 1, 1, Color::Red));
    assert!(board.is_legal(upright, 1, 1, Color::Red));

    // (0,1)-(1,1) would have (0,1) touching red along an edge.
    assert!(!board.is_legal(flat, 0, 1, Color::Red));

    let anchors = legal_anchors(&board, PieceType::I2, Orientation::IDENTITY, Color::Red);
    assert!(anchors.contains(&(1, 1)));
    assert!(!anchors.contains(&(1, 0)));
}

/// Placing the last piece passes the seat immediately. While it is still
/// the current seat it can neither place that piece again nor pass again,
/// and neither attempt leaves a trace.
#[test]
fn test_last_piece_passes_seat() {
    let config = GameConfig::new().with_inventory(seat(1), [PieceType::I2]);
    let mut state = GameState::new(&config);

    state
        .apply_move(seat(1), Move::new(PieceType::I2, Orientation::IDENTITY, 0, 0))
        .unwrap();
    assert!(state.is_passed(seat(1)));
    assert_eq!(state.score(seat(1)), 2);

    let history_len = state.history().len();

    assert_eq!(
        state.apply_move(seat(1), Move::new(PieceType::I2, Orientation::IDENTITY, 5, 5)),
        Err(EngineError::UnknownPieceType(PieceType::I2.index()))
    );
    assert_eq!(state.current_seat(), seat(1));
    assert_eq!(state.apply_pass(seat(1)), Err(EngineError::InvalidSeat(1)));
    assert_eq!(state.history().len(), history_len);
    assert!(state.is_passed(seat(1)));
}

/// Four advances visit seats 2, 3, 4 and come back to 1.
#[test]
fn test_four_advances_make_a_round() {
    let mut state = GameState::new(&GameConfig::new());
    let start_turn = state.turn();

    let visited: Vec<u8> = (0..4)
        .map(|_| {
            state.advance_turn();
            state.current_seat().number()
        })
        .collect();

    assert_eq!(visited, vec![2, 3, 4, 1]);
    assert_eq!(state.turn(), start_turn + 4);
}

/// Raw seat numbers outside 1..=4 are rejected before reaching a game.
#[test]
fn test_raw_seat_numbers() {
    assert_eq!(SeatId::new(0), Err(EngineError::InvalidSeat(0)));
    assert_eq!(SeatId::new(5), Err(EngineError::InvalidSeat(5)));
    assert_eq!(seat(3).color(), Color::Green);
    assert_eq!(Color::Yellow.seat(), seat(4));
}

/// Each color can open in any free corner, but not in one already taken.
#[test]
fn test_corner_already_taken() {
    let mut state = GameState::new(&GameConfig::new());
    let mono = |x, y| Move::new(PieceType::I1, Orientation::IDENTITY, x, y);

    state.apply_move(seat(1), mono(0, 0)).unwrap();
    state.advance_turn();
    assert_eq!(
        state.apply_move(seat(2), mono(0, 0)),
        Err(EngineError::IllegalPlacement { piece: PieceType::I1.index(), x: 0, y: 0 })
    );
    state.apply_move(seat(2), mono(19, 19)).unwrap();
    assert_eq!(state.board().get(19, 19), Some(Some(Color::Blue)));
}
