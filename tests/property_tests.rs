//! Property tests for shape transforms, legality and move choice.
//!
//! Boards are generated by letting the greedy search play a random number
//! of plies from an empty board, with random seats passing along the way,
//! so every generated board is one a real game can reach.

use proptest::prelude::*;

use polyomino_arena::board::{Board, BOARD_HEIGHT, BOARD_WIDTH};
use polyomino_arena::core::{Color, TurnAction};
use polyomino_arena::pieces::{
    oriented, transform, Orientation, PieceType, Rotation, Shape, FRAME_SIZE,
};
use polyomino_arena::search::choose_move;

fn piece() -> impl Strategy<Value = PieceType> {
    (0u8..21).prop_map(|i| PieceType::from_index(i).unwrap())
}

fn orientation() -> impl Strategy<Value = Orientation> {
    (0u8..4, any::<bool>()).prop_map(|(r, m)| Orientation::new(Rotation::from_quarter_turns(r), m))
}

fn color() -> impl Strategy<Value = Color> {
    (0usize..4).prop_map(|i| Color::ALL[i])
}

/// Play `plies` greedy moves, rotating through the colors.
fn played_board(plies: usize) -> Board {
    let mut board = Board::new();
    let mut inventories: Vec<Vec<PieceType>> = vec![PieceType::ALL.to_vec(); 4];
    for ply in 0..plies {
        let i = ply % 4;
        if let TurnAction::Place(mv) = choose_move(&board, &inventories[i], Color::ALL[i]) {
            board.place(mv.shape(), mv.x, mv.y, Color::ALL[i]);
            inventories[i].retain(|&p| p != mv.piece);
        }
    }
    board
}

fn cells_at(shape: &Shape, x: i32, y: i32) -> Vec<(i32, i32)> {
    shape
        .cells()
        .iter()
        .map(|&(dx, dy)| (x + dx as i32, y + dy as i32))
        .collect()
}

proptest! {
    #[test]
    fn transform_is_normalized(piece in piece(), o in orientation()) {
        let shape = transform(piece, o.rotation, o.mirrored);
        prop_assert_eq!(shape.len(), piece.size());
        prop_assert_eq!(shape.min_corner(), (0, 0));
        for &(x, y) in shape.cells() {
            prop_assert!((0..FRAME_SIZE).contains(&x) && (0..FRAME_SIZE).contains(&y));
        }
        let mut unique = shape.cells().to_vec();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), piece.size());
    }

    #[test]
    fn four_quarter_turns_are_identity(piece in piece(), o in orientation()) {
        let shape = transform(piece, o.rotation, o.mirrored);
        let turned = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        prop_assert!(turned.same_footprint(&shape));
    }

    #[test]
    fn cached_shapes_match_transform(piece in piece(), o in orientation()) {
        prop_assert_eq!(oriented(piece, o), &transform(piece, o.rotation, o.mirrored));
    }

    #[test]
    fn out_of_bounds_is_illegal(
        piece in piece(),
        o in orientation(),
        x in -30i32..50,
        y in -30i32..50,
        color in color(),
    ) {
        let shape = oriented(piece, o);
        let outside = cells_at(shape, x, y)
            .into_iter()
            .any(|(cx, cy)| cx < 0 || cy < 0 || cx >= BOARD_WIDTH || cy >= BOARD_HEIGHT);
        if outside {
            prop_assert!(!Board::new().is_legal(shape, x, y, color));
        }
    }

    #[test]
    fn legal_placements_obey_every_rule(
        plies in 0usize..40,
        piece in piece(),
        o in orientation(),
        x in 0i32..20,
        y in 0i32..20,
        color in color(),
    ) {
        let board = played_board(plies);
        let shape = oriented(piece, o);
        if board.is_legal(shape, x, y, color) {
            let cells = cells_at(shape, x, y);
            let mut corner_or_diagonal = false;
            for &(cx, cy) in &cells {
                // In bounds and empty.
                prop_assert_eq!(board.get(cx, cy), Some(None));
                // No same-color edge neighbor.
                for (nx, ny) in [(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)] {
                    prop_assert_ne!(board.get(nx, ny), Some(Some(color)));
                }
                let at_corner =
                    (cx == 0 || cx == BOARD_WIDTH - 1) && (cy == 0 || cy == BOARD_HEIGHT - 1);
                let diagonal =
                    [(cx + 1, cy + 1), (cx - 1, cy + 1), (cx + 1, cy - 1), (cx - 1, cy - 1)]
                        .into_iter()
                        .any(|(nx, ny)| board.get(nx, ny) == Some(Some(color)));
                corner_or_diagonal |= at_corner || diagonal;
            }
            prop_assert!(corner_or_diagonal);
        }
    }

    #[test]
    fn isolated_placement_needs_a_corner(
        piece in piece(),
        o in orientation(),
        x in 0i32..20,
        y in 0i32..20,
    ) {
        let shape = oriented(piece, o);
        let covers_corner = cells_at(shape, x, y)
            .into_iter()
            .any(|(cx, cy)| (cx == 0 || cx == 19) && (cy == 0 || cy == 19));
        let in_bounds = cells_at(shape, x, y)
            .into_iter()
            .all(|(cx, cy)| (0..20).contains(&cx) && (0..20).contains(&cy));
        let legal = Board::new().is_legal(shape, x, y, Color::Green);
        prop_assert_eq!(legal, covers_corner && in_bounds);
    }

    #[test]
    fn chosen_moves_are_legal_and_repeatable(plies in 0usize..60, color in color()) {
        let board = played_board(plies);
        let first = choose_move(&board, &PieceType::ALL, color);
        let second = choose_move(&board, &PieceType::ALL, color);
        prop_assert_eq!(first, second);
        if let TurnAction::Place(mv) = first {
            prop_assert!(board.is_legal(mv.shape(), mv.x, mv.y, color));
        }
    }
}
