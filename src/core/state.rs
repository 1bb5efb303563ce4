//! Game state: seats, board, turn counter, history.
//!
//! ## PlayerSlot
//!
//! Per-seat information:
//! - Identity (human name or automated tag)
//! - Remaining pieces, in catalog order
//! - Score (cells placed) and the sticky `passed` flag
//! - Every piece placed so far, in placement order
//!
//! ## GameState
//!
//! The four slots, the shared board, whose turn it is, the turn counter and
//! the action history. All mutation goes through [`GameState::apply_move`],
//! [`GameState::apply_pass`] and [`GameState::advance_turn`]; a rejected
//! action leaves the state untouched.
//!
//! Neither operation ends the game or advances the turn on its own. Turn
//! sequencing lives in `rules::turn`, end detection in `rules::outcome`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Move, PlacedPiece, TurnAction};
use super::config::{GameConfig, SeatIdentity};
use super::error::EngineError;
use super::player::{Color, SeatId, SeatMap};
use crate::board::Board;
use crate::pieces::PieceType;
use crate::search::any_legal_placement;

/// Everything the game knows about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    seat: SeatId,
    identity: SeatIdentity,
    inventory: Vec<PieceType>,
    score: u32,
    passed: bool,
    placed: Vec<PlacedPiece>,
}

impl PlayerSlot {
    fn new(seat: SeatId, identity: SeatIdentity, inventory: Vec<PieceType>) -> Self {
        let passed = inventory.is_empty();
        Self {
            seat,
            identity,
            inventory,
            score: 0,
            passed,
            placed: Vec::new(),
        }
    }

    /// Seat number.
    #[must_use]
    pub fn seat(&self) -> SeatId {
        self.seat
    }

    /// Color played by this seat.
    #[must_use]
    pub fn color(&self) -> Color {
        self.seat.color()
    }

    /// Human name or automated tag.
    #[must_use]
    pub fn identity(&self) -> &SeatIdentity {
        &self.identity
    }

    /// Remaining pieces, in catalog order.
    #[must_use]
    pub fn inventory(&self) -> &[PieceType] {
        &self.inventory
    }

    /// Cells placed so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Has this seat left the game?
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.passed
    }

    /// Placed pieces, oldest first.
    #[must_use]
    pub fn placed(&self) -> &[PlacedPiece] {
        &self.placed
    }

    fn holds(&self, piece: PieceType) -> Option<usize> {
        self.inventory.iter().position(|&p| p == piece)
    }
}

/// Complete state of one game.
///
/// Cheap to clone apart from the board; the history is a persistent
/// vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Seats ===
    seats: SeatMap<PlayerSlot>,

    // === Progression ===
    /// Seat whose turn it is.
    current: SeatId,

    /// Starts at 1, +1 per advance.
    turn: u32,

    // === Board & History ===
    board: Board,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Start a game: empty board, seat 1 to act, turn 1.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let identities = config.identities();
        Self {
            seats: SeatMap::new(|seat| {
                PlayerSlot::new(seat, identities[seat].clone(), config.inventory(seat))
            }),
            current: SeatId::FIRST,
            turn: 1,
            board: Board::new(),
            history: Vector::new(),
        }
    }

    // === Mutation ===

    /// Place a piece for the current seat.
    ///
    /// Checked in order:
    /// 1. `seat` is the current seat, else `InvalidSeat`
    /// 2. the piece is still in the seat's inventory, else `UnknownPieceType`
    /// 3. the seat has not passed, else `InvalidSeat`
    /// 4. the placement is legal for the seat's color, else `IllegalPlacement`
    ///
    /// On success the piece is drawn, removed from the inventory and scored.
    /// Placing the last piece marks the seat passed. The turn does not
    /// advance.
    pub fn apply_move(&mut self, seat: SeatId, mv: Move) -> Result<(), EngineError> {
        if seat != self.current {
            return Err(EngineError::InvalidSeat(seat.number()));
        }

        let slot = &self.seats[seat];
        let position = slot
            .holds(mv.piece)
            .ok_or(EngineError::UnknownPieceType(mv.piece.index()))?;
        if slot.passed {
            return Err(EngineError::InvalidSeat(seat.number()));
        }

        let shape = mv.shape();
        let color = seat.color();
        if !self.board.is_legal(shape, mv.x, mv.y, color) {
            return Err(EngineError::IllegalPlacement {
                piece: mv.piece.index(),
                x: mv.x,
                y: mv.y,
            });
        }

        self.board.place(shape, mv.x, mv.y, color);

        let slot = &mut self.seats[seat];
        slot.inventory.remove(position);
        slot.score += mv.piece.size() as u32;
        slot.placed.push(PlacedPiece::from(mv));
        if slot.inventory.is_empty() {
            slot.passed = true;
        }

        self.history
            .push_back(ActionRecord::new(seat, TurnAction::Place(mv), self.turn));
        Ok(())
    }

    /// Pass for the current seat.
    ///
    /// Passing is permanent. A seat that has already passed, including one
    /// that placed its last piece, is refused with `InvalidSeat` and nothing
    /// changes. The turn does not advance.
    pub fn apply_pass(&mut self, seat: SeatId) -> Result<(), EngineError> {
        if seat != self.current || self.seats[seat].passed {
            return Err(EngineError::InvalidSeat(seat.number()));
        }

        self.seats[seat].passed = true;
        self.history
            .push_back(ActionRecord::new(seat, TurnAction::Pass, self.turn));
        Ok(())
    }

    /// Apply either kind of action.
    pub fn apply(&mut self, seat: SeatId, action: TurnAction) -> Result<(), EngineError> {
        match action {
            TurnAction::Place(mv) => self.apply_move(seat, mv),
            TurnAction::Pass => self.apply_pass(seat),
        }
    }

    /// Hand the turn to the next seat (4 wraps to 1) and bump the counter.
    ///
    /// Unconditional: passed seats are skipped by the turn driver, not here.
    pub fn advance_turn(&mut self) {
        self.current = self.current.next();
        self.turn += 1;
    }

    // === Queries ===

    /// The shared board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One seat's slot.
    #[must_use]
    pub fn seat(&self, seat: SeatId) -> &PlayerSlot {
        &self.seats[seat]
    }

    /// All slots in seat order.
    pub fn seats(&self) -> impl Iterator<Item = &PlayerSlot> {
        self.seats.values()
    }

    /// Remaining pieces of a seat, in catalog order.
    #[must_use]
    pub fn inventory(&self, seat: SeatId) -> &[PieceType] {
        self.seats[seat].inventory()
    }

    /// Score of a seat.
    #[must_use]
    pub fn score(&self, seat: SeatId) -> u32 {
        self.seats[seat].score
    }

    /// Has a seat passed?
    #[must_use]
    pub fn is_passed(&self, seat: SeatId) -> bool {
        self.seats[seat].passed
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current
    }

    /// Turn counter.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Can a seat still place any of its remaining pieces?
    #[must_use]
    pub fn seat_can_move(&self, seat: SeatId) -> bool {
        let slot = &self.seats[seat];
        !slot.passed && any_legal_placement(&self.board, &slot.inventory, slot.color())
    }

    /// Redraw the board from every seat's placed pieces.
    ///
    /// Always equal to [`board`](Self::board); useful for auditing a stored
    /// snapshot.
    #[must_use]
    pub fn rebuild_board(&self) -> Board {
        Board::from_placements(
            self.seats
                .values()
                .flat_map(|slot| slot.placed.iter().map(move |p| (slot.color(), p))),
        )
    }
}
