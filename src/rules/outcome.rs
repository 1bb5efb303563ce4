//! End-of-game detection and ranking.
//!
//! The state machine never ends a game on its own. A game is over once all
//! four seats have passed; the highest score wins and equal top scores share
//! the win.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, SeatId};

/// Final result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(SeatId),
    /// Shared top score, in seat order.
    Winners(Vec<SeatId>),
}

impl GameResult {
    /// Check if a seat won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        match self {
            GameResult::Winner(s) => *s == seat,
            GameResult::Winners(ss) => ss.contains(&seat),
        }
    }
}

/// Have all four seats passed?
#[must_use]
pub fn is_finished(state: &GameState) -> bool {
    state.seats().all(|slot| slot.is_passed())
}

/// Seats with their scores, best first. Ties keep seat order.
#[must_use]
pub fn standings(state: &GameState) -> Vec<(SeatId, u32)> {
    let mut table: Vec<(SeatId, u32)> = state.seats().map(|s| (s.seat(), s.score())).collect();
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// Result of the game, or `None` while any seat is still playing.
#[must_use]
pub fn outcome(state: &GameState) -> Option<GameResult> {
    if !is_finished(state) {
        return None;
    }

    let table = standings(state);
    let best = table.first()?.1;
    let mut leaders: Vec<SeatId> = table
        .into_iter()
        .take_while(|&(_, score)| score == best)
        .map(|(seat, _)| seat)
        .collect();

    if leaders.len() == 1 {
        leaders.pop().map(GameResult::Winner)
    } else {
        Some(GameResult::Winners(leaders))
    }
}

/// First seat, in seat order, holding the fewest remaining pieces.
///
/// This is the seat shown as leading while the game is running.
#[must_use]
pub fn fewest_remaining(state: &GameState) -> SeatId {
    // min_by_key keeps the first of equal minima
    state
        .seats()
        .min_by_key(|slot| slot.inventory().len())
        .map_or(SeatId::FIRST, |slot| slot.seat())
}
