//! Game flow on top of the state machine.
//!
//! - `turn`: the bounded driver loop that plays automated seats and stops
//!   at the next human decision
//! - `outcome`: end detection, standings and the final result

pub mod outcome;
pub mod turn;

pub use outcome::{fewest_remaining, is_finished, outcome, standings, GameResult};
pub use turn::{NoPause, Pacer, SleepPacer, TurnDriver, TurnReport};
