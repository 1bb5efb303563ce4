//! Turn sequencing after an action.
//!
//! Once a seat has acted, the driver hands the turn around the table until
//! a human has to decide something:
//!
//! ```text
//! repeat at most 4 times:
//!     advance to the next seat
//!     seat has passed     -> next iteration
//!     seat is automated   -> choose, pause, apply, next iteration
//!     seat is human       -> stop and wait
//! ```
//!
//! Four iterations cover one full round, so a run never visits a seat
//! twice. The bound is re-clamped on every run, so a config edited in
//! place or deserialized with an out-of-range value still obeys it. If
//! every seat is automated, or every remaining seat has passed, the run
//! simply ends after the bound; call it again to keep going.
//!
//! [`TurnDriver::resume`] is the entry point for picking a stored game back
//! up: a human seat that is already on turn keeps it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    ActionRecord, DriverConfig, EngineError, GameState, SeatId, TurnAction, SEAT_COUNT,
};
use crate::events::{EventSink, GameEvent};
use crate::search::{GreedyFirstFit, MovePolicy};

/// Delay hook run before every automated action.
///
/// Only affects timing, never the outcome.
pub trait Pacer: Send + Sync {
    fn pause(&self, seat: SeatId);
}

/// No delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&self, _seat: SeatId) {}
}

/// Blocks the calling thread for a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct SleepPacer(pub Duration);

impl Pacer for SleepPacer {
    fn pause(&self, _seat: SeatId) {
        std::thread::sleep(self.0);
    }
}

/// What a driver call did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Seat advances performed.
    pub advances: usize,

    /// Actions applied, in order. Includes a submitted human action.
    pub actions: Vec<ActionRecord>,

    /// Current seat when the call returned.
    pub stopped_at: Option<SeatId>,

    /// True if the call stopped because a human seat has to act.
    pub awaiting_human: bool,
}

/// Runs automated seats between human decisions.
pub struct TurnDriver {
    config: DriverConfig,
    policy: Box<dyn MovePolicy>,
    pacer: Box<dyn Pacer>,
}

impl Default for TurnDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

impl TurnDriver {
    /// Driver with the greedy policy and the configured pause.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        let pacer: Box<dyn Pacer> = if config.automated_pause.is_zero() {
            Box::new(NoPause)
        } else {
            Box::new(SleepPacer(config.automated_pause))
        };
        Self {
            config,
            policy: Box::new(GreedyFirstFit),
            pacer,
        }
    }

    /// Replace the automated move policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the pacer.
    #[must_use]
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Driver settings.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Apply a human action for `seat`, then run the loop.
    ///
    /// A rejected action is returned as-is and nothing advances.
    pub fn submit(
        &self,
        state: &mut GameState,
        seat: SeatId,
        action: TurnAction,
        sink: &mut dyn EventSink,
    ) -> Result<TurnReport, EngineError> {
        state.apply(seat, action)?;
        let record = ActionRecord::new(seat, action, state.turn());
        sink.emit(action_event(seat, action));

        let mut report = self.run(state, sink)?;
        report.actions.insert(0, record);
        Ok(report)
    }

    /// Begin play on a fresh game.
    ///
    /// If the current seat is automated and still in the game it acts
    /// first, then the loop runs. Otherwise nothing happens: a human seat
    /// acts through [`submit`](Self::submit).
    pub fn start(
        &self,
        state: &mut GameState,
        sink: &mut dyn EventSink,
    ) -> Result<TurnReport, EngineError> {
        let seat = state.current_seat();
        if state.is_passed(seat) {
            return self.run(state, sink);
        }
        if let Some(report) = waiting_on_human(state) {
            return Ok(report);
        }

        let record = self.play_automated(state, seat, sink)?;
        let mut report = self.run(state, sink)?;
        report.actions.insert(0, record);
        Ok(report)
    }

    /// Continue a game that is between calls.
    ///
    /// A human seat on turn that has not passed keeps the turn and nothing
    /// advances. In every other case the loop runs as usual; an automated
    /// seat on turn has already acted, so it is not asked again.
    pub fn resume(
        &self,
        state: &mut GameState,
        sink: &mut dyn EventSink,
    ) -> Result<TurnReport, EngineError> {
        match waiting_on_human(state) {
            Some(report) => Ok(report),
            None => self.run(state, sink),
        }
    }

    /// The post-action loop. See the module docs.
    pub fn run(
        &self,
        state: &mut GameState,
        sink: &mut dyn EventSink,
    ) -> Result<TurnReport, EngineError> {
        let mut report = TurnReport::default();
        let bound = self.config.max_advances.clamp(1, SEAT_COUNT);

        for _ in 0..bound {
            state.advance_turn();
            let seat = state.current_seat();
            report.advances += 1;
            sink.emit(GameEvent::SeatAdvanced { seat, turn: state.turn() });

            if state.is_passed(seat) {
                continue;
            }

            if !state.seat(seat).identity().is_automated() {
                report.awaiting_human = true;
                break;
            }

            let record = self.play_automated(state, seat, sink)?;
            report.actions.push(record);
        }

        report.stopped_at = Some(state.current_seat());
        Ok(report)
    }

    fn play_automated(
        &self,
        state: &mut GameState,
        seat: SeatId,
        sink: &mut dyn EventSink,
    ) -> Result<ActionRecord, EngineError> {
        let slot = state.seat(seat);
        let action = self.policy.choose(state.board(), slot.inventory(), slot.color());

        self.pacer.pause(seat);

        state
            .apply(seat, action)
            .map_err(|err| EngineError::Internal(format!("automated {seat} was refused: {err}")))?;
        sink.emit(action_event(seat, action));
        Ok(ActionRecord::new(seat, action, state.turn()))
    }
}

/// A report for a human seat that is on turn and still playing.
fn waiting_on_human(state: &GameState) -> Option<TurnReport> {
    let seat = state.current_seat();
    if state.is_passed(seat) || state.seat(seat).identity().is_automated() {
        return None;
    }
    Some(TurnReport {
        stopped_at: Some(seat),
        awaiting_human: true,
        ..TurnReport::default()
    })
}

fn action_event(seat: SeatId, action: TurnAction) -> GameEvent {
    match action {
        TurnAction::Place(mv) => GameEvent::Placed { seat, mv },
        TurnAction::Pass => GameEvent::Passed { seat },
    }
}
