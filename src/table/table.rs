//! Per-game serialized access.
//!
//! Every mutating request for a game runs load, act, drive and save while
//! holding that game's lock, so two requests for the same game never
//! interleave. Different games have different locks and proceed in
//! parallel.
//!
//! A lock is only created for an id the store already holds. Requests for
//! unknown ids fail with `GameNotFound` and leave the lock map unchanged.
//! Stored games are never removed, so the map stays bounded by the store.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::store::{GameId, GameStore};
use crate::core::{EngineError, GameConfig, GameState, SeatId, TurnAction};
use crate::events::EventSink;
use crate::rules::{TurnDriver, TurnReport};

/// A store plus a driver, with one lock per game.
pub struct GameTable<S: GameStore> {
    store: S,
    driver: TurnDriver,
    locks: Mutex<FxHashMap<GameId, Arc<Mutex<()>>>>,
}

impl<S: GameStore> GameTable<S> {
    /// Table with the default driver.
    pub fn new(store: S) -> Self {
        Self::with_driver(store, TurnDriver::default())
    }

    pub fn with_driver(store: S, driver: TurnDriver) -> Self {
        Self {
            store,
            driver,
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a game, let automated seats play until the first human
    /// decision, then store it.
    ///
    /// Nothing is stored if the opening moves fail. The id is not visible
    /// to other callers until the game is stored, so no lock is needed.
    pub fn open(
        &self,
        config: &GameConfig,
        sink: &mut dyn EventSink,
    ) -> Result<(GameId, TurnReport), EngineError> {
        let mut state = GameState::new(config);
        let report = self.driver.start(&mut state, sink)?;
        let id = self.store.create(&state)?;
        Ok((id, report))
    }

    /// Apply a seat's action and drive the game to the next human decision.
    ///
    /// `seat` is the raw seat number from the request; numbers outside
    /// 1..=4 fail with `SeatNotFound`.
    pub fn act(
        &self,
        id: GameId,
        seat: u8,
        action: TurnAction,
        sink: &mut dyn EventSink,
    ) -> Result<TurnReport, EngineError> {
        let lock = self.lock_for(id)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut state = self.store.load(id)?;
        let seat = SeatId::new(seat).map_err(|_| EngineError::SeatNotFound { game: id.0, seat })?;
        let report = self.driver.submit(&mut state, seat, action, sink)?;
        self.store.save(id, &state)?;
        Ok(report)
    }

    /// Run the driver loop once without a human action.
    ///
    /// Keeps a game with no human seats moving, one round per call. A human
    /// seat already on turn keeps it and the game is left as it was.
    pub fn resume(&self, id: GameId, sink: &mut dyn EventSink) -> Result<TurnReport, EngineError> {
        let lock = self.lock_for(id)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut state = self.store.load(id)?;
        let report = self.driver.resume(&mut state, sink)?;
        self.store.save(id, &state)?;
        Ok(report)
    }

    /// Current state of a game, read-only.
    pub fn snapshot(&self, id: GameId) -> Result<GameState, EngineError> {
        let lock = self.lock_for(id)?;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.store.load(id)
    }

    fn lock_for(&self, id: GameId) -> Result<Arc<Mutex<()>>, EngineError> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(lock) = locks.get(&id) {
            return Ok(Arc::clone(lock));
        }
        if !self.store.contains(id) {
            return Err(EngineError::GameNotFound(id.0));
        }
        Ok(Arc::clone(locks.entry(id).or_default()))
    }
}
