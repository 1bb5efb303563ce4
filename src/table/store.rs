//! Game persistence.
//!
//! The engine only needs three things from storage: create a game, load it,
//! save it back. [`MemoryStore`] keeps bincode snapshots in a hash map,
//! which is enough for tests and single-process servers.

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameState};

/// Identifier of a stored game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Storage for game snapshots.
///
/// Implementations must be safe to share between threads. Callers
/// serialize load/save sequences per game, so a store does not need to.
pub trait GameStore: Send + Sync {
    /// Load a game. Absent ids fail with `GameNotFound`.
    fn load(&self, id: GameId) -> Result<GameState, EngineError>;

    /// Overwrite a stored game.
    fn save(&self, id: GameId, state: &GameState) -> Result<(), EngineError>;

    /// Store a new game under a fresh id.
    fn create(&self, state: &GameState) -> Result<GameId, EngineError>;

    /// Is a game stored under `id`?
    fn contains(&self, id: GameId) -> bool;
}

#[derive(Default)]
struct Inner {
    games: FxHashMap<GameId, Vec<u8>>,
    next_id: u64,
}

/// In-process store of bincode-encoded snapshots.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // The map is never left half-written, so a poisoned lock is still
        // consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GameStore for MemoryStore {
    fn load(&self, id: GameId) -> Result<GameState, EngineError> {
        let inner = self.lock();
        let bytes = inner.games.get(&id).ok_or(EngineError::GameNotFound(id.0))?;
        Ok(bincode::deserialize(bytes)?)
    }

    fn save(&self, id: GameId, state: &GameState) -> Result<(), EngineError> {
        let bytes = bincode::serialize(state)?;
        let mut inner = self.lock();
        match inner.games.get_mut(&id) {
            Some(slot) => {
                *slot = bytes;
                Ok(())
            }
            None => Err(EngineError::GameNotFound(id.0)),
        }
    }

    fn create(&self, state: &GameState) -> Result<GameId, EngineError> {
        let bytes = bincode::serialize(state)?;
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = GameId(inner.next_id);
        inner.games.insert(id, bytes);
        Ok(id)
    }

    fn contains(&self, id: GameId) -> bool {
        self.lock().games.contains_key(&id)
    }
}
