//! Stored games and serialized access to them.
//!
//! - `store`: the `GameStore` boundary and an in-memory implementation
//! - `table`: `GameTable`, one lock per game around load, act, save

pub mod store;
#[allow(clippy::module_inception)]
pub mod table;

pub use store::{GameId, GameStore, MemoryStore};
pub use table::GameTable;
