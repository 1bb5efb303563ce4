//! Placement scanning and automated move search.
//!
//! - `scanner`: can a color move at all, and where may one oriented piece go
//! - `greedy`: the deterministic largest-piece-first move choice
//! - `policy`: the `MovePolicy` seam the turn driver calls through
//! - `stats`: probe counters for diagnostics and benchmarks
//!
//! All searches read the board without mutating it, so any number may run
//! against the same snapshot.

pub mod greedy;
pub mod policy;
pub mod scanner;
pub mod stats;

pub use greedy::{choose_move, choose_move_with_stats};
pub use policy::{GreedyFirstFit, MovePolicy};
pub use scanner::{anchors, any_legal_placement, legal_anchors};
pub use stats::SearchStats;
