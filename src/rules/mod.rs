//! Turn rules.
//!
//! - `TurnEngine`: rolls, moves, resolves chains and passes the turn
//! - `Snapshot`: save and resume a game mid-way
//!
//! The engine is the only component that mutates `GameState`; everything it
//! does is reported through a `GameObserver`.

pub mod engine;
pub mod snapshot;

pub use engine::{TurnEngine, TurnOutcome, TurnReport};
pub use snapshot::Snapshot;
