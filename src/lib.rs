//! # board-race
//!
//! A turn engine for linear board-race games: players roll a die, move along
//! a numbered track, and get pushed around by ladders, holes and cards until
//! someone reaches the finish.
//!
//! ## Design Principles
//!
//! 1. **Configuration, not globals**: the board, cards and players are an
//!    explicit `GameConfig`, validated once and immutable afterwards.
//!
//! 2. **Bounded chains**: landing effects resolve in an explicit loop with a
//!    depth limit. Bad boards fail with an error, never a stack overflow.
//!
//! 3. **Deterministic**: all randomness comes from a seeded `GameRng`, so a
//!    seed (or a `Snapshot`) replays a game exactly.
//!
//! 4. **Presentation-agnostic**: the engine reports through `GameObserver`
//!    and never draws anything itself.
//!
//! ## Modules
//!
//! - `core`: Players, state, RNG, configuration, errors
//! - `board`: Track and special cells
//! - `cards`: Card definitions and the deck
//! - `effects`: Chain steps and the chain resolver
//! - `events`: Game events and observers
//! - `rules`: The turn engine and snapshots
//! - `render`: Plain-text board rendering
//! - `games`: Ready-made configurations

pub mod core;
pub mod board;
pub mod cards;
pub mod effects;
pub mod events;
pub mod rules;
pub mod render;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player,
    GameRng, GameRngState,
    GameConfig, PlayerConfig,
    GameState,
    ConfigError, EngineError,
};

pub use crate::board::{Board, Special, SpecialEffect};

pub use crate::cards::{Card, CardAction, CardDeck, CardId};

pub use crate::effects::{ChainReport, ChainResolver, ChainStep, ResolverContext};

pub use crate::events::{EventLog, GameEvent, GameObserver, LogObserver, NullObserver};

pub use crate::rules::{Snapshot, TurnEngine, TurnOutcome, TurnReport};
