//! Error types.
//!
//! - `ConfigError`: a configuration that cannot produce a well-formed game.
//!   Raised at load/construction time, never mid-turn.
//! - `EngineError`: a failure while resolving a turn or handling a snapshot.

use std::path::PathBuf;

use crate::core::PlayerId;

/// Errors raised while loading or validating a `GameConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("dice must have at least one side")]
    NoDiceSides,

    #[error("max chain depth must be at least 1")]
    ZeroChainDepth,

    #[error("special cell {position} is outside a board of {size} cells")]
    SpecialOffBoard { position: usize, size: usize },

    #[error("special cell {position} refers to card {card}, but only {count} cards exist")]
    UnknownCard {
        position: usize,
        card: usize,
        count: usize,
    },

    #[error("special cell {position} draws a card, but the deck is empty")]
    EmptyDeck { position: usize },

    #[error("move cells form a cycle: {0:?}")]
    MoveCycle(Vec<usize>),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the turn engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("roll {roll} is outside 1..={sides}")]
    InvalidRoll { roll: u32, sides: u32 },

    #[error("{player} is not in a {count}-player game")]
    UnknownPlayer { player: PlayerId, count: usize },

    #[error("effect chain for {player} exceeded {limit} steps (last cell {position})")]
    ChainTooDeep {
        player: PlayerId,
        limit: usize,
        position: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("snapshot does not match configuration: {0}")]
    SnapshotMismatch(String),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}
