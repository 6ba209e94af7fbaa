//! Core engine types: players, state, RNG, configuration, errors.
//!
//! These are the building blocks every other module works with. The
//! configuration is the only input; the state is the only thing that changes.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, PlayerConfig, DEFAULT_MAX_CHAIN_DEPTH};
pub use error::{ConfigError, EngineError};
pub use state::GameState;
