//! Game configuration.
//!
//! A game is configured once at startup by providing:
//! - `PlayerConfig`: name and token color for each racer
//! - `Board`: track size and special cells
//! - `CardDeck`: the ordered card sequence
//! - dice sides and the chain depth limit
//!
//! The configuration is immutable once an engine owns it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::{Board, Special, SpecialEffect};
use crate::cards::{Card, CardDeck};

/// Default limit on chained effects within one turn.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 64;

fn default_max_chain_depth() -> usize {
    DEFAULT_MAX_CHAIN_DEPTH
}

/// A racer as configured before the game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl PlayerConfig {
    /// Create a player configuration.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use board_race::board::Special;
/// use board_race::core::GameConfig;
///
/// let config = GameConfig::new(100)
///     .with_player("Blue", "#0ea5e9")
///     .with_player("Red", "#ef4444")
///     .with_special(3, Special::shift("Ladder: +10", 10))
///     .with_special(99, Special::goal("Finish!"))
///     .with_dice_sides(6);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Racers in identity (and turn) order.
    pub players: Vec<PlayerConfig>,

    pub board: Board,

    #[serde(default)]
    pub cards: CardDeck,

    /// Faces on the die (at least 1).
    pub dice_sides: u32,

    /// Maximum chained effects resolved in a single turn.
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: usize,
}

impl GameConfig {
    /// Create a configuration with an empty board of `board_size` cells,
    /// no players, no cards and a six-sided die.
    pub fn new(board_size: usize) -> Self {
        Self {
            players: Vec::new(),
            board: Board::new(board_size),
            cards: CardDeck::new(),
            dice_sides: 6,
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }

    /// Add a player.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.players.push(PlayerConfig::new(name, color));
        self
    }

    /// Place a special cell.
    #[must_use]
    pub fn with_special(mut self, position: usize, special: Special) -> Self {
        self.board = self.board.with_special(position, special);
        self
    }

    /// Append a card to the deck.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards = self.cards.with_card(card);
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_dice_sides(mut self, sides: u32) -> Self {
        self.dice_sides = sides;
        self
    }

    /// Set the chain depth limit.
    #[must_use]
    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check that this configuration can produce a well-formed game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.players.len()));
        }
        if self.board.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.dice_sides == 0 {
            return Err(ConfigError::NoDiceSides);
        }
        if self.max_chain_depth == 0 {
            return Err(ConfigError::ZeroChainDepth);
        }

        for position in self.board.special_positions() {
            if position >= self.board.size {
                return Err(ConfigError::SpecialOffBoard {
                    position,
                    size: self.board.size,
                });
            }
            if let Some(Special {
                effect: SpecialEffect::DrawCard { card },
                ..
            }) = self.board.special_at(position)
            {
                match card {
                    Some(card) if !self.cards.contains(*card) => {
                        return Err(ConfigError::UnknownCard {
                            position,
                            card: card.index(),
                            count: self.cards.len(),
                        });
                    }
                    None if self.cards.is_empty() => {
                        return Err(ConfigError::EmptyDeck { position });
                    }
                    _ => {}
                }
            }
        }

        if let Some(cycle) = self.board.find_move_cycle() {
            return Err(ConfigError::MoveCycle(cycle));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
