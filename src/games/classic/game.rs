//! The stock board.

use crate::board::{Board, Special};
use crate::cards::{Card, CardDeck};
use crate::core::{ConfigError, GameConfig, PlayerConfig, DEFAULT_MAX_CHAIN_DEPTH};
use crate::events::{GameObserver, NullObserver};
use crate::rules::TurnEngine;

/// Cells on the classic track.
pub const BOARD_SIZE: usize = 100;

/// Faces on the classic die.
pub const DICE_SIDES: u32 = 6;

/// The classic board: one ladder, one hole, a card cell, a boost and the finish.
#[must_use]
pub fn board() -> Board {
    Board::new(BOARD_SIZE)
        .with_special(3, Special::shift("Ladder: +10", 10))
        .with_special(16, Special::shift("Hole: -12", -12))
        .with_special(25, Special::random_card("Draw a card"))
        .with_special(72, Special::shift("Boost +10", 10))
        .with_special(99, Special::goal("Finish!"))
}

/// The classic card deck.
#[must_use]
pub fn cards() -> CardDeck {
    [
        Card::advance("Advance 5", 5),
        Card::advance("Go back 3", -3),
        Card::swap("Swap with next player"),
    ]
    .into_iter()
    .collect()
}

/// Builder for the classic game.
///
/// Defaults to Blue and Red on the classic board with a six-sided die.
pub struct ClassicGameBuilder {
    players: Vec<PlayerConfig>,
    dice_sides: u32,
    max_chain_depth: usize,
}

impl Default for ClassicGameBuilder {
    fn default() -> Self {
        Self {
            players: vec![
                PlayerConfig::new("Blue", "#0ea5e9"),
                PlayerConfig::new("Red", "#ef4444"),
            ],
            dice_sides: DICE_SIDES,
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }
}

impl ClassicGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default racers.
    pub fn players(mut self, players: impl IntoIterator<Item = PlayerConfig>) -> Self {
        self.players = players.into_iter().collect();
        self
    }

    pub fn dice_sides(mut self, sides: u32) -> Self {
        self.dice_sides = sides;
        self
    }

    pub fn max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    /// The configuration this builder describes.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            players: self.players.clone(),
            board: board(),
            cards: cards(),
            dice_sides: self.dice_sides,
            max_chain_depth: self.max_chain_depth,
        }
    }

    /// Build an engine with no observer.
    pub fn build(self, seed: u64) -> Result<TurnEngine<NullObserver>, ConfigError> {
        TurnEngine::new(self.config(), seed)
    }

    /// Build an engine reporting to `observer`.
    pub fn build_with_observer<O: GameObserver>(
        self,
        seed: u64,
        observer: O,
    ) -> Result<TurnEngine<O>, ConfigError> {
        TurnEngine::with_observer(self.config(), seed, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SpecialEffect;
    use crate::core::PlayerId;

    #[test]
    fn test_classic_config_is_valid() {
        let config = ClassicGameBuilder::new().config();

        assert!(config.validate().is_ok());
        assert_eq!(config.player_count(), 2);
        assert_eq!(config.board.size, 100);
        assert_eq!(config.cards.len(), 3);
        assert_eq!(config.dice_sides, 6);
        assert_eq!(config.board.special_positions(), vec![3, 16, 25, 72, 99]);
    }

    #[test]
    fn test_card_cell_draws_at_random() {
        let board = board();
        assert_eq!(
            board.special_at(25).unwrap().effect,
            SpecialEffect::DrawCard { card: None }
        );
    }

    #[test]
    fn test_custom_players() {
        let engine = ClassicGameBuilder::new()
            .players([
                PlayerConfig::new("Blue", "#0ea5e9"),
                PlayerConfig::new("Red", "#ef4444"),
                PlayerConfig::new("Green", "#22c55e"),
            ])
            .build(7)
            .unwrap();

        assert_eq!(engine.state().player_count(), 3);
        assert_eq!(engine.state().player(PlayerId::new(2)).name, "Green");
    }

    #[test]
    fn test_no_players_rejected() {
        let result = ClassicGameBuilder::new().players(Vec::new()).build(7);
        assert!(matches!(result, Err(ConfigError::NoPlayers)));
    }

    #[test]
    fn test_classic_game_finishes() {
        for seed in 0..20 {
            let mut engine = ClassicGameBuilder::new().build(seed).unwrap();
            let winner = engine.play_to_end(10_000).unwrap();
            assert!(winner.is_some(), "seed {} did not finish", seed);
        }
    }
}
