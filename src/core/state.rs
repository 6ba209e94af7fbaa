//! Game state.
//!
//! Holds everything that changes during a game: player positions, the
//! turn pointer, the terminal flag and the winner. The board and cards live
//! in `GameConfig` and never change.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{Player, PlayerId, PlayerMap};

/// Mutable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Racers in identity order.
    players: PlayerMap<Player>,

    /// Player to move next.
    pub turn: PlayerId,

    /// Completed turns (primary rolls), starting at 0.
    pub turns_taken: u32,

    /// Set once a player reaches the goal. No move is applied afterwards.
    pub ended: bool,

    /// Player who reached the goal.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Create the initial state: everyone on cell 0, player 0 to move.
    ///
    /// Panics if the configuration has no players; validate it first.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let players = PlayerMap::new(config.player_count(), |id| {
            let p = &config.players[id.index()];
            Player::new(id, p.name.clone(), p.color.clone())
        });

        Self {
            players,
            turn: PlayerId::new(0),
            turns_taken: 0,
            ended: false,
            winner: None,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Get a mutable player.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Iterate over players in identity order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Positions in identity order.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.players.values().map(|p| p.position).collect()
    }

    /// Move the turn pointer to the next seat, wrapping around.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.next(self.player_count());
        self.turns_taken += 1;
    }

    /// Exchange two players' positions.
    pub fn swap_positions(&mut self, a: PlayerId, b: PlayerId) {
        let pos_a = self.players[a].position;
        let pos_b = self.players[b].position;
        self.players[a].position = pos_b;
        self.players[b].position = pos_a;
    }

    /// Mark the game as won.
    pub fn finish(&mut self, winner: PlayerId) {
        self.ended = true;
        self.winner = Some(winner);
    }
}
