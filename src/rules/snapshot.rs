//! Saving and resuming games.
//!
//! A `Snapshot` is the game state plus the RNG position. Together with the
//! configuration it was taken under, it resumes a game that rolls the exact
//! same dice from that point on.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameConfig, GameRng, GameRngState, GameState};
use crate::events::GameObserver;

use super::TurnEngine;

/// Serializable point-in-time copy of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub rng: GameRngState,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check that this snapshot could have come from `config`.
    fn check(&self, config: &GameConfig) -> Result<(), EngineError> {
        let count = self.state.player_count();
        if count != config.player_count() {
            return Err(EngineError::SnapshotMismatch(format!(
                "{} players in snapshot, {} configured",
                count,
                config.player_count()
            )));
        }
        if self.state.turn.index() >= count {
            return Err(EngineError::SnapshotMismatch(format!(
                "turn pointer {} out of range",
                self.state.turn
            )));
        }
        if let Some(p) = self.state.players().find(|p| p.position >= config.board.size) {
            return Err(EngineError::SnapshotMismatch(format!(
                "{} is on cell {} of a {}-cell board",
                p.name, p.position, config.board.size
            )));
        }
        Ok(())
    }
}

impl<O: GameObserver> TurnEngine<O> {
    /// Capture the current game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state().clone(),
            rng: self.rng().state(),
        }
    }

    /// Resume a game from a snapshot taken under `config`.
    ///
    /// Emits a render of the restored state but no `Ready` event.
    pub fn restore(config: GameConfig, snapshot: Snapshot, observer: O) -> Result<Self, EngineError> {
        config.validate()?;
        snapshot.check(&config)?;

        let mut engine = Self::from_parts(config, snapshot.state, GameRng::from_state(&snapshot.rng), observer);
        log::debug!("restored game after {} turns", engine.state().turns_taken);
        engine.render_now();
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Special;
    use crate::core::PlayerId;
    use crate::events::{EventLog, NullObserver};

    fn config() -> GameConfig {
        GameConfig::new(50)
            .with_player("Blue", "#0ea5e9")
            .with_player("Red", "#ef4444")
            .with_special(7, Special::shift("Ladder", 5))
            .with_special(49, Special::goal("Finish!"))
    }

    #[test]
    fn test_resume_rolls_same_dice() {
        let mut original = TurnEngine::new(config(), 9).unwrap();
        for _ in 0..3 {
            original.take_turn().unwrap();
        }

        let bytes = original.snapshot().to_bytes().unwrap();
        let snapshot = Snapshot::from_bytes(&bytes).unwrap();
        let mut resumed = TurnEngine::restore(config(), snapshot, NullObserver).unwrap();

        assert_eq!(resumed.state(), original.state());
        for _ in 0..5 {
            assert_eq!(resumed.take_turn().unwrap(), original.take_turn().unwrap());
        }
    }

    #[test]
    fn test_restore_renders() {
        let engine = TurnEngine::new(config(), 1).unwrap();
        let restored = TurnEngine::restore(config(), engine.snapshot(), EventLog::new()).unwrap();

        assert!(restored.observer().is_empty());
        assert_eq!(restored.observer().render_count(), 1);
    }

    #[test]
    fn test_player_count_mismatch() {
        let engine = TurnEngine::new(config(), 1).unwrap();
        let three = config().with_player("Green", "#22c55e");

        let result = TurnEngine::restore(three, engine.snapshot(), NullObserver);
        assert!(matches!(result, Err(EngineError::SnapshotMismatch(_))));
    }

    #[test]
    fn test_position_off_board() {
        let mut engine = TurnEngine::new(config(), 1).unwrap();
        engine.apply_move(PlayerId::new(0), 30).unwrap();

        let small = GameConfig::new(20)
            .with_player("Blue", "#0ea5e9")
            .with_player("Red", "#ef4444");
        let result = TurnEngine::restore(small, engine.snapshot(), NullObserver);
        assert!(matches!(result, Err(EngineError::SnapshotMismatch(_))));
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(matches!(Snapshot::from_bytes(&[1, 2, 3]), Err(EngineError::Snapshot(_))));
    }
}
