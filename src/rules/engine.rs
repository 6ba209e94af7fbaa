//! The turn engine.
//!
//! `TurnEngine` owns a game's configuration, state, RNG and observer, and is
//! the only thing that mutates the state. One call to `take_turn` moves one
//! player: roll, move, resolve the chain, pass the turn on.
//!
//! ## Turn order
//!
//! The turn pointer advances exactly once per `take_turn`, after the whole
//! chain has resolved and even when the chain ended the game. Chained moves
//! (ladders, holes, cards) never consume a turn.
//!
//! A chain that fails (for example by exceeding the depth limit) is rolled
//! back as a whole: the state is exactly what it was before the chain.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{ConfigError, EngineError, GameConfig, GameRng, GameState, PlayerId};
use crate::effects::{ChainReport, ChainResolver, ChainStep, ResolverContext};
use crate::events::{GameEvent, GameObserver, NullObserver};

/// What happened during one `take_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Player who rolled.
    pub player: PlayerId,
    /// Die result.
    pub roll: u32,
    /// Roller's position before the turn.
    pub from: usize,
    /// Roller's position after the whole chain.
    pub to: usize,
    /// Triggered chain steps, including the dice move.
    pub chain_depth: usize,
    /// Set if this turn ended the game.
    pub winner: Option<PlayerId>,
}

/// Result of requesting a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game had already ended; nothing changed.
    GameOver,
    /// A turn was played.
    Played(TurnReport),
}

impl TurnOutcome {
    /// The report, if a turn was played.
    #[must_use]
    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            TurnOutcome::Played(report) => Some(report),
            TurnOutcome::GameOver => None,
        }
    }
}

/// Drives a board-race game.
///
/// ## Example
///
/// ```
/// use board_race::board::Special;
/// use board_race::core::{GameConfig, PlayerId};
/// use board_race::rules::TurnEngine;
///
/// let config = GameConfig::new(100)
///     .with_player("Blue", "#0ea5e9")
///     .with_player("Red", "#ef4444")
///     .with_special(3, Special::shift("Ladder: +10", 10));
///
/// let mut engine = TurnEngine::new(config, 42).unwrap();
/// engine.take_turn_with_roll(3).unwrap();
///
/// assert_eq!(engine.state().player(PlayerId::new(0)).position, 13);
/// assert_eq!(engine.state().turn, PlayerId::new(1));
/// ```
pub struct TurnEngine<O: GameObserver = NullObserver> {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    observer: O,
}

impl TurnEngine<NullObserver> {
    /// Create an engine that reports to nobody.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_observer(config, seed, NullObserver)
    }
}

impl<O: GameObserver> TurnEngine<O> {
    /// Create an engine reporting to `observer`.
    ///
    /// Validates the configuration, then emits `Ready` and an initial render.
    pub fn with_observer(config: GameConfig, seed: u64, observer: O) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);

        let mut engine = Self {
            config,
            state,
            rng: GameRng::new(seed),
            observer,
        };

        let players = engine.state.player_count();
        log::debug!("new game: {} players, {} cells, seed {}", players, engine.config.board.size, seed);
        engine.observer.log(&GameEvent::Ready { players });
        engine.render_now();

        Ok(engine)
    }

    /// Assemble an engine from already-validated parts.
    pub(crate) fn from_parts(config: GameConfig, state: GameState, rng: GameRng, observer: O) -> Self {
        Self { config, state, rng, observer }
    }

    // === Accessors ===

    /// The immutable configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the engine and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    pub(crate) fn rng(&self) -> &GameRng {
        &self.rng
    }

    pub(crate) fn render_now(&mut self) {
        self.observer.render(&self.state, &self.config);
    }

    /// Whether a player has reached the goal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.ended
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    // === Turns ===

    /// Handle a user's roll request. Same as `take_turn`.
    pub fn request_turn(&mut self) -> Result<TurnOutcome, EngineError> {
        self.take_turn()
    }

    /// Roll the die for the current player and play their turn.
    ///
    /// After the game has ended this logs a notice and changes nothing.
    /// If the chain fails, positions, turn pointer and card draws are rolled
    /// back; only the die roll itself stays consumed.
    pub fn take_turn(&mut self) -> Result<TurnOutcome, EngineError> {
        if self.state.ended {
            return Ok(self.ignore_turn());
        }
        let roll = self.rng.roll(self.config.dice_sides);
        self.play(roll)
    }

    /// Play the current player's turn with a given roll.
    ///
    /// The roll must be in `1..=dice_sides`; otherwise nothing changes.
    pub fn take_turn_with_roll(&mut self, roll: u32) -> Result<TurnOutcome, EngineError> {
        if self.state.ended {
            return Ok(self.ignore_turn());
        }
        if roll == 0 || roll > self.config.dice_sides {
            return Err(EngineError::InvalidRoll {
                roll,
                sides: self.config.dice_sides,
            });
        }
        self.play(roll)
    }

    /// Play turns until someone wins or `max_turns` turns have been taken.
    ///
    /// Returns the winner, if any.
    pub fn play_to_end(&mut self, max_turns: u32) -> Result<Option<PlayerId>, EngineError> {
        let mut taken = 0;
        while !self.state.ended && taken < max_turns {
            self.take_turn()?;
            taken += 1;
        }
        Ok(self.state.winner)
    }

    fn ignore_turn(&mut self) -> TurnOutcome {
        log::debug!("turn requested after the game ended");
        self.observer.log(&GameEvent::TurnIgnored);
        TurnOutcome::GameOver
    }

    fn play(&mut self, roll: u32) -> Result<TurnOutcome, EngineError> {
        let player = self.state.turn;
        let from = self.state.player(player).position;

        let name = self.state.player(player).name.clone();
        self.observer.log(&GameEvent::Rolled { player, name, roll });

        let chain = self.apply_move(player, i64::from(roll))?;

        self.state.advance_turn();
        self.render_now();

        Ok(TurnOutcome::Played(TurnReport {
            player,
            roll,
            from,
            to: self.state.player(player).position,
            chain_depth: chain.depth,
            winner: if chain.finished { self.state.winner } else { None },
        }))
    }

    // === Chain entry points ===

    /// Move `player` by `steps` cells and resolve whatever the landing cell triggers.
    ///
    /// Does not touch the turn pointer. No-op once the game has ended.
    pub fn apply_move(&mut self, player: PlayerId, steps: i64) -> Result<ChainReport, EngineError> {
        self.run_chain(ChainStep::Advance { player, steps })
    }

    /// Apply the special cell under `player`, if any.
    pub fn resolve_cell(&mut self, player: PlayerId) -> Result<ChainReport, EngineError> {
        self.run_chain(ChainStep::ResolveCell { player })
    }

    /// Draw a card for `player` and apply it. `None` draws at random.
    pub fn resolve_card(&mut self, player: PlayerId, card: Option<CardId>) -> Result<ChainReport, EngineError> {
        self.run_chain(ChainStep::DrawCard { player, card })
    }

    /// Exchange the positions of two players. Neither cell is re-checked.
    pub fn swap(&mut self, a: PlayerId, b: PlayerId) -> Result<ChainReport, EngineError> {
        self.run_chain(ChainStep::Swap { player: a, other: b })
    }

    fn run_chain(&mut self, first: ChainStep) -> Result<ChainReport, EngineError> {
        let count = self.state.player_count();
        let other = match first {
            ChainStep::Swap { other, .. } => other,
            _ => first.player(),
        };
        for player in [first.player(), other] {
            if player.index() >= count {
                return Err(EngineError::UnknownPlayer { player, count });
            }
        }

        let saved_state = self.state.clone();
        let saved_rng = self.rng.clone();

        let mut ctx = ResolverContext {
            config: &self.config,
            state: &mut self.state,
            rng: &mut self.rng,
            observer: &mut self.observer,
        };
        let result = ChainResolver::resolve(&mut ctx, first);

        if let Err(e) = &result {
            log::warn!("{}; rolling back to the state before the chain", e);
            self.state = saved_state;
            self.rng = saved_rng;
            self.render_now();
        }
        result
    }
}
