//! The boundary between the engine and whatever displays the game.
//!
//! The engine calls `log` for every event and `render` after every state
//! mutation, always before `take_turn` returns. It makes no assumption about
//! how either is presented.

use crate::core::{GameConfig, GameState};

use super::GameEvent;

/// Receives game events and render notifications.
pub trait GameObserver {
    /// Called for every event, in resolution order.
    fn log(&mut self, event: &GameEvent);

    /// Called after every mutation with the full current state.
    fn render(&mut self, _state: &GameState, _config: &GameConfig) {}
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn log(&mut self, event: &GameEvent) {
        (**self).log(event);
    }

    fn render(&mut self, state: &GameState, config: &GameConfig) {
        (**self).render(state, config);
    }
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn log(&mut self, event: &GameEvent) {
        (**self).log(event);
    }

    fn render(&mut self, state: &GameState, config: &GameConfig) {
        (**self).render(state, config);
    }
}

/// Discards everything. Used for batch simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn log(&mut self, _event: &GameEvent) {}
}

/// Forwards events to the `log` facade.
///
/// Wins and ignored turns go out at `info`, aborted chains at `warn`, the
/// rest at `debug`.
///
/// ```
/// use board_race::games::classic::ClassicGameBuilder;
/// use board_race::LogObserver;
///
/// let mut engine = ClassicGameBuilder::new().build_with_observer(1, LogObserver).unwrap();
/// engine.play_to_end(1_000).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn log(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Won { .. } | GameEvent::TurnIgnored => log::info!("{}", event),
            GameEvent::ChainAborted { .. } => log::warn!("{}", event),
            _ => log::debug!("{}", event),
        }
    }
}

/// Records every event and counts renders.
///
/// ```
/// use board_race::events::{EventLog, GameEvent, GameObserver};
///
/// let mut log = EventLog::new();
/// log.log(&GameEvent::TurnIgnored);
/// assert_eq!(log.messages(), vec!["Game ended.".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
    renders: usize,
    last_render: Option<Vec<usize>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Log lines, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Number of render notifications received.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Player positions at the most recent render.
    #[must_use]
    pub fn last_render(&self) -> Option<&[usize]> {
        self.last_render.as_deref()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
        self.renders = 0;
        self.last_render = None;
    }
}

impl GameObserver for EventLog {
    fn log(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn render(&mut self, state: &GameState, _config: &GameConfig) {
        self.renders += 1;
        self.last_render = Some(state.positions());
    }
}
