//! Game events.
//!
//! Every notable thing the engine does is reported as a `GameEvent`, in the
//! order it was resolved. `Display` renders the line shown in a game log.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The engine was created and the game can start.
    Ready { players: usize },

    /// A player rolled the die at the start of their turn.
    Rolled {
        player: PlayerId,
        name: String,
        roll: u32,
    },

    /// A player's token moved (dice, ladder, hole or card).
    Moved {
        player: PlayerId,
        name: String,
        from: usize,
        to: usize,
    },

    /// A player stopped on a special cell.
    Landed {
        player: PlayerId,
        name: String,
        position: usize,
        label: String,
    },

    /// A player drew a card.
    CardDrawn {
        player: PlayerId,
        name: String,
        card: CardId,
        text: String,
    },

    /// Two players exchanged positions.
    Swapped {
        player: PlayerId,
        name: String,
        other: PlayerId,
        other_name: String,
    },

    /// A player reached the goal.
    Won { player: PlayerId, name: String },

    /// A turn was requested after the game ended.
    TurnIgnored,

    /// A chain of effects hit the depth limit and the turn was abandoned.
    ChainAborted {
        player: PlayerId,
        name: String,
        limit: usize,
    },
}

impl GameEvent {
    /// The player this event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::Rolled { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::Landed { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::Swapped { player, .. }
            | GameEvent::Won { player, .. }
            | GameEvent::ChainAborted { player, .. } => Some(*player),
            GameEvent::Ready { .. } | GameEvent::TurnIgnored => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Ready { players } => write!(f, "Game ready: {} players", players),
            GameEvent::Rolled { name, roll, .. } => write!(f, "{} rolled {}", name, roll),
            GameEvent::Moved { name, from, to, .. } => {
                write!(f, "{} moves from {} → {}", name, from, to)
            }
            GameEvent::Landed { name, label, .. } => write!(f, "{} landed on {}", name, label),
            GameEvent::CardDrawn { name, text, .. } => write!(f, "{} drew: {}", name, text),
            GameEvent::Swapped { name, other_name, .. } => {
                write!(f, "{} swapped with {}", name, other_name)
            }
            GameEvent::Won { name, .. } => write!(f, "{} wins the game!", name),
            GameEvent::TurnIgnored => write!(f, "Game ended."),
            GameEvent::ChainAborted { name, limit, .. } => {
                write!(f, "{}'s turn stopped after {} chained effects", name, limit)
            }
        }
    }
}
