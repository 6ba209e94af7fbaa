//! Special cells.
//!
//! A special cell is a rule bound to one board position. It fires when a
//! player's move ends exactly on that position.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// The rule a special cell applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpecialEffect {
    /// Ladder or hole: move again by `value` cells.
    Move { value: i64 },
    /// Draw a card. `None` draws uniformly at random from the deck.
    #[serde(rename = "card")]
    DrawCard {
        #[serde(default, rename = "card_id")]
        card: Option<CardId>,
    },
    /// Finish line: the player landing here wins.
    Goal,
}

/// A special cell: its rule and the label shown when a player lands on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Special {
    pub text: String,
    pub effect: SpecialEffect,
}

impl Special {
    /// Create a special cell.
    pub fn new(text: impl Into<String>, effect: SpecialEffect) -> Self {
        Self {
            text: text.into(),
            effect,
        }
    }

    /// A ladder (positive) or hole (negative) of `value` cells.
    pub fn shift(text: impl Into<String>, value: i64) -> Self {
        Self::new(text, SpecialEffect::Move { value })
    }

    /// Draw a specific card.
    pub fn card(text: impl Into<String>, card: CardId) -> Self {
        Self::new(text, SpecialEffect::DrawCard { card: Some(card) })
    }

    /// Draw a random card.
    pub fn random_card(text: impl Into<String>) -> Self {
        Self::new(text, SpecialEffect::DrawCard { card: None })
    }

    /// The finish line.
    pub fn goal(text: impl Into<String>) -> Self {
        Self::new(text, SpecialEffect::Goal)
    }
}
