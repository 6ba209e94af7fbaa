//! Card definitions - static card data.
//!
//! A card is a line of display text plus the action it performs when drawn.
//! Cards never change during a game; the deck order is fixed by configuration.

use serde::{Deserialize, Serialize};

/// Index of a card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the position in the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does to the player who drew it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardAction {
    /// Move the drawer by `value` cells (negative moves back).
    Move { value: i64 },
    /// Exchange positions with the player whose identity index follows the drawer's.
    #[serde(rename = "swap")]
    SwapWithNext,
}

/// Static card definition.
///
/// ```
/// use board_race::cards::{Card, CardAction};
///
/// let card = Card::advance("Advance 5", 5);
/// assert_eq!(card.action, CardAction::Move { value: 5 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Text shown when the card is drawn.
    pub text: String,
    pub action: CardAction,
}

impl Card {
    /// Create a card.
    pub fn new(text: impl Into<String>, action: CardAction) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }

    /// Create a movement card. Negative `value` moves back.
    pub fn advance(text: impl Into<String>, value: i64) -> Self {
        Self::new(text, CardAction::Move { value })
    }

    /// Create a swap-with-next-player card.
    pub fn swap(text: impl Into<String>) -> Self {
        Self::new(text, CardAction::SwapWithNext)
    }
}
