//! The ordered card deck.
//!
//! Cards are addressed by their position in the configured sequence.
//! Drawing never removes a card: every draw sees the whole deck.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};
use crate::core::GameRng;

/// Ordered, immutable sequence of cards.
///
/// ## Example
///
/// ```
/// use board_race::cards::{Card, CardDeck, CardId};
///
/// let deck = CardDeck::new()
///     .with_card(Card::advance("Advance 5", 5))
///     .with_card(Card::swap("Swap with next player"));
///
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.get(CardId::new(1)).unwrap().text, "Swap with next player");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl CardDeck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card; its id is its position.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Check if a card id exists in this deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    /// Pick a card uniformly at random.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw_random(&self, rng: &mut GameRng) -> Option<CardId> {
        rng.pick_index(self.cards.len()).map(|i| CardId::new(i as u32))
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over (CardId, &Card) pairs in deck order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CardId::new(i as u32), c))
    }
}

impl FromIterator<Card> for CardDeck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardAction;

    fn sample_deck() -> CardDeck {
        [
            Card::advance("Advance 5", 5),
            Card::advance("Go back 3", -3),
            Card::swap("Swap with next player"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_get_and_contains() {
        let deck = sample_deck();

        assert_eq!(deck.len(), 3);
        assert!(deck.contains(CardId::new(2)));
        assert!(!deck.contains(CardId::new(3)));
        assert_eq!(deck.get(CardId::new(1)).unwrap().action, CardAction::Move { value: -3 });
        assert!(deck.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_draw_random_in_range() {
        let deck = sample_deck();
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let id = deck.draw_random(&mut rng).unwrap();
            assert!(deck.contains(id));
        }
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let deck = CardDeck::new();
        let mut rng = GameRng::new(42);

        assert!(deck.is_empty());
        assert_eq!(deck.draw_random(&mut rng), None);
    }

    #[test]
    fn test_iteration_order() {
        let deck = sample_deck();
        let texts: Vec<_> = deck.iter().map(|(_, c)| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Advance 5", "Go back 3", "Swap with next player"]);
    }

    #[test]
    fn test_serializes_as_list() {
        let deck = sample_deck();
        let json = serde_json::to_string(&deck).unwrap();
        assert!(json.starts_with('['));

        let back: CardDeck = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);
    }
}
