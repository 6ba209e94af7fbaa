//! Card system: definitions and the ordered deck.
//!
//! ## Key Types
//!
//! - `CardId`: Position of a card in the deck
//! - `CardAction`: What a drawn card does (move or swap)
//! - `Card`: Display text plus action
//! - `CardDeck`: Ordered, immutable card sequence

pub mod definition;
pub mod deck;

pub use definition::{Card, CardAction, CardId};
pub use deck::CardDeck;
