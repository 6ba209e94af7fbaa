//! Chain steps.
//!
//! A turn resolves as a chain: the dice move, then whatever the landing cell
//! triggers, then whatever that triggers, and so on. Each link is a
//! `ChainStep`; the resolver works through them one at a time.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;

/// One unit of work in an effect chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainStep {
    /// Move a player by `steps` cells (clamped to the board).
    Advance { player: PlayerId, steps: i64 },

    /// Apply the special cell under a player, if there is one.
    ResolveCell { player: PlayerId },

    /// Draw a card for a player. `None` draws at random.
    DrawCard { player: PlayerId, card: Option<CardId> },

    /// Exchange two players' positions. Never re-checks either cell.
    Swap { player: PlayerId, other: PlayerId },
}

impl ChainStep {
    /// The player driving this step.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            ChainStep::Advance { player, .. }
            | ChainStep::ResolveCell { player }
            | ChainStep::DrawCard { player, .. }
            | ChainStep::Swap { player, .. } => *player,
        }
    }

    /// Whether this step was triggered by a cell or card rather than
    /// following mechanically from the previous one.
    ///
    /// Only triggered steps count towards the chain depth limit.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        !matches!(self, ChainStep::ResolveCell { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player() {
        let p = PlayerId::new(1);
        assert_eq!(ChainStep::Advance { player: p, steps: 3 }.player(), p);
        assert_eq!(ChainStep::ResolveCell { player: p }.player(), p);
        assert_eq!(ChainStep::DrawCard { player: p, card: None }.player(), p);
        assert_eq!(ChainStep::Swap { player: p, other: PlayerId::new(0) }.player(), p);
    }

    #[test]
    fn test_is_triggered() {
        let p = PlayerId::new(0);
        assert!(ChainStep::Advance { player: p, steps: 3 }.is_triggered());
        assert!(ChainStep::DrawCard { player: p, card: None }.is_triggered());
        assert!(!ChainStep::ResolveCell { player: p }.is_triggered());
    }
}
