//! The classic two-player race.
//!
//! - 100 cells, six-sided die
//! - Ladder on 3 (+10), hole on 16 (-12), boost on 72 (+10)
//! - Card cell on 25 drawing from: Advance 5, Go back 3, Swap with next player
//! - Finish on 99
//!
//! Supports any number of players via `ClassicGameBuilder::players`.

mod game;

pub use game::{board, cards, ClassicGameBuilder, BOARD_SIZE, DICE_SIDES};
