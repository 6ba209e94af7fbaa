//! The board: a linear track of cells with special cells attached.
//!
//! - `Board`: track size, special-cell lookup, clamped movement
//! - `Special` / `SpecialEffect`: what happens when a player lands on a cell

mod special;
mod track;

pub use special::{Special, SpecialEffect};
pub use track::Board;
