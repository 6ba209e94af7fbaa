//! Game events and the observer boundary.
//!
//! - `GameEvent`: typed record of a roll, move, landing, card draw, swap or win
//! - `GameObserver`: receives events (`log`) and state snapshots (`render`)
//! - `EventLog`, `LogObserver`, `NullObserver`: stock observers

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver, LogObserver, NullObserver};
