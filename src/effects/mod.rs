//! Effect chains.
//!
//! - `ChainStep`: one link of a chain (move, cell check, card draw, swap)
//! - `ChainResolver`: runs a chain to completion under a depth limit
//!
//! Resolution is an explicit loop over a small work stack, so a badly
//! configured board fails with an error instead of overflowing the call stack.

mod effect;
mod resolver;

pub use effect::ChainStep;
pub use resolver::{ChainReport, ChainResolver, ResolverContext};
