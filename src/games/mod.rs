//! Ready-made game configurations.

pub mod classic;
