//! Core engine types: sides, RNG, configuration, errors.
//!
//! Everything here is game-rule agnostic; fighters, cards and the arena
//! build on top of it.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::BattleConfig;
pub use error::{BattleError, Result};
pub use rng::{GameRng, GameRngState};
pub use side::{Pair, Side};
