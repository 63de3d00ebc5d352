//! Error types raised by the battle engine.

use thiserror::Error;

/// Errors raised by character primitives and arena lookups.
///
/// Arena turn operations catch these and turn them into log entries; only
/// fighter lookup lets [`BattleError::FighterNotFound`] escape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("{name} is dead and cannot perform this action!")]
    DeadActor { name: String },

    #[error("{name} does not have enough mana! Cost: {cost}, current mana: {current}")]
    InsufficientResource {
        name: String,
        cost: u32,
        current: u32,
    },

    #[error("{name}'s inventory is full! Maximum of {capacity} items.")]
    InventoryFull { name: String, capacity: usize },

    #[error("{0}")]
    InvalidAction(String),

    #[error("fighter \"{0}\" not found in the arena!")]
    FighterNotFound(String),
}

impl BattleError {
    pub(crate) fn dead(name: &str) -> Self {
        Self::DeadActor {
            name: name.to_string(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidAction(message.into())
    }
}

pub type Result<T> = std::result::Result<T, BattleError>;
