//! # card-mayhem
//!
//! Deterministic rules engine for a two-fighter, turn-based card and ability
//! battle game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: one seeded [`GameRng`] per arena drives every
//!    random decision. Same seed and same calls give the same battle.
//!
//! 2. **Run to completion**: every arena operation fully resolves before
//!    returning. There is no async, no timer and no partial state.
//!
//! 3. **Errors stay inside turns**: fighter-level failures become log
//!    entries and unresolved results; only roster lookups return `Err`.
//!
//! ## Architecture
//!
//! - **Closed catalogs**: cards and classes are enums. Class behaviour is a
//!   `CombatantBehavior` trait object chosen by the class tag.
//!
//! - **Explicit session effects**: cards that need the whole battle (coin
//!   flip, rewind, transmutation) return a `SessionEffect` for the arena.
//!
//! - **Persistent Data Structures**: effect layers live in `im::Vector`, so
//!   turn snapshots for rewind are cheap clones.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `effects`: damage modifiers, shields, persistent effects, statuses
//! - `cards`: rarity, catalog, resolution, factory
//! - `fighters`: the character model and the six classes
//! - `arena`: battle state machine, history, log, roster
//! - `ai`: policies for automated fighters

pub mod ai;
pub mod arena;
pub mod cards;
pub mod core;
pub mod effects;
pub mod fighters;

// Re-export commonly used types
pub use crate::core::{BattleConfig, BattleError, GameRng, GameRngState, Pair, Result, Side};

pub use crate::effects::{
    DamageModifier, PersistentEffect, PersistentKind, Shield, StatusCounters, StatusFlags,
};

pub use crate::cards::{Card, CardFactory, CardOutcome, Rarity, SessionEffect};

pub use crate::fighters::{
    AttackResult, Character, CharacterSnapshot, ClassProfile, CombatantBehavior, FighterClass,
    TurnStart, INVENTORY_CAPACITY,
};

pub use crate::arena::{
    ActionResult, Arena, AttackSlot, BattleLogEntry, BattlePhase, EffectCategory, HistoryRing,
    TurnSnapshot,
};

pub use crate::ai::{ActionPlan, BattleAction, BattlePolicy, CpuOpponent, RandomAttacker};
