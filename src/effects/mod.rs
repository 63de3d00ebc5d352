//! Temporary combat effects carried by a fighter.
//!
//! - `DamageModifier`: multiplies outgoing damage
//! - `Shield`: reduces incoming damage
//! - `PersistentEffect`: fires at every turn start of its holder
//! - `StatusCounters` / `StatusFlags`: scalar statuses (blocks, immunities,
//!   stun, dodge, relic, thorns)
//!
//! ## Turn-start decay
//!
//! Every layer and counter here is owned by one fighter and counts down at
//! that fighter's turn start. Layers are stored in `im::Vector`, so a
//! fighter snapshot for time rewind is an O(1) clone.

mod layers;
mod status;

pub use layers::{DamageModifier, PersistentEffect, PersistentKind, Shield, Timed};
pub use status::{StatusCounters, StatusFlags};

pub(crate) use layers::decay_layer;
