//! Duration-counted effect layers.
//!
//! A fighter carries three independent ordered layers:
//! - [`DamageModifier`]: outgoing damage multiplier
//! - [`Shield`]: incoming damage reduction
//! - [`PersistentEffect`]: re-applied at each of the holder's turn starts
//!
//! All three count down at the holder's turn start and drop out when they
//! reach zero. Decay is a two-phase pass: survivors are collected into a new
//! list which then replaces the old one.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::fighters::Character;

/// A layer entry with a remaining-duration counter.
pub trait Timed: Clone {
    /// Remaining duration.
    fn remaining(&self) -> u32;

    /// Copy of this entry with a different remaining duration.
    fn with_remaining(&self, remaining: u32) -> Self;
}

/// Count every entry down by one, keeping only those still active.
pub(crate) fn decay_layer<T: Timed>(layer: &Vector<T>) -> Vector<T> {
    layer
        .iter()
        .filter_map(|entry| {
            let left = entry.remaining().saturating_sub(1);
            (left > 0).then(|| entry.with_remaining(left))
        })
        .collect()
}

/// Multiplies outgoing damage. Duration is counted in attacks but decays at
/// turn start whether or not an attack happened.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageModifier {
    pub multiplier: f64,
    pub remaining: u32,
}

impl DamageModifier {
    #[must_use]
    pub fn new(multiplier: f64, remaining: u32) -> Self {
        Self {
            multiplier,
            remaining,
        }
    }

    /// `floor(damage * multiplier)`
    #[must_use]
    pub fn apply(&self, damage: u32) -> u32 {
        scale(damage, self.multiplier)
    }
}

impl Timed for DamageModifier {
    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn with_remaining(&self, remaining: u32) -> Self {
        Self { remaining, ..*self }
    }
}

/// Reduces incoming damage by a fraction. Duration is counted in hits but
/// decays at turn start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    pub reduction: f64,
    pub remaining: u32,
}

impl Shield {
    #[must_use]
    pub fn new(reduction: f64, remaining: u32) -> Self {
        Self {
            reduction,
            remaining,
        }
    }

    /// `floor(damage * (1 - reduction))`
    #[must_use]
    pub fn apply(&self, damage: u32) -> u32 {
        scale(damage, 1.0 - self.reduction)
    }
}

impl Timed for Shield {
    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn with_remaining(&self, remaining: u32) -> Self {
        Self { remaining, ..*self }
    }
}

fn scale(damage: u32, factor: f64) -> u32 {
    let scaled = (f64::from(damage) * factor).floor();
    if scaled <= 0.0 {
        0
    } else {
        scaled as u32
    }
}

/// What a persistent effect does when it fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersistentKind {
    /// The holder loses `damage` health, ignoring shields.
    Debilitation { damage: u32 },

    /// A summoned minion owned by the holder strikes the rival for `damage`,
    /// ignoring shields. `target` is the rival's name for messages.
    Minion { damage: u32, target: String },
}

/// An effect re-applied at each of the holder's turn starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentEffect {
    pub kind: PersistentKind,
    pub remaining: u32,
}

impl PersistentEffect {
    /// Damage-over-time on the holder.
    #[must_use]
    pub fn debilitation(turns: u32, damage: u32) -> Self {
        Self {
            kind: PersistentKind::Debilitation { damage },
            remaining: turns,
        }
    }

    /// Lich minion attacking `target` every turn.
    #[must_use]
    pub fn lich_minion(turns: u32, target: impl Into<String>) -> Self {
        Self {
            kind: PersistentKind::Minion {
                damage: 10,
                target: target.into(),
            },
            remaining: turns,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.kind {
            PersistentKind::Debilitation { .. } => "Debilitation",
            PersistentKind::Minion { .. } => "Lich Minion",
        }
    }

    /// Fire the effect for one turn start.
    pub(crate) fn apply(&self, holder: &mut Character, rival: &mut Character) -> String {
        match &self.kind {
            PersistentKind::Debilitation { damage } => {
                holder.receive_direct_damage(*damage);
                format!("{} took {} damage from Debilitation!", holder.name(), damage)
            }
            PersistentKind::Minion { damage, target } => {
                rival.receive_direct_damage(*damage);
                format!("The Lich Minion attacked {} for {} damage!", target, damage)
            }
        }
    }
}

impl Timed for PersistentEffect {
    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn with_remaining(&self, remaining: u32) -> Self {
        Self {
            kind: self.kind.clone(),
            remaining,
        }
    }
}
