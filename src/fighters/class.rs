//! Fighter classes and the behaviour each one plugs into a [`Character`].
//!
//! ## Dispatch
//!
//! `FighterClass` is a closed tag stored on the character. Its
//! [`behavior`](FighterClass::behavior) returns a stateless
//! `&'static dyn CombatantBehavior` that implements the two signature
//! actions; any per-class state (the Warrior's exhaustion) lives on the
//! character so snapshot and reset cover it.

use serde::{Deserialize, Serialize};

use super::character::Character;
use super::{archer, mage, necromancer, paladin, sorcerer, warrior};
use crate::core::{GameRng, Result};

/// Outcome of a class action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    /// Health actually removed from the target.
    pub damage: u32,
    pub message: String,
    pub critical: bool,
    /// The action resolved but had no effect (cooldown, dodge, immunity).
    pub blocked: bool,
}

impl AttackResult {
    #[must_use]
    pub fn hit(damage: u32, message: impl Into<String>) -> Self {
        Self {
            damage,
            message: message.into(),
            critical: false,
            blocked: false,
        }
    }

    /// An action that deals no damage (buffs, meditation).
    #[must_use]
    pub fn utility(message: impl Into<String>) -> Self {
        Self::hit(0, message)
    }

    #[must_use]
    pub fn blocked(message: impl Into<String>) -> Self {
        Self {
            damage: 0,
            message: message.into(),
            critical: false,
            blocked: true,
        }
    }

    #[must_use]
    pub fn with_critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }
}

/// Static per-class data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassProfile {
    pub name: &'static str,
    pub max_health: u32,
    pub max_mana: u32,
    pub attack: u32,
    pub defense: u32,
    pub primary_name: &'static str,
    pub primary_description: &'static str,
    pub secondary_name: &'static str,
    pub secondary_description: &'static str,
    /// Mana cost of the secondary action (0 if free).
    pub secondary_cost: u32,
}

/// The pluggable part of a fighter.
pub trait CombatantBehavior: Send + Sync {
    fn profile(&self) -> &'static ClassProfile;

    /// First signature action.
    fn primary(
        &self,
        actor: &mut Character,
        target: &mut Character,
        rng: &mut GameRng,
    ) -> Result<AttackResult>;

    /// Second signature action.
    fn secondary(
        &self,
        actor: &mut Character,
        target: &mut Character,
        rng: &mut GameRng,
    ) -> Result<AttackResult>;

    /// Runs at the end of every `start_turn`, including stunned ones.
    fn on_turn_start(&self, _actor: &mut Character) {}
}

/// Class tag carried by every character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterClass {
    Warrior,
    Mage,
    Archer,
    Paladin,
    Necromancer,
    Sorcerer,
}

impl FighterClass {
    pub const ALL: [FighterClass; 6] = [
        FighterClass::Warrior,
        FighterClass::Mage,
        FighterClass::Archer,
        FighterClass::Paladin,
        FighterClass::Necromancer,
        FighterClass::Sorcerer,
    ];

    #[must_use]
    pub fn behavior(self) -> &'static dyn CombatantBehavior {
        match self {
            FighterClass::Warrior => &warrior::Warrior,
            FighterClass::Mage => &mage::Mage,
            FighterClass::Archer => &archer::Archer,
            FighterClass::Paladin => &paladin::Paladin,
            FighterClass::Necromancer => &necromancer::Necromancer,
            FighterClass::Sorcerer => &sorcerer::Sorcerer,
        }
    }

    #[must_use]
    pub fn profile(self) -> &'static ClassProfile {
        self.behavior().profile()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

impl std::fmt::Display for FighterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
