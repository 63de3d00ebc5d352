//! Fighters: the character model and the six classes.
//!
//! - `Character`: vitals, hand, effect layers, combat primitives, snapshot
//! - `FighterClass`: closed class tag (Warrior, Mage, Archer, Paladin,
//!   Necromancer, Sorcerer)
//! - `CombatantBehavior`: the two signature actions plus display metadata,
//!   implemented once per class

mod archer;
pub mod character;
pub mod class;
mod mage;
mod necromancer;
mod paladin;
mod sorcerer;
mod warrior;

pub use character::{
    Character, CharacterSnapshot, Hand, TurnStart, INVENTORY_CAPACITY, MANA_REGEN, THORN_DAMAGE,
};
pub use class::{AttackResult, ClassProfile, CombatantBehavior, FighterClass};
