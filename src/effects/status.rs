//! Scalar status counters and boolean status flags.

use serde::{Deserialize, Serialize};

/// "Turns remaining" counters, decremented at the holder's turn start with a
/// floor of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounters {
    /// Class attacks against the holder are ignored.
    pub base_attack_immunity: u32,
    /// Holder cannot play cards.
    pub card_block: u32,
    /// All incoming damage is absorbed.
    pub invulnerability: u32,
    /// Holder cannot use class attacks.
    pub attack_block: u32,
}

impl StatusCounters {
    /// Count every active status down by one turn.
    pub fn tick(&mut self) {
        self.base_attack_immunity = self.base_attack_immunity.saturating_sub(1);
        self.card_block = self.card_block.saturating_sub(1);
        self.invulnerability = self.invulnerability.saturating_sub(1);
        self.attack_block = self.attack_block.saturating_sub(1);
    }
}

/// Boolean statuses, each cleared by its own trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    /// Next turn start is lost; cleared when it fires.
    pub stunned: bool,
    /// Next incoming class attack is dodged; cleared at every turn start.
    pub guaranteed_dodge: bool,
    /// Holder's next class attack fails; consumed by that attack.
    pub next_attack_fails: bool,
    /// Revive once at 20% health.
    pub holy_relic: bool,
    /// Attackers take 5 damage per hit.
    pub thorns: bool,
    /// Holder takes 5 damage for every hit it lands.
    pub crowned: bool,
    /// Already halved by the Book of Forbidden Spells this battle.
    pub tome_marked: bool,
}
