//! The battle participant.
//!
//! A [`Character`] owns its vitals, hand and every effect layer, and is
//! only ever mutated through its own methods. Class-specific actions are
//! dispatched through [`FighterClass::behavior`].
//!
//! ## Damage pipeline
//!
//! ```text
//! deal_damage(target, base)
//!   base -> attacker's modifiers (floor each, in order)
//!        -> target's shields    (floor each, in order)
//!        -> target.absorb()     (invulnerability, clamp at 0, relic revive)
//!   then thorns on the target, or a crown on the attacker, hurt the
//!   attacker for 5
//! ```
//!
//! `receive_damage` is shields + absorb, `receive_direct_damage` is absorb
//! only. Shields are therefore applied exactly once on every path.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::class::{AttackResult, FighterClass};
use crate::cards::{Card, CardOutcome};
use crate::core::{BattleError, GameRng, Result};
use crate::effects::{
    decay_layer, DamageModifier, PersistentEffect, Shield, StatusCounters, StatusFlags,
};

/// Maximum number of cards in a hand.
pub const INVENTORY_CAPACITY: usize = 4;

/// Mana recovered at every turn start by fighters that use mana.
pub const MANA_REGEN: u32 = 40;

/// Damage taken by anyone landing a hit on a fighter with thorns, and by a
/// crowned fighter for every hit it lands.
pub const THORN_DAMAGE: u32 = 5;

/// A hand of cards, stored inline.
pub type Hand = SmallVec<[Card; INVENTORY_CAPACITY]>;

/// What `start_turn` produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnStart {
    /// The fighter was stunned and loses this turn.
    pub lost_turn: bool,
    pub messages: Vec<String>,
}

/// The subset of a character captured for time rewind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub health: u32,
    pub mana: u32,
    pub inventory: Hand,
    pub persistent_effects: Vector<PersistentEffect>,
    pub damage_modifiers: Vector<DamageModifier>,
    pub shields: Vector<Shield>,
}

/// A fighter: vitals, hand, effect layers and combat primitives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    class: FighterClass,
    health: u32,
    max_health: u32,
    mana: u32,
    max_mana: u32,
    attack: u32,
    defense: u32,
    inventory: Hand,
    persistent_effects: Vector<PersistentEffect>,
    damage_modifiers: Vector<DamageModifier>,
    shields: Vector<Shield>,
    status: StatusCounters,
    flags: StatusFlags,
    used_unique: FxHashSet<Card>,
    /// Secondary action used and not yet refreshed by a turn start.
    exhausted: bool,
}

impl Character {
    /// A fresh fighter of `class` at full health and mana with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, class: FighterClass) -> Self {
        let profile = class.profile();
        Self {
            name: name.into(),
            class,
            health: profile.max_health,
            max_health: profile.max_health.max(1),
            mana: profile.max_mana,
            max_mana: profile.max_mana,
            attack: profile.attack,
            defense: profile.defense,
            inventory: Hand::new(),
            persistent_effects: Vector::new(),
            damage_modifiers: Vector::new(),
            shields: Vector::new(),
            status: StatusCounters::default(),
            flags: StatusFlags::default(),
            used_unique: FxHashSet::default(),
            exhausted: false,
        }
    }

    #[must_use]
    pub fn warrior(name: impl Into<String>) -> Self {
        Self::new(name, FighterClass::Warrior)
    }

    #[must_use]
    pub fn mage(name: impl Into<String>) -> Self {
        Self::new(name, FighterClass::Mage)
    }

    #[must_use]
    pub fn archer(name: impl Into<String>) -> Self {
        Self::new(name, FighterClass::Archer)
    }

    #[must_use]
    pub fn paladin(name: impl Into<String>) -> Self {
        Self::new(name, FighterClass::Paladin)
    }

    #[must_use]
    pub fn necromancer(name: impl Into<String>) -> Self {
        Self::new(name, FighterClass::Necromancer)
    }

    #[must_use]
    pub fn sorcerer(name: impl Into<String>) -> Self {
        Self::new(name, FighterClass::Sorcerer)
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn class(&self) -> FighterClass {
        self.class
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    #[must_use]
    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    #[must_use]
    pub fn attack(&self) -> u32 {
        self.attack
    }

    /// Advisory only; no damage path reads it.
    #[must_use]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    #[must_use]
    pub fn inventory(&self) -> &[Card] {
        &self.inventory
    }

    #[must_use]
    pub fn persistent_effects(&self) -> &Vector<PersistentEffect> {
        &self.persistent_effects
    }

    #[must_use]
    pub fn damage_modifiers(&self) -> &Vector<DamageModifier> {
        &self.damage_modifiers
    }

    #[must_use]
    pub fn shields(&self) -> &Vector<Shield> {
        &self.shields
    }

    #[must_use]
    pub fn status(&self) -> &StatusCounters {
        &self.status
    }

    #[must_use]
    pub fn flags(&self) -> &StatusFlags {
        &self.flags
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.flags.stunned
    }

    #[must_use]
    pub fn can_use_cards(&self) -> bool {
        self.status.card_block == 0
    }

    #[must_use]
    pub fn is_invulnerable(&self) -> bool {
        self.status.invulnerability > 0
    }

    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.status.attack_block == 0
    }

    #[must_use]
    pub fn has_guaranteed_dodge(&self) -> bool {
        self.flags.guaranteed_dodge
    }

    #[must_use]
    pub fn next_attack_fails(&self) -> bool {
        self.flags.next_attack_fails
    }

    #[must_use]
    pub fn has_used_unique(&self, card: Card) -> bool {
        self.used_unique.contains(&card)
    }

    /// Whether the secondary action is on cooldown.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    // =========================================================================
    // Vitals and resource
    // =========================================================================

    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }

    pub fn set_mana(&mut self, mana: u32) {
        self.mana = mana.min(self.max_mana);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn recover_resource(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
    }

    /// Deduct `amount` if affordable. Returns false and changes nothing
    /// otherwise.
    pub fn spend_resource(&mut self, amount: u32) -> bool {
        if self.mana >= amount {
            self.mana -= amount;
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Damage
    // =========================================================================

    /// Hit `target` for `base` through the full pipeline. Returns the health
    /// removed from the target.
    pub fn deal_damage(&mut self, target: &mut Character, base: u32) -> u32 {
        let amount = self.modified(base);
        let dealt = target.receive_damage(amount);
        self.suffer_thorns(target);
        dealt
    }

    /// Like [`deal_damage`](Self::deal_damage) but the target's shields are
    /// ignored.
    pub fn deal_piercing_damage(&mut self, target: &mut Character, base: u32) -> u32 {
        let amount = self.modified(base);
        let dealt = target.receive_direct_damage(amount);
        self.suffer_thorns(target);
        dealt
    }

    /// Take damage reduced by this fighter's shields.
    pub fn receive_damage(&mut self, amount: u32) -> u32 {
        let shielded = self.shields.iter().fold(amount, |dmg, shield| shield.apply(dmg));
        self.absorb(shielded)
    }

    /// Take damage that ignores shields.
    pub fn receive_direct_damage(&mut self, amount: u32) -> u32 {
        self.absorb(amount)
    }

    fn modified(&self, base: u32) -> u32 {
        self.damage_modifiers
            .iter()
            .fold(base, |dmg, modifier| modifier.apply(dmg))
    }

    fn suffer_thorns(&mut self, target: &Character) {
        if target.flags.thorns || self.flags.crowned {
            self.receive_direct_damage(THORN_DAMAGE);
        }
    }

    fn absorb(&mut self, amount: u32) -> u32 {
        if self.is_invulnerable() {
            return 0;
        }

        let dealt = amount.min(self.health);
        self.health -= dealt;

        if self.health == 0 && self.flags.holy_relic {
            self.flags.holy_relic = false;
            self.health = self.max_health / 5;
            tracing::debug!(fighter = %self.name, health = self.health, "sacred relic revive");
        }

        dealt
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn add_item(&mut self, card: Card) -> Result<()> {
        if self.inventory.len() >= INVENTORY_CAPACITY {
            return Err(BattleError::InventoryFull {
                name: self.name.clone(),
                capacity: INVENTORY_CAPACITY,
            });
        }
        self.inventory.push(card);
        Ok(())
    }

    /// Play the card at `index`.
    ///
    /// Checks run in order: index range, card block, unique reuse. The card
    /// leaves the hand before it resolves, so hand-altering cards only see
    /// the rest of the hand.
    pub fn use_item(
        &mut self,
        index: usize,
        target: Option<&mut Character>,
        rng: &mut GameRng,
    ) -> Result<CardOutcome> {
        let card = *self.inventory.get(index).ok_or_else(|| {
            BattleError::invalid(format!(
                "Invalid item index {index}! {} has {} cards.",
                self.name,
                self.inventory.len()
            ))
        })?;

        if !self.can_use_cards() {
            return Err(BattleError::invalid(format!(
                "{} cannot use cards right now!",
                self.name
            )));
        }

        if card.is_unique() && self.used_unique.contains(&card) {
            return Err(BattleError::invalid(format!(
                "{} was already used by {} this battle!",
                card.name(),
                self.name
            )));
        }

        self.inventory.remove(index);
        let outcome = card.resolve(self, target, rng);
        if card.is_unique() {
            self.used_unique.insert(card);
        }
        Ok(outcome)
    }

    /// Remove and return the card at `index`, if any.
    pub fn discard_item(&mut self, index: usize) -> Option<Card> {
        (index < self.inventory.len()).then(|| self.inventory.remove(index))
    }

    /// Swap the card at `index` for `card`, returning the old one.
    pub fn replace_item(&mut self, index: usize, card: Card) -> Result<Card> {
        let slot = self.inventory.get_mut(index).ok_or_else(|| {
            BattleError::invalid(format!("Invalid item index {index}!"))
        })?;
        Ok(std::mem::replace(slot, card))
    }

    pub fn clear_inventory(&mut self) {
        self.inventory.clear();
    }

    /// Keep only the first `len` cards.
    pub fn truncate_inventory(&mut self, len: usize) {
        self.inventory.truncate(len);
    }

    // =========================================================================
    // Effects and statuses
    // =========================================================================

    pub fn add_damage_modifier(&mut self, modifier: DamageModifier) {
        self.damage_modifiers.push_back(modifier);
    }

    pub fn add_shield(&mut self, shield: Shield) {
        self.shields.push_back(shield);
    }

    pub fn add_persistent_effect(&mut self, effect: PersistentEffect) {
        self.persistent_effects.push_back(effect);
    }

    pub fn clear_persistent_effects(&mut self) {
        self.persistent_effects.clear();
    }

    pub fn set_base_attack_immunity(&mut self, turns: u32) {
        self.status.base_attack_immunity = turns;
    }

    pub fn set_card_block(&mut self, turns: u32) {
        self.status.card_block = turns;
    }

    pub fn set_invulnerability(&mut self, turns: u32) {
        self.status.invulnerability = turns;
    }

    pub fn set_attack_block(&mut self, turns: u32) {
        self.status.attack_block = turns;
    }

    pub fn set_stunned(&mut self, stunned: bool) {
        self.flags.stunned = stunned;
    }

    pub fn set_guaranteed_dodge(&mut self, dodge: bool) {
        self.flags.guaranteed_dodge = dodge;
    }

    pub fn set_next_attack_fails(&mut self, fails: bool) {
        self.flags.next_attack_fails = fails;
    }

    pub fn set_holy_relic(&mut self, active: bool) {
        self.flags.holy_relic = active;
    }

    pub fn set_thorns(&mut self, active: bool) {
        self.flags.thorns = active;
    }

    /// Crown of Thorns: every hit this fighter lands costs it 5 health.
    pub fn set_crowned(&mut self, active: bool) {
        self.flags.crowned = active;
    }

    /// Record that the Book of Forbidden Spells hit this fighter.
    pub fn mark_tome(&mut self) {
        self.flags.tome_marked = true;
    }

    pub(crate) fn set_exhausted(&mut self, exhausted: bool) {
        self.exhausted = exhausted;
    }

    // =========================================================================
    // Turn start
    // =========================================================================

    /// Process this fighter's turn start.
    ///
    /// A stunned fighter only clears the stun and loses the turn. Otherwise:
    /// persistent effects fire and decay, mana regenerates, status counters
    /// tick, shields and modifiers decay, and the dodge flag clears. The
    /// class hook runs in both cases.
    pub fn start_turn(&mut self, rival: &mut Character) -> TurnStart {
        let behavior = self.class.behavior();

        if self.flags.stunned {
            self.flags.stunned = false;
            behavior.on_turn_start(self);
            return TurnStart {
                lost_turn: true,
                messages: vec![format!("{} is stunned and loses the turn!", self.name)],
            };
        }

        let mut messages = Vec::new();

        let effects = self.persistent_effects.clone();
        for effect in &effects {
            messages.push(effect.apply(self, rival));
        }
        self.persistent_effects = decay_layer(&effects);

        if self.max_mana > 0 {
            self.recover_resource(MANA_REGEN);
            messages.push(format!("{} recovered {} mana.", self.name, MANA_REGEN));
        }

        self.status.tick();
        self.shields = decay_layer(&self.shields);
        self.damage_modifiers = decay_layer(&self.damage_modifiers);
        self.flags.guaranteed_dodge = false;

        behavior.on_turn_start(self);

        TurnStart {
            lost_turn: false,
            messages,
        }
    }

    // =========================================================================
    // Class actions
    // =========================================================================

    pub fn primary(&mut self, target: &mut Character, rng: &mut GameRng) -> Result<AttackResult> {
        self.class.behavior().primary(self, target, rng)
    }

    pub fn secondary(&mut self, target: &mut Character, rng: &mut GameRng) -> Result<AttackResult> {
        self.class.behavior().secondary(self, target, rng)
    }

    pub(crate) fn ensure_alive(&self) -> Result<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(BattleError::dead(&self.name))
        }
    }

    /// Both this fighter and `target` must be alive.
    pub(crate) fn ensure_can_strike(&self, target: &Character) -> Result<()> {
        self.ensure_alive()?;
        target.ensure_alive()
    }

    pub(crate) fn pay_resource(&mut self, cost: u32) -> Result<()> {
        let current = self.mana;
        if self.spend_resource(cost) {
            Ok(())
        } else {
            Err(BattleError::InsufficientResource {
                name: self.name.clone(),
                cost,
                current,
            })
        }
    }

    /// Guards checked before a class attack lands on `target`, in order:
    /// the attacker's failing-attack curse, the target's immunity, its
    /// guaranteed dodge (unless `ignores_dodge`), then its invulnerability.
    pub(crate) fn intercept_class_attack(
        &mut self,
        target: &mut Character,
        ignores_dodge: bool,
    ) -> Option<AttackResult> {
        if self.flags.next_attack_fails {
            self.flags.next_attack_fails = false;
            return Some(AttackResult::blocked(format!(
                "{} attacked, but the attack failed!",
                self.name
            )));
        }

        if target.status.base_attack_immunity > 0 {
            return Some(AttackResult::blocked(format!(
                "{} is immune to class attacks!",
                target.name
            )));
        }

        if target.flags.guaranteed_dodge && !ignores_dodge {
            target.flags.guaranteed_dodge = false;
            return Some(AttackResult::blocked(format!(
                "{} dodged {}'s attack!",
                target.name, self.name
            )));
        }

        if target.is_invulnerable() {
            return Some(AttackResult::blocked(format!("{} is invulnerable!", target.name)));
        }

        None
    }

    // =========================================================================
    // Snapshot and reset
    // =========================================================================

    #[must_use]
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            health: self.health,
            mana: self.mana,
            inventory: self.inventory.clone(),
            persistent_effects: self.persistent_effects.clone(),
            damage_modifiers: self.damage_modifiers.clone(),
            shields: self.shields.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &CharacterSnapshot) {
        self.health = snapshot.health.min(self.max_health);
        self.mana = snapshot.mana.min(self.max_mana);
        self.inventory = snapshot.inventory.iter().copied().take(INVENTORY_CAPACITY).collect();
        self.persistent_effects = snapshot.persistent_effects.clone();
        self.damage_modifiers = snapshot.damage_modifiers.clone();
        self.shields = snapshot.shields.clone();
    }

    /// Back to the freshly constructed baseline.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.mana = self.max_mana;
        self.inventory.clear();
        self.persistent_effects.clear();
        self.damage_modifiers.clear();
        self.shields.clear();
        self.status = StatusCounters::default();
        self.flags = StatusFlags::default();
        self.used_unique.clear();
        self.exhausted = false;
    }
}
