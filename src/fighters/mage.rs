//! Mage: fragile, mana-hungry, hits hard with Fireball.

use super::character::Character;
use super::class::{AttackResult, ClassProfile, CombatantBehavior};
use crate::core::{GameRng, Result};

const MEDITATION_MANA: u32 = 25;
const FIREBALL_COST: u32 = 45;

static PROFILE: ClassProfile = ClassProfile {
    name: "Mage",
    max_health: 80,
    max_mana: 100,
    attack: 18,
    defense: 5,
    primary_name: "Meditate",
    primary_description: "Recovers 25 mana. Deals no damage.",
    secondary_name: "Fireball",
    secondary_description: "Costs 45 mana. Deals 1.5x attack as damage (27).",
    secondary_cost: FIREBALL_COST,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Mage;

impl CombatantBehavior for Mage {
    fn profile(&self) -> &'static ClassProfile {
        &PROFILE
    }

    fn primary(
        &self,
        actor: &mut Character,
        _target: &mut Character,
        _rng: &mut GameRng,
    ) -> Result<AttackResult> {
        actor.ensure_alive()?;
        actor.recover_resource(MEDITATION_MANA);
        Ok(AttackResult::utility(format!(
            "{} meditated and recovered {} mana!",
            actor.name(),
            MEDITATION_MANA
        )))
    }

    fn secondary(
        &self,
        actor: &mut Character,
        target: &mut Character,
        _rng: &mut GameRng,
    ) -> Result<AttackResult> {
        actor.ensure_can_strike(target)?;
        actor.pay_resource(FIREBALL_COST)?;
        if let Some(blocked) = actor.intercept_class_attack(target, false) {
            return Ok(blocked);
        }

        let base = actor.attack() * 3 / 2;
        let damage = actor.deal_damage(target, base);
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} hurled a Fireball at {} for {} damage!",
                actor.name(),
                target.name(),
                damage
            ),
        ))
    }
}
