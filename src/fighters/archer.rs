//! Archer: balanced, with critical hits and an undodgeable arrow.

use super::character::Character;
use super::class::{AttackResult, ClassProfile, CombatantBehavior};
use crate::core::{GameRng, Result};

const CRIT_CHANCE: f64 = 0.30;
const PRECISE_ARROW_COST: u32 = 15;
const PRECISE_ARROW_DAMAGE: u32 = 25;

static PROFILE: ClassProfile = ClassProfile {
    name: "Archer",
    max_health: 100,
    max_mana: 50,
    attack: 15,
    defense: 10,
    primary_name: "Swift Shot",
    primary_description: "Deals 15 damage. 30% chance of a critical hit (double damage).",
    secondary_name: "Precise Arrow",
    secondary_description: "Costs 15 mana. Deals 25 fixed damage that cannot be dodged.",
    secondary_cost: PRECISE_ARROW_COST,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Archer;

impl CombatantBehavior for Archer {
    fn profile(&self) -> &'static ClassProfile {
        &PROFILE
    }

    fn primary(
        &self,
        actor: &mut Character,
        target: &mut Character,
        rng: &mut GameRng,
    ) -> Result<AttackResult> {
        actor.ensure_can_strike(target)?;
        if let Some(blocked) = actor.intercept_class_attack(target, false) {
            return Ok(blocked);
        }

        let critical = rng.gen_bool(CRIT_CHANCE);
        let base = if critical {
            actor.attack() * 2
        } else {
            actor.attack()
        };
        let damage = actor.deal_damage(target, base);
        let message = if critical {
            format!(
                "{} landed a CRITICAL Swift Shot on {} for {} damage!",
                actor.name(),
                target.name(),
                damage
            )
        } else {
            format!(
                "{} used Swift Shot on {} for {} damage!",
                actor.name(),
                target.name(),
                damage
            )
        };
        Ok(AttackResult::hit(damage, message).with_critical(critical))
    }

    fn secondary(
        &self,
        actor: &mut Character,
        target: &mut Character,
        _rng: &mut GameRng,
    ) -> Result<AttackResult> {
        actor.ensure_can_strike(target)?;
        actor.pay_resource(PRECISE_ARROW_COST)?;
        if let Some(blocked) = actor.intercept_class_attack(target, true) {
            return Ok(blocked);
        }

        let damage = target.receive_direct_damage(PRECISE_ARROW_DAMAGE);
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} fired a Precise Arrow at {} for {} unavoidable damage!",
                actor.name(),
                target.name(),
                damage
            ),
        ))
    }
}
