//! Sorcerer: large mana pool, shield-piercing darts and Mana Flow.

use super::character::Character;
use super::class::{AttackResult, ClassProfile, CombatantBehavior};
use crate::core::{GameRng, Result};
use crate::effects::DamageModifier;

const MANA_FLOW_COST: u32 = 15;
const MANA_FLOW_MULTIPLIER: f64 = 1.5;

static PROFILE: ClassProfile = ClassProfile {
    name: "Sorcerer",
    max_health: 85,
    max_mana: 120,
    attack: 20,
    defense: 6,
    primary_name: "Arcane Dart",
    primary_description: "Deals 20 pure damage that ignores shields.",
    secondary_name: "Mana Flow",
    secondary_description: "Costs 15 mana. The next attack deals 1.5x damage.",
    secondary_cost: MANA_FLOW_COST,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Sorcerer;

impl CombatantBehavior for Sorcerer {
    fn profile(&self) -> &'static ClassProfile {
        &PROFILE
    }

    fn primary(
        &self,
        actor: &mut Character,
        target: &mut Character,
        _rng: &mut GameRng,
    ) -> Result<AttackResult> {
        actor.ensure_can_strike(target)?;
        if let Some(blocked) = actor.intercept_class_attack(target, false) {
            return Ok(blocked);
        }

        let base = actor.attack();
        let damage = actor.deal_piercing_damage(target, base);
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} fired an Arcane Dart at {} for {} pure damage!",
                actor.name(),
                target.name(),
                damage
            ),
        ))
    }

    fn secondary(
        &self,
        actor: &mut Character,
        _target: &mut Character,
        _rng: &mut GameRng,
    ) -> Result<AttackResult> {
        actor.ensure_alive()?;
        actor.pay_resource(MANA_FLOW_COST)?;
        actor.add_damage_modifier(DamageModifier::new(MANA_FLOW_MULTIPLIER, 1));
        Ok(AttackResult::utility(format!(
            "{} channeled Mana Flow! The next attack deals 1.5x damage.",
            actor.name()
        )))
    }
}
