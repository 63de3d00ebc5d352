//! Necromancer: curses that linger, and a Sacrifice paid for in blood.

use super::character::Character;
use super::class::{AttackResult, ClassProfile, CombatantBehavior};
use crate::core::{GameRng, Result};
use crate::effects::PersistentEffect;

const DEBILITATION_TURNS: u32 = 2;
const DEBILITATION_DAMAGE: u32 = 5;
const SACRIFICE_HEALTH_COST: u32 = 10;
const SACRIFICE_DAMAGE: u32 = 35;

static PROFILE: ClassProfile = ClassProfile {
    name: "Necromancer",
    max_health: 90,
    max_mana: 80,
    attack: 10,
    defense: 8,
    primary_name: "Debilitating Touch",
    primary_description: "Deals 10 damage and inflicts Debilitation (5 damage per turn for 2 turns).",
    secondary_name: "Sacrifice",
    secondary_description: "Loses 10 HP to deal 35 damage.",
    secondary_cost: 0,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Necromancer;

impl CombatantBehavior for Necromancer {
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
        let damage = actor.deal_damage(target, base);
        target.add_persistent_effect(PersistentEffect::debilitation(
            DEBILITATION_TURNS,
            DEBILITATION_DAMAGE,
        ));
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} used Debilitating Touch on {} for {} damage! {} is debilitated.",
                actor.name(),
                target.name(),
                damage,
                target.name()
            ),
        ))
    }

    fn secondary(
        &self,
        actor: &mut Character,
        target: &mut Character,
        _rng: &mut GameRng,
    ) -> Result<AttackResult> {
        actor.ensure_can_strike(target)?;
        actor.receive_direct_damage(SACRIFICE_HEALTH_COST);
        if let Some(blocked) = actor.intercept_class_attack(target, false) {
            return Ok(blocked);
        }

        let damage = actor.deal_damage(target, SACRIFICE_DAMAGE);
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} used Sacrifice on {}, losing {} HP and dealing {} dark damage!",
                actor.name(),
                target.name(),
                SACRIFICE_HEALTH_COST,
                damage
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debilitating_touch_applies_dot() {
        let mut necro = Character::necromancer("Kel'Thuzad");
        let mut target = Character::warrior("Thorin");
        let mut rng = GameRng::new(1);

        let result = necro.primary(&mut target, &mut rng).unwrap();
        assert_eq!(result.damage, 10);
        assert_eq!(target.persistent_effects().len(), 1);

        target.start_turn(&mut necro);
        target.start_turn(&mut necro);
        assert_eq!(target.health(), 130);
        assert!(target.persistent_effects().is_empty());
    }

    #[test]
    fn test_sacrifice_costs_health() {
        let mut necro = Character::necromancer("Kel'Thuzad");
        let mut target = Character::warrior("Thorin");

        let result = necro.secondary(&mut target, &mut GameRng::new(1)).unwrap();
        assert_eq!(result.damage, 35);
        assert_eq!(necro.health(), 80);
        assert_eq!(necro.mana(), 80);
        assert_eq!(target.health(), 115);
    }
}
