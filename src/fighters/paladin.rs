//! Paladin: sturdy, heals on hit and can raise a Divine Shield.

use super::character::Character;
use super::class::{AttackResult, ClassProfile, CombatantBehavior};
use crate::core::{GameRng, Result};
use crate::effects::Shield;

const FAITH_HEAL: u32 = 5;
const DIVINE_SHIELD_COST: u32 = 20;

static PROFILE: ClassProfile = ClassProfile {
    name: "Paladin",
    max_health: 130,
    max_mana: 60,
    attack: 15,
    defense: 18,
    primary_name: "Strike of Faith",
    primary_description: "Deals 15 damage and heals 5 HP.",
    secondary_name: "Divine Shield",
    secondary_description: "Costs 20 mana. Reduces the next damage taken by 50%.",
    secondary_cost: DIVINE_SHIELD_COST,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Paladin;

impl CombatantBehavior for Paladin {
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
        actor.heal(FAITH_HEAL);
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} used Strike of Faith on {} for {} damage and healed {} HP!",
                actor.name(),
                target.name(),
                damage,
                FAITH_HEAL
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
        actor.pay_resource(DIVINE_SHIELD_COST)?;
        actor.add_shield(Shield::new(0.5, 1));
        Ok(AttackResult::utility(format!(
            "{} raised a Divine Shield! The next damage taken is halved.",
            actor.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_of_faith_heals() {
        let mut paladin = Character::paladin("Arthas");
        let mut target = Character::mage("Gandalf");
        paladin.set_health(100);

        let result = paladin.primary(&mut target, &mut GameRng::new(1)).unwrap();
        assert_eq!(result.damage, 15);
        assert_eq!(target.health(), 65);
        assert_eq!(paladin.health(), 105);
    }

    #[test]
    fn test_divine_shield_halves_next_hit() {
        let mut paladin = Character::paladin("Arthas");
        let mut attacker = Character::warrior("Thorin");
        let mut rng = GameRng::new(1);

        let result = paladin.secondary(&mut attacker, &mut rng).unwrap();
        assert_eq!(result.damage, 0);
        assert_eq!(paladin.mana(), 40);

        attacker.primary(&mut paladin, &mut rng).unwrap();
        assert_eq!(paladin.health(), 121);
    }

    #[test]
    fn test_divine_shield_needs_mana() {
        let mut paladin = Character::paladin("Arthas");
        let mut target = Character::mage("Gandalf");
        paladin.set_mana(19);
        assert!(paladin.secondary(&mut target, &mut GameRng::new(1)).is_err());
        assert!(paladin.shields().is_empty());
    }
}
