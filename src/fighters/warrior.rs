//! Warrior: high health, no mana, a heavy blow that needs a turn to recover.

use super::character::Character;
use super::class::{AttackResult, ClassProfile, CombatantBehavior};
use crate::core::{GameRng, Result};

static PROFILE: ClassProfile = ClassProfile {
    name: "Warrior",
    max_health: 150,
    max_mana: 0,
    attack: 18,
    defense: 15,
    primary_name: "Standard Strike",
    primary_description: "Deals 18 physical damage.",
    secondary_name: "Brutal Strike",
    secondary_description: "Deals double damage (36). Cannot be used on consecutive turns.",
    secondary_cost: 0,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Warrior;

impl CombatantBehavior for Warrior {
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
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} used Standard Strike on {} for {} damage!",
                actor.name(),
                target.name(),
                damage
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
        if actor.is_exhausted() {
            return Ok(AttackResult::blocked(format!(
                "{} is still exhausted from the last Brutal Strike!",
                actor.name()
            )));
        }

        actor.set_exhausted(true);
        if let Some(blocked) = actor.intercept_class_attack(target, false) {
            return Ok(blocked);
        }

        let base = actor.attack() * 2;
        let damage = actor.deal_damage(target, base);
        Ok(AttackResult::hit(
            damage,
            format!(
                "{} used Brutal Strike on {} for {} massive damage!",
                actor.name(),
                target.name(),
                damage
            ),
        ))
    }

    fn on_turn_start(&self, actor: &mut Character) {
        actor.set_exhausted(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_strike() {
        let mut warrior = Character::warrior("Thorin");
        let mut mage = Character::mage("Gandalf");
        let result = warrior.primary(&mut mage, &mut GameRng::new(1)).unwrap();
        assert_eq!(result.damage, 18);
        assert_eq!(mage.health(), 62);
    }

    #[test]
    fn test_brutal_strike_cooldown() {
        let mut warrior = Character::warrior("Thorin");
        let mut target = Character::paladin("Arthas");
        let mut rng = GameRng::new(1);

        let first = warrior.secondary(&mut target, &mut rng).unwrap();
        assert_eq!(first.damage, 36);

        let second = warrior.secondary(&mut target, &mut rng).unwrap();
        assert_eq!(second.damage, 0);
        assert!(second.blocked);
        assert!(second.message.contains("exhausted"));
        assert_eq!(target.health(), 94);

        warrior.start_turn(&mut target);
        let third = warrior.secondary(&mut target, &mut rng).unwrap();
        assert_eq!(third.damage, 36);
    }

    #[test]
    fn test_cooldown_refreshes_even_when_stunned() {
        let mut warrior = Character::warrior("Thorin");
        let mut target = Character::paladin("Arthas");
        let mut rng = GameRng::new(1);

        warrior.secondary(&mut target, &mut rng).unwrap();
        warrior.set_stunned(true);
        assert!(warrior.start_turn(&mut target).lost_turn);
        assert!(!warrior.is_exhausted());
    }

    #[test]
    fn test_dead_target_rejected() {
        let mut warrior = Character::warrior("Thorin");
        let mut target = Character::mage("Gandalf");
        target.set_health(0);
        assert!(warrior.primary(&mut target, &mut GameRng::new(1)).is_err());
    }
}
