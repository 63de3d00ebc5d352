//! Battle policies.

use serde::{Deserialize, Serialize};

use crate::arena::AttackSlot;
use crate::core::GameRng;
use crate::fighters::Character;

/// A single thing the active fighter can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAction {
    Attack(AttackSlot),
    UseCard(usize),
}

/// A preferred action and what to try if it is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub action: BattleAction,
    pub fallback: Option<BattleAction>,
}

impl ActionPlan {
    #[must_use]
    pub fn single(action: BattleAction) -> Self {
        Self {
            action,
            fallback: None,
        }
    }

    #[must_use]
    pub fn with_fallback(action: BattleAction, fallback: BattleAction) -> Self {
        Self {
            action,
            fallback: Some(fallback),
        }
    }
}

/// Chooses the active fighter's action.
pub trait BattlePolicy {
    fn plan(&self, actor: &Character, opponent: &Character, rng: &mut GameRng) -> ActionPlan;
}

fn random_slot(rng: &mut GameRng) -> AttackSlot {
    if rng.gen_bool(0.5) {
        AttackSlot::Primary
    } else {
        AttackSlot::Secondary
    }
}

/// Picks one of the two class actions uniformly.
///
/// Used by automated battles.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAttacker;

impl BattlePolicy for RandomAttacker {
    fn plan(&self, _actor: &Character, _opponent: &Character, rng: &mut GameRng) -> ActionPlan {
        ActionPlan::single(BattleAction::Attack(random_slot(rng)))
    }
}

/// Computer opponent.
///
/// With a non-empty hand, plays a random card `card_chance` of the time and
/// falls back to the primary action if the card is rejected. Otherwise
/// picks a random class action and falls back to the other one.
#[derive(Clone, Copy, Debug)]
pub struct CpuOpponent {
    card_chance: f64,
}

impl Default for CpuOpponent {
    fn default() -> Self {
        Self { card_chance: 0.3 }
    }
}

impl CpuOpponent {
    /// Set the card probability, clamped to `0.0..=1.0` (NaN becomes 0).
    #[must_use]
    pub fn with_card_chance(mut self, chance: f64) -> Self {
        self.card_chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        self
    }

    #[must_use]
    pub fn card_chance(&self) -> f64 {
        self.card_chance
    }
}

impl BattlePolicy for CpuOpponent {
    fn plan(&self, actor: &Character, _opponent: &Character, rng: &mut GameRng) -> ActionPlan {
        let hand = actor.inventory().len();
        if hand > 0 && rng.gen_bool(self.card_chance) {
            let index = rng.gen_range_usize(0..hand);
            return ActionPlan::with_fallback(
                BattleAction::UseCard(index),
                BattleAction::Attack(AttackSlot::Primary),
            );
        }

        let slot = random_slot(rng);
        ActionPlan::with_fallback(BattleAction::Attack(slot), BattleAction::Attack(slot.other()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_random_attacker_uses_both_slots() {
        let actor = Character::warrior("Thorin");
        let opponent = Character::mage("Gandalf");
        let mut rng = GameRng::new(8);

        let plans: Vec<_> = (0..50)
            .map(|_| RandomAttacker.plan(&actor, &opponent, &mut rng))
            .collect();
        assert!(plans.iter().all(|p| p.fallback.is_none()));
        assert!(plans.contains(&ActionPlan::single(BattleAction::Attack(AttackSlot::Primary))));
        assert!(plans.contains(&ActionPlan::single(BattleAction::Attack(AttackSlot::Secondary))));
    }

    #[test]
    fn test_cpu_without_cards_attacks_with_fallback() {
        let actor = Character::warrior("Thorin");
        let opponent = Character::mage("Gandalf");
        let mut rng = GameRng::new(8);
        let cpu = CpuOpponent::default().with_card_chance(1.0);

        let plan = cpu.plan(&actor, &opponent, &mut rng);
        match (plan.action, plan.fallback) {
            (BattleAction::Attack(first), Some(BattleAction::Attack(second))) => {
                assert_eq!(first.other(), second);
            }
            other => panic!("unexpected plan {other:?}"),
        }
    }

    #[test]
    fn test_cpu_plays_cards_in_range() {
        let mut actor = Character::warrior("Thorin");
        actor.add_item(Card::HealthPotion).unwrap();
        actor.add_item(Card::ManaPotion).unwrap();
        let opponent = Character::mage("Gandalf");
        let mut rng = GameRng::new(8);
        let cpu = CpuOpponent::default().with_card_chance(1.0);

        for _ in 0..20 {
            let plan = cpu.plan(&actor, &opponent, &mut rng);
            match plan.action {
                BattleAction::UseCard(index) => assert!(index < 2),
                other => panic!("expected a card, got {other:?}"),
            }
            assert_eq!(plan.fallback, Some(BattleAction::Attack(AttackSlot::Primary)));
        }
    }

    #[test]
    fn test_card_chance_always_valid() {
        assert_eq!(CpuOpponent::default().card_chance(), 0.3);
        assert_eq!(CpuOpponent::default().with_card_chance(1.5).card_chance(), 1.0);
        assert_eq!(CpuOpponent::default().with_card_chance(-2.0).card_chance(), 0.0);
        assert_eq!(CpuOpponent::default().with_card_chance(f64::NAN).card_chance(), 0.0);

        let mut actor = Character::warrior("Thorin");
        actor.add_item(Card::HealthPotion).unwrap();
        let opponent = Character::mage("Gandalf");
        let mut rng = GameRng::new(3);
        let cpu = CpuOpponent::default().with_card_chance(1.5);
        for _ in 0..10 {
            let plan = cpu.plan(&actor, &opponent, &mut rng);
            assert_eq!(plan.action, BattleAction::UseCard(0));
        }
    }
}
