//! Card effect resolution.
//!
//! Every card resolves against `(user, target?)` and yields a
//! [`CardOutcome`]. Most effects are fully applied here; the few that need
//! the whole battle (turn priority, rewind, drawing new cards) are returned
//! as a [`SessionEffect`] for the arena to arbitrate.
//!
//! A card that needs a target but gets none resolves to an informational
//! message and changes nothing.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::GameRng;
use crate::effects::{DamageModifier, PersistentEffect, Shield};
use crate::fighters::Character;

/// Battle-level follow-up requested by a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEffect {
    /// Apocalypse Coin: `user_won` keeps priority with the user.
    CoinFlip { user_won: bool },
    /// Time Reversal: rewind the battle.
    Rewind,
    /// Philosopher's Stone: upgrade the user's first Common card to Mayhem.
    Transmute,
    /// Crystal Orb: replace the user's lowest-rarity card with a new draw.
    SwapLowest,
    /// Ankh of Reincarnation: deal the user `count` Epic cards.
    RefillEpic { count: usize },
}

/// Result of playing a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOutcome {
    pub message: String,
    pub session: Option<SessionEffect>,
}

impl CardOutcome {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session: None,
        }
    }

    fn with_session(message: impl Into<String>, session: SessionEffect) -> Self {
        Self {
            message: message.into(),
            session: Some(session),
        }
    }
}

fn no_target(user: &Character, card: Card) -> CardOutcome {
    CardOutcome::message(format!(
        "{} used {}, but there was no target!",
        user.name(),
        card.name()
    ))
}

/// Keep the first `len - len / 2` cards.
fn halve_hand(fighter: &mut Character) {
    let len = fighter.inventory().len();
    fighter.truncate_inventory(len - len / 2);
}

impl Card {
    /// Apply this card's effect.
    pub(crate) fn resolve(
        self,
        user: &mut Character,
        target: Option<&mut Character>,
        rng: &mut GameRng,
    ) -> CardOutcome {
        match self {
            Card::HealthPotion => {
                user.heal(10);
                CardOutcome::message(format!("{} drank a Health Potion and recovered 10 HP!", user.name()))
            }
            Card::ManaPotion => {
                user.recover_resource(20);
                CardOutcome::message(format!("{} drank a Mana Potion and recovered 20 mana!", user.name()))
            }
            Card::Whetstone => {
                user.add_damage_modifier(DamageModifier::new(1.2, 1));
                CardOutcome::message(format!(
                    "{} sharpened their weapon! Next attack deals extra damage.",
                    user.name()
                ))
            }
            Card::BitterHerb => {
                user.clear_persistent_effects();
                CardOutcome::message(format!(
                    "{} chewed a Bitter Herb and removed all lingering effects!",
                    user.name()
                ))
            }
            Card::ScrollOfSight => match target {
                Some(target) => CardOutcome::message(format!(
                    "{} read a Scroll of Sight! {}'s next card will be revealed.",
                    user.name(),
                    target.name()
                )),
                None => CardOutcome::message(format!("{} read a Scroll of Sight!", user.name())),
            },
            Card::SimpleBandage => {
                user.heal(5);
                CardOutcome::message(format!(
                    "{} applied a Simple Bandage and recovered 5 HP!",
                    user.name()
                ))
            }
            Card::ClayAmulet => {
                user.add_shield(Shield::new(0.15, 1));
                CardOutcome::message(format!(
                    "{} activated a Clay Amulet! The next damage taken is reduced.",
                    user.name()
                ))
            }
            Card::OilFlask => {
                user.add_damage_modifier(DamageModifier::new(1.3, 1));
                CardOutcome::message(format!(
                    "{} coated their weapon with oil! Next attack hits harder.",
                    user.name()
                ))
            }

            Card::IronElixir => {
                user.set_base_attack_immunity(1);
                CardOutcome::message(format!(
                    "{} drank an Iron Elixir! Immune to class attacks for 1 turn.",
                    user.name()
                ))
            }
            Card::BrokenStaff => match target {
                Some(target) => {
                    target.set_next_attack_fails(true);
                    CardOutcome::message(format!(
                        "{} used the Broken Staff! {}'s next attack will fail.",
                        user.name(),
                        target.name()
                    ))
                }
                None => no_target(user, self),
            },
            Card::CloakOfShadows => {
                user.set_guaranteed_dodge(true);
                CardOutcome::message(format!(
                    "{} wrapped themselves in the Cloak of Shadows! The next attack will be dodged.",
                    user.name()
                ))
            }
            Card::CrystalOrb => CardOutcome::with_session(
                format!("{} used the Crystal Orb! A card in hand will be swapped.", user.name()),
                SessionEffect::SwapLowest,
            ),
            Card::BloodEssence => match target {
                Some(target) => {
                    target.receive_direct_damage(5);
                    user.heal(5);
                    CardOutcome::message(format!(
                        "{} drained 5 HP from {} with Blood Essence!",
                        user.name(),
                        target.name()
                    ))
                }
                None => no_target(user, self),
            },
            Card::ThornedShield => {
                user.set_thorns(true);
                CardOutcome::message(format!(
                    "{} raised a Thorned Shield! Attackers will be hurt.",
                    user.name()
                ))
            }

            Card::ForbiddenSpellbook => match target {
                Some(target) if target.flags().tome_marked => CardOutcome::message(format!(
                    "The Book of Forbidden Spells was already used on {}!",
                    target.name()
                )),
                Some(target) => {
                    let damage = target.health() / 2;
                    target.receive_direct_damage(damage);
                    target.mark_tome();
                    CardOutcome::message(format!(
                        "{} read from the Book of Forbidden Spells! {} lost half their HP ({})!",
                        user.name(),
                        target.name(),
                        damage
                    ))
                }
                None => no_target(user, self),
            },
            Card::SacredRelic => {
                user.set_holy_relic(true);
                CardOutcome::message(format!(
                    "{} activated the Sacred Relic! They will revive with 20% HP if they fall.",
                    user.name()
                ))
            }
            Card::AnkhOfReincarnation => {
                user.clear_inventory();
                CardOutcome::with_session(
                    format!(
                        "{} used the Ankh of Reincarnation! Hand cleared, 3 Epic cards incoming.",
                        user.name()
                    ),
                    SessionEffect::RefillEpic { count: 3 },
                )
            }
            Card::CrownOfThorns => match target {
                Some(target) => {
                    target.set_crowned(true);
                    CardOutcome::message(format!(
                        "{} placed the Crown of Thorns on {}!",
                        user.name(),
                        target.name()
                    ))
                }
                None => no_target(user, self),
            },
            Card::ScepterOfDomination => match target {
                Some(target) => {
                    target.set_card_block(2);
                    CardOutcome::message(format!(
                        "{} raised the Scepter of Domination! {} cannot use cards for 2 turns.",
                        user.name(),
                        target.name()
                    ))
                }
                None => no_target(user, self),
            },

            Card::ChaliceOfInfinity => {
                user.heal(user.max_health());
                user.add_damage_modifier(DamageModifier::new(0.5, 999));
                CardOutcome::message(format!(
                    "{} drank from the Chalice of Infinity! Full HP, but damage is halved.",
                    user.name()
                ))
            }
            Card::Excalibur => {
                user.add_damage_modifier(DamageModifier::new(2.0, 1));
                CardOutcome::message(format!(
                    "{} wields Excalibur! The next attack deals double damage!",
                    user.name()
                ))
            }
            Card::LichGrimoire => match target {
                Some(target) => {
                    user.add_persistent_effect(PersistentEffect::lich_minion(3, target.name()));
                    CardOutcome::message(format!(
                        "{} summoned a Lich Minion! It will attack {} for 3 turns.",
                        user.name(),
                        target.name()
                    ))
                }
                None => no_target(user, self),
            },
            Card::EyeOfSauron => match target {
                Some(target) => match target.discard_item(0) {
                    Some(card) => CardOutcome::message(format!(
                        "{} used the Eye of Sauron! {}'s {} was discarded.",
                        user.name(),
                        target.name(),
                        card.name()
                    )),
                    None => CardOutcome::message(format!(
                        "{} used the Eye of Sauron, but {} had no cards!",
                        user.name(),
                        target.name()
                    )),
                },
                None => no_target(user, self),
            },
            Card::CloakOfInvisibility => {
                user.set_invulnerability(2);
                user.set_attack_block(2);
                CardOutcome::message(format!(
                    "{} put on the Cloak of Invisibility! Invulnerable for 2 turns, but cannot attack.",
                    user.name()
                ))
            }
            Card::ThorsHammer => match target {
                Some(target) => {
                    let dealt = target.receive_damage(40);
                    target.set_stunned(true);
                    CardOutcome::message(format!(
                        "{} hurled Thor's Hammer! {} took {} damage and is stunned!",
                        user.name(),
                        target.name(),
                        dealt
                    ))
                }
                None => no_target(user, self),
            },
            Card::PhilosophersStone => CardOutcome::with_session(
                format!(
                    "{} used the Philosopher's Stone! A Common card will become Mayhem.",
                    user.name()
                ),
                SessionEffect::Transmute,
            ),

            Card::ApocalypseCoin => {
                user.set_health(1);
                let rival_name = target.map_or_else(
                    || "the opponent".to_string(),
                    |target| {
                        target.set_health(1);
                        target.name().to_string()
                    },
                );
                let user_won = rng.gen_bool(0.5);
                let next = if user_won { user.name() } else { rival_name.as_str() };
                CardOutcome::with_session(
                    format!("MAYHEM! Apocalypse Coin! Both fighters at 1 HP! {next} plays next!"),
                    SessionEffect::CoinFlip { user_won },
                )
            }
            Card::BlackHole => {
                user.clear_inventory();
                user.set_card_block(999);
                if let Some(target) = target {
                    target.clear_inventory();
                    target.set_card_block(999);
                }
                CardOutcome::message("MAYHEM! Black Hole! Every card was swallowed by the darkness!")
            }
            Card::SupremeWish => {
                let low_health = user.health() * 2 < user.max_health();
                match target {
                    Some(target) if !low_health => {
                        target.receive_direct_damage(40);
                        CardOutcome::message(format!(
                            "MAYHEM! Supreme Wish! {} wished for destruction! {} took 40 damage!",
                            user.name(),
                            target.name()
                        ))
                    }
                    _ => {
                        user.heal(50);
                        CardOutcome::message(format!(
                            "MAYHEM! Supreme Wish! {} wished for health and gained 50 HP!",
                            user.name()
                        ))
                    }
                }
            }
            Card::TimeReversal => CardOutcome::with_session(
                "MAYHEM! Time Reversal! Time flows backwards!",
                SessionEffect::Rewind,
            ),
            Card::TheSnap => {
                user.set_health((user.health() / 2).max(1));
                halve_hand(user);
                if let Some(target) = target {
                    target.set_health((target.health() / 2).max(1));
                    halve_hand(target);
                }
                CardOutcome::message("MAYHEM! THE SNAP! Reality was altered! Half of everything is gone!")
            }

            Card::Exodia => match target {
                Some(target) => {
                    target.set_health(0);
                    CardOutcome::message(format!(
                        "SUPER MAYHEM! EXODIA! {} WINS INSTANTLY!",
                        user.name()
                    ))
                }
                None => no_target(user, self),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::PersistentKind;
    use crate::fighters::FighterClass;

    fn pair() -> (Character, Character, GameRng) {
        (
            Character::new("Thorin", FighterClass::Warrior),
            Character::new("Gandalf", FighterClass::Mage),
            GameRng::new(42),
        )
    }

    // =========================================================================
    // Simple effects
    // =========================================================================

    #[test]
    fn test_potions() {
        let (mut user, mut target, mut rng) = pair();
        user.set_health(100);
        Card::HealthPotion.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(user.health(), 110);

        target.set_mana(50);
        Card::ManaPotion.resolve(&mut target, Some(&mut user), &mut rng);
        assert_eq!(target.mana(), 70);
    }

    #[test]
    fn test_bandage_and_herb() {
        let (mut user, mut target, mut rng) = pair();
        user.set_health(100);
        Card::SimpleBandage.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(user.health(), 105);

        user.add_persistent_effect(PersistentEffect::debilitation(2, 5));
        Card::BitterHerb.resolve(&mut user, Some(&mut target), &mut rng);
        assert!(user.persistent_effects().is_empty());
        assert_eq!(user.health(), 105);
    }

    #[test]
    fn test_scroll_of_sight_changes_nothing() {
        let (mut user, mut target, mut rng) = pair();
        let (user_before, target_before) = (user.clone(), target.clone());

        let outcome = Card::ScrollOfSight.resolve(&mut user, Some(&mut target), &mut rng);
        assert!(outcome.message.contains("Gandalf"));
        assert_eq!(outcome.session, None);
        assert_eq!(user, user_before);
        assert_eq!(target, target_before);

        let alone = Card::ScrollOfSight.resolve(&mut user, None, &mut rng);
        assert_eq!(alone.message, "Thorin read a Scroll of Sight!");
    }

    #[test]
    fn test_chalice_heals_then_halves_damage() {
        let (mut user, mut target, mut rng) = pair();
        user.set_health(20);
        Card::ChaliceOfInfinity.resolve(&mut user, None, &mut rng);
        assert_eq!(user.health(), user.max_health());
        assert_eq!(user.damage_modifiers()[0].multiplier, 0.5);
        assert_eq!(user.damage_modifiers()[0].remaining, 999);

        assert_eq!(user.deal_damage(&mut target, 18), 9);
        assert_eq!(target.health(), 71);
    }

    #[test]
    fn test_lich_grimoire_summons_minion() {
        let (mut user, mut target, mut rng) = pair();
        Card::LichGrimoire.resolve(&mut user, Some(&mut target), &mut rng);

        let minion = &user.persistent_effects()[0];
        assert_eq!(minion.remaining, 3);
        assert_eq!(
            minion.kind,
            PersistentKind::Minion {
                damage: 10,
                target: "Gandalf".to_string(),
            }
        );
        assert!(target.persistent_effects().is_empty());
    }

    #[test]
    fn test_lich_grimoire_without_target() {
        let (mut user, _, mut rng) = pair();
        let before = user.clone();
        let outcome = Card::LichGrimoire.resolve(&mut user, None, &mut rng);
        assert!(outcome.message.contains("no target"));
        assert_eq!(user, before);
    }

    #[test]
    fn test_crown_of_thorns_marks_target() {
        let (mut user, mut target, mut rng) = pair();
        Card::CrownOfThorns.resolve(&mut user, Some(&mut target), &mut rng);
        assert!(target.flags().crowned);
        assert!(!target.flags().thorns);
        assert!(!user.flags().crowned);

        target.deal_damage(&mut user, 10);
        assert_eq!(target.health(), 75);
        assert_eq!(user.health(), 140);
    }

    #[test]
    fn test_buff_cards_add_layers() {
        let (mut user, _, mut rng) = pair();
        Card::Whetstone.resolve(&mut user, None, &mut rng);
        Card::ClayAmulet.resolve(&mut user, None, &mut rng);
        assert_eq!(user.damage_modifiers().len(), 1);
        assert_eq!(user.shields().len(), 1);
        assert_eq!(user.damage_modifiers()[0].multiplier, 1.2);
        assert_eq!(user.shields()[0].reduction, 0.15);
    }

    #[test]
    fn test_targeted_card_without_target_is_informational() {
        let (mut user, _, mut rng) = pair();
        let before = user.clone();
        let outcome = Card::ThorsHammer.resolve(&mut user, None, &mut rng);
        assert!(outcome.message.contains("no target"));
        assert!(outcome.session.is_none());
        assert_eq!(user, before);
    }

    #[test]
    fn test_blood_essence_transfers() {
        let (mut user, mut target, mut rng) = pair();
        user.set_health(100);
        Card::BloodEssence.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(target.health(), 75);
        assert_eq!(user.health(), 105);
    }

    // =========================================================================
    // Once-per-target and status cards
    // =========================================================================

    #[test]
    fn test_forbidden_spellbook_once_per_target() {
        let (mut user, mut target, mut rng) = pair();
        target.set_health(61);
        Card::ForbiddenSpellbook.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(target.health(), 31);

        let outcome = Card::ForbiddenSpellbook.resolve(&mut user, Some(&mut target), &mut rng);
        assert!(outcome.message.contains("already used"));
        assert_eq!(target.health(), 31);
    }

    #[test]
    fn test_thors_hammer_respects_shields_and_stuns() {
        let (mut user, mut target, mut rng) = pair();
        target.add_shield(Shield::new(0.5, 1));
        Card::ThorsHammer.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(target.health(), 60);
        assert!(target.is_stunned());
    }

    #[test]
    fn test_cloak_of_invisibility() {
        let (mut user, _, mut rng) = pair();
        Card::CloakOfInvisibility.resolve(&mut user, None, &mut rng);
        assert!(user.is_invulnerable());
        assert!(!user.can_attack());
    }

    #[test]
    fn test_eye_of_sauron_discards_first() {
        let (mut user, mut target, mut rng) = pair();
        target.add_item(Card::Excalibur).unwrap();
        target.add_item(Card::HealthPotion).unwrap();
        Card::EyeOfSauron.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(target.inventory(), &[Card::HealthPotion]);

        target.clear_inventory();
        let outcome = Card::EyeOfSauron.resolve(&mut user, Some(&mut target), &mut rng);
        assert!(outcome.message.contains("had no cards"));
    }

    // =========================================================================
    // Mayhem
    // =========================================================================

    #[test]
    fn test_apocalypse_coin() {
        let (mut user, mut target, mut rng) = pair();
        let outcome = Card::ApocalypseCoin.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(user.health(), 1);
        assert_eq!(target.health(), 1);
        assert!(matches!(outcome.session, Some(SessionEffect::CoinFlip { .. })));
    }

    #[test]
    fn test_black_hole_blocks_cards_for_good() {
        let (mut user, mut target, mut rng) = pair();
        user.add_item(Card::HealthPotion).unwrap();
        target.add_item(Card::HealthPotion).unwrap();
        Card::BlackHole.resolve(&mut user, Some(&mut target), &mut rng);
        assert!(user.inventory().is_empty());
        assert!(target.inventory().is_empty());
        assert!(!user.can_use_cards());
        assert!(!target.can_use_cards());
    }

    #[test]
    fn test_supreme_wish_branches() {
        let (mut user, mut target, mut rng) = pair();
        Card::SupremeWish.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(target.health(), 40);

        user.set_health(70);
        Card::SupremeWish.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(user.health(), 120);
        assert_eq!(target.health(), 40);

        // healthy but alone: falls back to healing
        let (mut user, _, mut rng) = pair();
        user.set_health(140);
        Card::SupremeWish.resolve(&mut user, None, &mut rng);
        assert_eq!(user.health(), 150);
    }

    #[test]
    fn test_the_snap_halves_health_and_hands() {
        let (mut user, mut target, mut rng) = pair();
        for card in [Card::HealthPotion, Card::ManaPotion, Card::Whetstone] {
            user.add_item(card).unwrap();
        }
        target.add_item(Card::OilFlask).unwrap();
        target.set_health(1);

        Card::TheSnap.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(user.health(), 75);
        assert_eq!(target.health(), 1);
        assert_eq!(user.inventory(), &[Card::HealthPotion, Card::ManaPotion]);
        assert_eq!(target.inventory(), &[Card::OilFlask]);
    }

    #[test]
    fn test_exodia_ignores_relic() {
        let (mut user, mut target, mut rng) = pair();
        target.set_holy_relic(true);
        Card::Exodia.resolve(&mut user, Some(&mut target), &mut rng);
        assert_eq!(target.health(), 0);
        assert!(!target.is_alive());
    }

    #[test]
    fn test_session_cards() {
        let (mut user, _, mut rng) = pair();
        assert_eq!(
            Card::TimeReversal.resolve(&mut user, None, &mut rng).session,
            Some(SessionEffect::Rewind)
        );
        assert_eq!(
            Card::PhilosophersStone.resolve(&mut user, None, &mut rng).session,
            Some(SessionEffect::Transmute)
        );
        assert_eq!(
            Card::CrystalOrb.resolve(&mut user, None, &mut rng).session,
            Some(SessionEffect::SwapLowest)
        );
        assert_eq!(
            Card::AnkhOfReincarnation.resolve(&mut user, None, &mut rng).session,
            Some(SessionEffect::RefillEpic { count: 3 })
        );
    }
}
