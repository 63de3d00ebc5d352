//! The closed card catalog.
//!
//! Cards are plain `Copy` values; their behaviour lives in
//! [`resolve`](super::resolve). Metadata (name, description, rarity) is
//! static per variant.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;

/// Every card that can appear in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    // Common
    HealthPotion,
    ManaPotion,
    Whetstone,
    BitterHerb,
    ScrollOfSight,
    SimpleBandage,
    ClayAmulet,
    OilFlask,

    // Rare
    IronElixir,
    BrokenStaff,
    CloakOfShadows,
    CrystalOrb,
    BloodEssence,
    ThornedShield,

    // Epic
    ForbiddenSpellbook,
    SacredRelic,
    AnkhOfReincarnation,
    CrownOfThorns,
    ScepterOfDomination,

    // Legendary
    ChaliceOfInfinity,
    Excalibur,
    LichGrimoire,
    EyeOfSauron,
    CloakOfInvisibility,
    ThorsHammer,
    PhilosophersStone,

    // Mayhem
    ApocalypseCoin,
    BlackHole,
    SupremeWish,
    TimeReversal,
    TheSnap,

    // Super Mayhem
    Exodia,
}

impl Card {
    /// The full catalog in pool order.
    pub const ALL: [Card; 32] = [
        Card::HealthPotion,
        Card::ManaPotion,
        Card::Whetstone,
        Card::BitterHerb,
        Card::ScrollOfSight,
        Card::SimpleBandage,
        Card::ClayAmulet,
        Card::OilFlask,
        Card::IronElixir,
        Card::BrokenStaff,
        Card::CloakOfShadows,
        Card::CrystalOrb,
        Card::BloodEssence,
        Card::ThornedShield,
        Card::ForbiddenSpellbook,
        Card::SacredRelic,
        Card::AnkhOfReincarnation,
        Card::CrownOfThorns,
        Card::ScepterOfDomination,
        Card::ChaliceOfInfinity,
        Card::Excalibur,
        Card::LichGrimoire,
        Card::EyeOfSauron,
        Card::CloakOfInvisibility,
        Card::ThorsHammer,
        Card::PhilosophersStone,
        Card::ApocalypseCoin,
        Card::BlackHole,
        Card::SupremeWish,
        Card::TimeReversal,
        Card::TheSnap,
        Card::Exodia,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::HealthPotion => "Health Potion",
            Card::ManaPotion => "Mana Potion",
            Card::Whetstone => "Whetstone",
            Card::BitterHerb => "Bitter Herb",
            Card::ScrollOfSight => "Scroll of Sight",
            Card::SimpleBandage => "Simple Bandage",
            Card::ClayAmulet => "Clay Amulet",
            Card::OilFlask => "Oil Flask",
            Card::IronElixir => "Iron Elixir",
            Card::BrokenStaff => "Broken Staff",
            Card::CloakOfShadows => "Cloak of Shadows",
            Card::CrystalOrb => "Crystal Orb",
            Card::BloodEssence => "Blood Essence",
            Card::ThornedShield => "Thorned Shield",
            Card::ForbiddenSpellbook => "Book of Forbidden Spells",
            Card::SacredRelic => "Sacred Relic",
            Card::AnkhOfReincarnation => "Ankh of Reincarnation",
            Card::CrownOfThorns => "Crown of Thorns",
            Card::ScepterOfDomination => "Scepter of Domination",
            Card::ChaliceOfInfinity => "Chalice of Infinity",
            Card::Excalibur => "Excalibur",
            Card::LichGrimoire => "Lich Grimoire",
            Card::EyeOfSauron => "Eye of Sauron",
            Card::CloakOfInvisibility => "Cloak of Invisibility",
            Card::ThorsHammer => "Thor's Hammer",
            Card::PhilosophersStone => "Philosopher's Stone",
            Card::ApocalypseCoin => "Apocalypse Coin",
            Card::BlackHole => "Black Hole",
            Card::SupremeWish => "Supreme Wish",
            Card::TimeReversal => "Time Reversal",
            Card::TheSnap => "The Snap",
            Card::Exodia => "Exodia",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Card::HealthPotion => "Heals 10 HP instantly.",
            Card::ManaPotion => "Restores 20 mana instantly.",
            Card::Whetstone => "Your next attack deals 20% more damage.",
            Card::BitterHerb => "Removes all lingering effects from you.",
            Card::ScrollOfSight => "Reveals the rarity of the opponent's next card.",
            Card::SimpleBandage => "Heals 5 HP and stops bleeding.",
            Card::ClayAmulet => "Reduces the next damage you take by 15%.",
            Card::OilFlask => "Your next attack deals 30% more damage.",
            Card::IronElixir => "Immune to class attacks for 1 turn.",
            Card::BrokenStaff => "The opponent's next class attack fails.",
            Card::CloakOfShadows => "Guaranteed dodge against the next attack.",
            Card::CrystalOrb => "Swaps your lowest-rarity card for a new one.",
            Card::BloodEssence => "Drains 5 HP from the opponent.",
            Card::ThornedShield => "Attackers take 5 damage when they hit you.",
            Card::ForbiddenSpellbook => "Halves the opponent's HP (once per target).",
            Card::SacredRelic => "Revive with 20% HP if you die.",
            Card::AnkhOfReincarnation => "Discards your hand and deals you 3 Epic cards.",
            Card::CrownOfThorns => "The opponent takes 5 damage on every hit they land.",
            Card::ScepterOfDomination => "The opponent cannot use cards for 2 turns.",
            Card::ChaliceOfInfinity => "Full heal, but your damage is halved for the rest of the battle.",
            Card::Excalibur => "Your next attack deals double damage.",
            Card::LichGrimoire => "Summons a minion that strikes the opponent for 3 turns.",
            Card::EyeOfSauron => "Discards the opponent's first card.",
            Card::CloakOfInvisibility => "Invulnerable for 2 turns, but you cannot attack.",
            Card::ThorsHammer => "Deals 40 damage and stuns the opponent.",
            Card::PhilosophersStone => "Turns a Common card in your hand into a Mayhem card.",
            Card::ApocalypseCoin => "Both fighters drop to 1 HP. A coin decides who acts next.",
            Card::BlackHole => "Destroys every card in play. No more cards for anyone.",
            Card::SupremeWish => "Heals 50 HP when you are low, otherwise deals 40 damage.",
            Card::TimeReversal => "Turns back time by 3 turns.",
            Card::TheSnap => "Halves both fighters' HP and hands.",
            Card::Exodia => "Wins the battle instantly.",
        }
    }

    #[must_use]
    pub const fn rarity(self) -> Rarity {
        match self {
            Card::HealthPotion
            | Card::ManaPotion
            | Card::Whetstone
            | Card::BitterHerb
            | Card::ScrollOfSight
            | Card::SimpleBandage
            | Card::ClayAmulet
            | Card::OilFlask => Rarity::Common,

            Card::IronElixir
            | Card::BrokenStaff
            | Card::CloakOfShadows
            | Card::CrystalOrb
            | Card::BloodEssence
            | Card::ThornedShield => Rarity::Rare,

            Card::ForbiddenSpellbook
            | Card::SacredRelic
            | Card::AnkhOfReincarnation
            | Card::CrownOfThorns
            | Card::ScepterOfDomination => Rarity::Epic,

            Card::ChaliceOfInfinity
            | Card::Excalibur
            | Card::LichGrimoire
            | Card::EyeOfSauron
            | Card::CloakOfInvisibility
            | Card::ThorsHammer
            | Card::PhilosophersStone => Rarity::Legendary,

            Card::ApocalypseCoin
            | Card::BlackHole
            | Card::SupremeWish
            | Card::TimeReversal
            | Card::TheSnap => Rarity::Mayhem,

            Card::Exodia => Rarity::SuperMayhem,
        }
    }

    /// Mayhem-tier cards may be played once per battle per holder.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self.rarity(), Rarity::Mayhem | Rarity::SuperMayhem)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_catalog_is_complete_and_distinct() {
        let names: FxHashSet<&str> = Card::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Card::ALL.len());
    }

    #[test]
    fn test_pool_sizes() {
        let count = |rarity: Rarity| Card::ALL.iter().filter(|c| c.rarity() == rarity).count();
        assert_eq!(count(Rarity::Common), 8);
        assert_eq!(count(Rarity::Uncommon), 0);
        assert_eq!(count(Rarity::Rare), 6);
        assert_eq!(count(Rarity::Epic), 5);
        assert_eq!(count(Rarity::Legendary), 7);
        assert_eq!(count(Rarity::Mayhem), 5);
        assert_eq!(count(Rarity::SuperMayhem), 1);
    }

    #[test]
    fn test_unique_flag_follows_rarity() {
        assert!(Card::TimeReversal.is_unique());
        assert!(Card::Exodia.is_unique());
        assert!(!Card::ThorsHammer.is_unique());
        assert!(!Card::HealthPotion.is_unique());
    }
}
