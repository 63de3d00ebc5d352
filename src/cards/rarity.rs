//! Rarity tiers and the weighted draw cascade.
//!
//! ## Cascade
//!
//! A draw rolls an integer in `0..100` and checks the tiers from rarest to
//! most common against their cumulative thresholds:
//!
//! | Tier | Threshold | Effective chance |
//! |---|---|---|
//! | SuperMayhem | 1 | 1% |
//! | Mayhem | 4 | 3% |
//! | Legendary | 20 | 16% |
//! | Epic | 30 | 10% |
//! | Rare | 50 | 20% |
//! | Common | (fallthrough) | 50% |
//!
//! Uncommon has a nominal chance but is never produced by the cascade.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Card power tier, ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mayhem,
    SuperMayhem,
}

/// Cascade thresholds, checked in order.
const CASCADE: [(Rarity, u32); 5] = [
    (Rarity::SuperMayhem, 1),
    (Rarity::Mayhem, 4),
    (Rarity::Legendary, 20),
    (Rarity::Epic, 30),
    (Rarity::Rare, 50),
];

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mayhem,
        Rarity::SuperMayhem,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mayhem => "Mayhem",
            Rarity::SuperMayhem => "Super Mayhem",
        }
    }

    /// UI color as `0xRRGGBB`.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Rarity::Common => 0x9d9d9d,
            Rarity::Uncommon => 0x1eff00,
            Rarity::Rare => 0x0070dd,
            Rarity::Epic => 0xa335ee,
            Rarity::Legendary => 0xff8000,
            Rarity::Mayhem => 0xff0040,
            Rarity::SuperMayhem => 0xffd700,
        }
    }

    /// Advertised draw chance in percent. Does not match the cascade; see
    /// [`Rarity::cascade_probability`] for the real figure.
    #[must_use]
    pub const fn nominal_chance(self) -> u32 {
        match self {
            Rarity::Common => 70,
            Rarity::Uncommon => 50,
            Rarity::Rare => 50,
            Rarity::Epic => 30,
            Rarity::Legendary => 20,
            Rarity::Mayhem => 4,
            Rarity::SuperMayhem => 1,
        }
    }

    /// Probability that [`Rarity::sample`] yields this tier.
    #[must_use]
    pub fn cascade_probability(self) -> f64 {
        let hits = (0..100).filter(|&roll| Rarity::from_roll(roll) == self).count();
        hits as f64 / 100.0
    }

    /// Map a roll in `0..100` onto a tier.
    #[must_use]
    pub fn from_roll(roll: u32) -> Self {
        CASCADE
            .iter()
            .find(|(_, threshold)| roll < *threshold)
            .map_or(Rarity::Common, |(rarity, _)| *rarity)
    }

    /// Draw a tier from the cascade.
    pub fn sample(rng: &mut GameRng) -> Self {
        Self::from_roll(rng.roll_percent())
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
