//! Weighted random card generation.
//!
//! The factory groups the catalog into per-rarity pools once, then draws a
//! rarity from the cascade and a card uniformly from that pool. Draws are
//! with replacement: duplicates are expected.

use rustc_hash::FxHashMap;

use super::card::Card;
use super::rarity::Rarity;
use crate::core::GameRng;

/// Card generator over the full catalog.
///
/// ## Example
///
/// ```
/// use card_mayhem::cards::{CardFactory, Rarity};
/// use card_mayhem::core::GameRng;
///
/// let factory = CardFactory::new();
/// let mut rng = GameRng::new(42);
///
/// let hand = factory.draw_many(4, &mut rng);
/// assert_eq!(hand.len(), 4);
///
/// let mayhem = factory.draw_mayhem(&mut rng);
/// assert_eq!(mayhem.rarity(), Rarity::Mayhem);
/// ```
#[derive(Clone, Debug)]
pub struct CardFactory {
    pools: FxHashMap<Rarity, Vec<Card>>,
}

impl Default for CardFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFactory {
    /// Build the pools from the catalog.
    #[must_use]
    pub fn new() -> Self {
        let mut pools: FxHashMap<Rarity, Vec<Card>> = FxHashMap::default();
        for card in Card::ALL {
            pools.entry(card.rarity()).or_default().push(card);
        }
        Self { pools }
    }

    /// Cards registered for a rarity. Empty for Uncommon.
    #[must_use]
    pub fn pool(&self, rarity: Rarity) -> &[Card] {
        self.pools.get(&rarity).map_or(&[], Vec::as_slice)
    }

    /// Draw a rarity from the cascade.
    pub fn sample_rarity(&self, rng: &mut GameRng) -> Rarity {
        Rarity::sample(rng)
    }

    /// Draw uniformly from one rarity's pool.
    ///
    /// A rarity with no registered cards falls back to the Common pool.
    pub fn draw_by_rarity(&self, rarity: Rarity, rng: &mut GameRng) -> Card {
        let pool = match self.pool(rarity) {
            [] => self.pool(Rarity::Common),
            pool => pool,
        };
        rng.choose(pool).copied().unwrap_or(Card::HealthPotion)
    }

    /// Draw a rarity, then a card of that rarity.
    pub fn draw_random(&self, rng: &mut GameRng) -> Card {
        let rarity = self.sample_rarity(rng);
        self.draw_by_rarity(rarity, rng)
    }

    /// `n` independent random draws.
    pub fn draw_many(&self, n: usize, rng: &mut GameRng) -> Vec<Card> {
        (0..n).map(|_| self.draw_random(rng)).collect()
    }

    pub fn draw_epic(&self, rng: &mut GameRng) -> Card {
        self.draw_by_rarity(Rarity::Epic, rng)
    }

    pub fn draw_mayhem(&self, rng: &mut GameRng) -> Card {
        self.draw_by_rarity(Rarity::Mayhem, rng)
    }
}
