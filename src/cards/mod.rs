//! Cards: rarity tiers, the catalog, effect resolution and the factory.
//!
//! ## Key Types
//!
//! - `Rarity`: seven power tiers and the weighted draw cascade
//! - `Card`: closed catalog of 32 consumable cards
//! - `CardOutcome` / `SessionEffect`: what playing a card produced
//! - `CardFactory`: rarity-weighted random generation
//!
//! ## Session effects
//!
//! Cards only ever touch the two fighters passed to them. Anything that
//! needs the battle itself (who acts next, rewinding, drawing new cards) is
//! reported back as a `SessionEffect` and handled by the arena.

pub mod card;
pub mod factory;
pub mod rarity;
pub mod resolve;

pub use card::Card;
pub use factory::CardFactory;
pub use rarity::Rarity;
pub use resolve::{CardOutcome, SessionEffect};
