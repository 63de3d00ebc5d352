//! Structured per-action results for presentation layers.
//!
//! The [`EffectCategory`] is a coarse hint for picking an animation. It is
//! inferred from the damage number and keywords in the message and has no
//! gameplay effect.

use serde::{Deserialize, Serialize};

/// Coarse visual category of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectCategory {
    Damage,
    Buff,
    Heal,
    Neutral,
}

const HEAL_KEYWORDS: &[&str] = &["heal", "recover", "restor", "hp!", "full hp"];

const BUFF_KEYWORDS: &[&str] = &[
    "shield",
    "next attack",
    "immune",
    "invulnerable",
    "dodge",
    "damage",
    "sharpen",
    "mana flow",
    "thorn",
    "relic",
];

impl EffectCategory {
    /// Classify an action from its damage and message.
    #[must_use]
    pub fn classify(damage: u32, message: &str) -> Self {
        if damage > 0 {
            return EffectCategory::Damage;
        }

        let text = message.to_lowercase();
        if HEAL_KEYWORDS.iter().any(|k| text.contains(k)) {
            EffectCategory::Heal
        } else if BUFF_KEYWORDS.iter().any(|k| text.contains(k)) {
            EffectCategory::Buff
        } else {
            EffectCategory::Neutral
        }
    }
}

/// What an arena action returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub message: String,
    /// Health removed from the opponent.
    pub damage: u32,
    pub category: EffectCategory,
    /// False when the action was rejected and the turn did not pass.
    pub resolved: bool,
}

impl ActionResult {
    #[must_use]
    pub fn resolved(message: impl Into<String>, damage: u32) -> Self {
        let message = message.into();
        Self {
            category: EffectCategory::classify(damage, &message),
            message,
            damage,
            resolved: true,
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            damage: 0,
            category: EffectCategory::Neutral,
            resolved: false,
        }
    }
}
