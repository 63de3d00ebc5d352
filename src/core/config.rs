//! Battle configuration.

use serde::{Deserialize, Serialize};

/// Tunable battle-session parameters.
///
/// Rules constants that define the game itself (hand capacity, mana regen,
/// class stats) live next to the code that uses them; this only covers
/// knobs a host may reasonably want to change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Seed for the arena RNG.
    /// Same seed and same calls produce the same battle.
    pub seed: u64,

    /// Number of turn snapshots kept for rewind.
    pub history_capacity: usize,

    /// How many turns the Time Reversal card rewinds.
    pub rewind_turns: usize,

    /// Turn-counter ceiling for automated battles.
    pub turn_cap: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            history_capacity: 5,
            rewind_turns: 3,
            turn_cap: 100,
        }
    }
}

impl BattleConfig {
    /// Use a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a custom history capacity (minimum 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Use a custom rewind offset for the Time Reversal card.
    pub fn with_rewind_turns(mut self, turns: usize) -> Self {
        self.rewind_turns = turns;
        self
    }

    /// Use a custom auto-battle turn cap.
    pub fn with_turn_cap(mut self, cap: u32) -> Self {
        self.turn_cap = cap;
        self
    }
}
