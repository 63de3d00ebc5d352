//! The append-only battle log.

use serde::{Deserialize, Serialize};

use crate::core::Pair;

/// One line of the battle log with both fighters' vitals at that moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub turn: u32,
    pub action: String,
    pub health: Pair<u32>,
    pub mana: Pair<u32>,
}

impl std::fmt::Display for BattleLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Turn {}] {}", self.turn, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_serde() {
        let entry = BattleLogEntry {
            turn: 3,
            action: "Thorin used Standard Strike".into(),
            health: Pair::new(150, 62),
            mana: Pair::new(0, 100),
        };
        assert_eq!(entry.to_string(), "[Turn 3] Thorin used Standard Strike");

        let json = serde_json::to_string(&entry).unwrap();
        let back: BattleLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
