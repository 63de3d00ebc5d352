//! The arena: battle sessions, turn history and the fighter roster.
//!
//! ## Key Types
//!
//! - `Arena`: the battle state machine and roster
//! - `HistoryRing` / `TurnSnapshot`: bounded snapshots for time rewind
//! - `BattleLogEntry`: append-only gameplay log
//! - `ActionResult` / `EffectCategory`: structured result of a turn action

mod battle;
pub mod history;
pub mod log;
pub mod outcome;

pub use battle::{Arena, AttackSlot, BattlePhase};
pub use history::{HistoryRing, TurnSnapshot};
pub use log::BattleLogEntry;
pub use outcome::{ActionResult, EffectCategory};
