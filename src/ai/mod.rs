//! Automated decision making for fighters.
//!
//! - `BattlePolicy`: chooses what the active fighter does this turn
//! - `RandomAttacker`: coin flip between the two class actions
//! - `CpuOpponent`: plays cards some of the time, with fallbacks
//!
//! Policies only read the fighters. They return an [`ActionPlan`] and the
//! arena executes it, trying the fallback if the first choice is rejected.

mod policy;

pub use policy::{ActionPlan, BattleAction, BattlePolicy, CpuOpponent, RandomAttacker};
