//! The battle state machine.
//!
//! ## Phases
//!
//! `Idle -> Active -> Finished`. Only an active battle accepts turn
//! operations; anything else returns an informational message.
//!
//! ## Turn flow
//!
//! ```text
//! begin_turn     turn += 1, snapshot, active fighter's start_turn,
//!                stunned: pass priority; otherwise check victory, refill hand
//! execute_attack class action, log, check victory, pass priority
//! use_card       play card, log, arbitrate session effect,
//!                check victory, pass priority
//! ```
//!
//! Errors from the fighters never escape a turn operation: they become a
//! log entry and an unresolved [`ActionResult`], and priority stays put.
//!
//! ## Determinism
//!
//! The arena owns the only [`GameRng`]. Card draws, critical hits, coin
//! flips and policy choices all consume it in call order.

use serde::{Deserialize, Serialize};

use super::history::{HistoryRing, TurnSnapshot};
use super::log::BattleLogEntry;
use super::outcome::ActionResult;
use crate::ai::{BattleAction, BattlePolicy, RandomAttacker};
use crate::cards::{Card, CardFactory, Rarity, SessionEffect};
use crate::core::{BattleConfig, BattleError, GameRng, GameRngState, Pair, Result, Side};
use crate::fighters::{Character, TurnStart, INVENTORY_CAPACITY};

/// Which class action to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackSlot {
    Primary,
    Secondary,
}

impl AttackSlot {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            AttackSlot::Primary => AttackSlot::Secondary,
            AttackSlot::Secondary => AttackSlot::Primary,
        }
    }
}

/// Battle lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    Idle,
    Active,
    Finished,
}

const INACTIVE: &str = "The battle is not active!";

/// A battle session between two fighters, plus the roster they are picked
/// from.
#[derive(Clone, Debug)]
pub struct Arena {
    config: BattleConfig,
    rng: GameRng,
    factory: CardFactory,
    roster: Vec<Character>,
    combatants: Option<Pair<Character>>,
    phase: BattlePhase,
    turn: u32,
    active: Side,
    winner: Option<Side>,
    log: Vec<BattleLogEntry>,
    history: HistoryRing<TurnSnapshot>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

impl Arena {
    #[must_use]
    pub fn new(config: BattleConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            history: HistoryRing::new(config.history_capacity),
            config,
            factory: CardFactory::new(),
            roster: Vec::new(),
            combatants: None,
            phase: BattlePhase::Idle,
            turn: 0,
            active: Side::One,
            winner: None,
            log: Vec::new(),
        }
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == BattlePhase::Active
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn winner_fighter(&self) -> Option<&Character> {
        self.winner.and_then(|side| self.combatant(side))
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> Option<&Character> {
        self.combatants.as_ref().map(|pair| &pair[side])
    }

    /// Mutable access for scenario setup. Turn operations are the only
    /// intended way to change a fighter during play.
    pub fn combatant_mut(&mut self, side: Side) -> Option<&mut Character> {
        self.combatants.as_mut().map(|pair| &mut pair[side])
    }

    #[must_use]
    pub fn active_fighter(&self) -> Option<&Character> {
        self.combatant(self.active)
    }

    #[must_use]
    pub fn opponent(&self) -> Option<&Character> {
        self.combatant(self.active.opponent())
    }

    #[must_use]
    pub fn log(&self) -> &[BattleLogEntry] {
        &self.log
    }

    #[must_use]
    pub fn history(&self) -> &HistoryRing<TurnSnapshot> {
        &self.history
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue from a previously captured RNG position. Used to replay a
    /// battle from a saved turn.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
        tracing::debug!(seed = state.seed, "rng restored");
    }

    // =========================================================================
    // Roster
    // =========================================================================

    pub fn register_fighter(&mut self, fighter: Character) {
        self.roster.push(fighter);
    }

    #[must_use]
    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    /// Case-insensitive exact name lookup.
    pub fn find_fighter(&self, name: &str) -> Result<&Character> {
        let wanted = name.to_lowercase();
        self.roster
            .iter()
            .find(|fighter| fighter.name().to_lowercase() == wanted)
            .ok_or_else(|| BattleError::FighterNotFound(name.to_string()))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start a new battle. Both fighters are reset and dealt a fresh hand;
    /// all battle-scoped state is cleared.
    pub fn start_battle(&mut self, mut one: Character, mut two: Character) {
        one.reset();
        two.reset();

        for fighter in [&mut one, &mut two] {
            for card in self.factory.draw_many(INVENTORY_CAPACITY, &mut self.rng) {
                if fighter.add_item(card).is_err() {
                    break;
                }
            }
        }

        tracing::info!(one = one.name(), two = two.name(), "battle started");
        let announce = format!("Battle started: {} vs {}!", one.name(), two.name());

        self.combatants = Some(Pair::new(one, two));
        self.phase = BattlePhase::Active;
        self.turn = 0;
        self.active = Side::One;
        self.winner = None;
        self.log.clear();
        self.history.clear();
        self.record(announce);
    }

    /// Open the active fighter's turn.
    pub fn begin_turn(&mut self) -> TurnStart {
        if !self.is_active() {
            return TurnStart {
                lost_turn: false,
                messages: vec![INACTIVE.to_string()],
            };
        }
        let Some(pair) = self.combatants.as_mut() else {
            return TurnStart::default();
        };

        self.turn += 1;
        self.history.push(TurnSnapshot {
            turn: self.turn,
            states: pair.map(Character::snapshot),
        });

        let side = self.active;
        let (actor, rival) = pair.split_mut(side);
        let start = actor.start_turn(rival);
        tracing::debug!(turn = self.turn, fighter = actor.name(), lost = start.lost_turn, "turn begins");

        if !start.lost_turn {
            while actor.inventory().len() < INVENTORY_CAPACITY {
                let card = self.factory.draw_random(&mut self.rng);
                if actor.add_item(card).is_err() {
                    break;
                }
            }
        }

        for message in &start.messages {
            self.record(message.clone());
        }

        if start.lost_turn {
            self.pass_priority();
        } else {
            self.check_victory();
        }
        start
    }

    /// Perform the active fighter's primary or secondary class action.
    pub fn execute_attack(&mut self, slot: AttackSlot) -> ActionResult {
        if !self.is_active() {
            return ActionResult::rejected(INACTIVE);
        }
        let Some(pair) = self.combatants.as_mut() else {
            return ActionResult::rejected(INACTIVE);
        };

        let (actor, target) = pair.split_mut(self.active);
        let attempt = actor.ensure_alive().and_then(|()| {
            if !actor.can_attack() {
                return Ok(None);
            }
            let result = match slot {
                AttackSlot::Primary => actor.primary(target, &mut self.rng),
                AttackSlot::Secondary => actor.secondary(target, &mut self.rng),
            };
            result.map(Some)
        });

        match attempt {
            Ok(Some(result)) => {
                tracing::debug!(?slot, damage = result.damage, blocked = result.blocked, "attack");
                self.record(result.message.clone());
                self.check_victory();
                self.pass_priority();
                ActionResult::resolved(result.message, result.damage)
            }
            Ok(None) => {
                let message = format!("{} cannot attack right now!", actor.name());
                self.reject(message)
            }
            Err(err) => self.reject(err.to_string()),
        }
    }

    /// Play the card at `index` from the active fighter's hand.
    pub fn use_card(&mut self, index: usize) -> ActionResult {
        if !self.is_active() {
            return ActionResult::rejected(INACTIVE);
        }
        let Some(pair) = self.combatants.as_mut() else {
            return ActionResult::rejected(INACTIVE);
        };

        let side = self.active;
        let (user, target) = pair.split_mut(side);
        let before = target.health();
        let outcome = match user.use_item(index, Some(&mut *target), &mut self.rng) {
            Ok(outcome) => outcome,
            Err(err) => return self.reject(err.to_string()),
        };
        let damage = before.saturating_sub(target.health());

        tracing::debug!(fighter = user.name(), session = ?outcome.session, "card played");
        self.record(outcome.message.clone());

        let keep_priority = match outcome.session {
            Some(effect) => self.arbitrate(side, effect),
            None => false,
        };

        self.check_victory();
        if !keep_priority {
            self.pass_priority();
        }
        ActionResult::resolved(outcome.message, damage)
    }

    /// Run one action, trying the fallback if the first is rejected.
    pub fn perform(&mut self, action: BattleAction) -> ActionResult {
        match action {
            BattleAction::Attack(slot) => self.execute_attack(slot),
            BattleAction::UseCard(index) => self.use_card(index),
        }
    }

    /// Open a turn and let `policy` act for the active fighter.
    ///
    /// A lost turn ends the call without an action.
    pub fn play_turn(&mut self, policy: &dyn BattlePolicy) -> Vec<String> {
        let start = self.begin_turn();
        let mut messages = start.messages;
        if start.lost_turn || !self.is_active() {
            return messages;
        }

        let Some(pair) = self.combatants.as_ref() else {
            return messages;
        };
        let plan = policy.plan(
            &pair[self.active],
            &pair[self.active.opponent()],
            &mut self.rng,
        );

        let mut result = self.perform(plan.action);
        if !result.resolved {
            if let Some(fallback) = plan.fallback {
                messages.push(result.message);
                result = self.perform(fallback);
            }
        }
        messages.push(result.message);
        messages
    }

    /// Restore both fighters to the snapshot `turns_back` entries from the
    /// end of the history. Returns false when there is nothing to restore.
    pub fn rewind(&mut self, turns_back: usize) -> bool {
        let index = self.history.len().saturating_sub(turns_back);
        let Some(snapshot) = self.history.get(index).cloned() else {
            return false;
        };
        let Some(pair) = self.combatants.as_mut() else {
            return false;
        };

        for (side, fighter) in pair.iter_mut() {
            fighter.restore(&snapshot.states[side]);
        }
        self.turn = snapshot.turn;
        self.history.truncate(index);

        tracing::info!(turn = self.turn, "time rewound");
        self.record(format!("Time was turned back to turn {}!", snapshot.turn));
        true
    }

    /// Fight two registered fighters to the end with random class actions.
    pub fn run_auto_battle(&mut self, first: &str, second: &str) -> Result<Vec<String>> {
        self.run_battle_with(first, second, &RandomAttacker, &RandomAttacker)
    }

    /// Fight two registered fighters to the end, one policy per side.
    ///
    /// Stops when a winner is decided or the turn counter reaches the
    /// configured cap.
    pub fn run_battle_with(
        &mut self,
        first: &str,
        second: &str,
        one: &dyn BattlePolicy,
        two: &dyn BattlePolicy,
    ) -> Result<Vec<String>> {
        let fighter_one = self.find_fighter(first)?.clone();
        let fighter_two = self.find_fighter(second)?.clone();

        let mut lines = vec![format!(
            "=== BATTLE: {} vs {} ===",
            fighter_one.name(),
            fighter_two.name()
        )];
        self.start_battle(fighter_one, fighter_two);

        while self.is_active() && self.turn < self.config.turn_cap {
            let policy = match self.active {
                Side::One => one,
                Side::Two => two,
            };
            lines.extend(self.play_turn(policy));
        }

        if let Some(winner) = self.winner_fighter() {
            lines.push(format!("=== WINNER: {} ===", winner.name()));
        }
        Ok(lines)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn pass_priority(&mut self) {
        if self.is_active() {
            self.active = self.active.opponent();
        }
    }

    fn reject(&mut self, message: String) -> ActionResult {
        tracing::warn!(turn = self.turn, %message, "action rejected");
        self.record(message.clone());
        ActionResult::rejected(message)
    }

    fn record(&mut self, action: impl Into<String>) {
        let (health, mana) = match &self.combatants {
            Some(pair) => (pair.map(Character::health), pair.map(Character::mana)),
            None => (Pair::new(0, 0), Pair::new(0, 0)),
        };
        self.log.push(BattleLogEntry {
            turn: self.turn,
            action: action.into(),
            health,
            mana,
        });
    }

    /// First side found dead loses; Side One is checked first.
    fn check_victory(&mut self) {
        let Some(pair) = self.combatants.as_ref() else {
            return;
        };
        let loser = Side::BOTH.into_iter().find(|side| !pair[*side].is_alive());
        if let Some(loser) = loser {
            let winner = loser.opponent();
            let name = pair[winner].name().to_string();
            self.winner = Some(winner);
            self.phase = BattlePhase::Finished;
            tracing::info!(winner = %name, turn = self.turn, "battle won");
            self.record(format!("{name} won the battle!"));
        }
    }

    /// Apply a card's battle-level follow-up. Returns true if `side` keeps
    /// priority.
    fn arbitrate(&mut self, side: Side, effect: SessionEffect) -> bool {
        tracing::debug!(?effect, "arbitrating card effect");
        match effect {
            SessionEffect::CoinFlip { user_won } => user_won,
            SessionEffect::Rewind => {
                let turns = self.config.rewind_turns;
                if !self.rewind(turns) {
                    self.record("There is no past to return to.");
                }
                false
            }
            SessionEffect::Transmute => {
                let message = self.transmute(side);
                self.record(message);
                false
            }
            SessionEffect::SwapLowest => {
                let message = self.swap_lowest(side);
                self.record(message);
                false
            }
            SessionEffect::RefillEpic { count } => {
                let message = self.refill_epic(side, count);
                self.record(message);
                false
            }
        }
    }

    fn transmute(&mut self, side: Side) -> String {
        let Some(pair) = self.combatants.as_mut() else {
            return String::new();
        };
        let fighter = &mut pair[side];
        let slot = fighter
            .inventory()
            .iter()
            .position(|card| card.rarity() <= Rarity::Uncommon);

        match slot {
            Some(index) => {
                let new_card = self.factory.draw_mayhem(&mut self.rng);
                match fighter.replace_item(index, new_card) {
                    Ok(old) => format!(
                        "{}'s {} was transmuted into {}!",
                        fighter.name(),
                        old.name(),
                        new_card.name()
                    ),
                    Err(err) => err.to_string(),
                }
            }
            None => format!("{} had no Common card to transmute.", fighter.name()),
        }
    }

    fn swap_lowest(&mut self, side: Side) -> String {
        let Some(pair) = self.combatants.as_mut() else {
            return String::new();
        };
        let fighter = &mut pair[side];
        let lowest = fighter
            .inventory()
            .iter()
            .enumerate()
            .min_by_key(|(index, card)| (card.rarity(), *index))
            .map(|(index, _)| index);

        match lowest {
            Some(index) => {
                let new_card = self.factory.draw_random(&mut self.rng);
                match fighter.replace_item(index, new_card) {
                    Ok(old) => format!(
                        "{} swapped {} for {}!",
                        fighter.name(),
                        old.name(),
                        new_card.name()
                    ),
                    Err(err) => err.to_string(),
                }
            }
            None => format!("{} had no card to swap.", fighter.name()),
        }
    }

    fn refill_epic(&mut self, side: Side, count: usize) -> String {
        let Some(pair) = self.combatants.as_mut() else {
            return String::new();
        };
        let fighter = &mut pair[side];
        let mut dealt: Vec<Card> = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self.factory.draw_epic(&mut self.rng);
            if fighter.add_item(card).is_err() {
                break;
            }
            dealt.push(card);
        }
        let names: Vec<&str> = dealt.iter().map(|card| card.name()).collect();
        format!("{} received: {}.", fighter.name(), names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Arena {
        let mut arena = Arena::default();
        arena.start_battle(Character::warrior("Thorin"), Character::mage("Gandalf"));
        arena
    }

    fn fighter(arena: &mut Arena, side: Side) -> &mut Character {
        arena.combatant_mut(side).unwrap()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    #[test]
    fn test_idle_arena_rejects_turns() {
        let mut arena = Arena::default();
        assert_eq!(arena.phase(), BattlePhase::Idle);
        assert_eq!(arena.begin_turn().messages, vec![INACTIVE.to_string()]);
        assert!(!arena.execute_attack(AttackSlot::Primary).resolved);
        assert!(!arena.use_card(0).resolved);
        assert!(!arena.rewind(3));
    }

    #[test]
    fn test_start_battle_deals_hands() {
        let arena = started();
        assert!(arena.is_active());
        assert_eq!(arena.turn(), 0);
        assert_eq!(arena.active_side(), Side::One);
        for side in Side::BOTH {
            assert_eq!(arena.combatant(side).unwrap().inventory().len(), 4);
        }
        assert_eq!(arena.log().len(), 1);
        assert!(arena.history().is_empty());
    }

    #[test]
    fn test_begin_turn_snapshots_and_counts() {
        let mut arena = started();
        arena.begin_turn();
        assert_eq!(arena.turn(), 1);
        assert_eq!(arena.history().len(), 1);
        assert_eq!(arena.history().get(0).unwrap().turn, 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut arena = started();
        for _ in 0..8 {
            arena.begin_turn();
            arena.execute_attack(AttackSlot::Primary);
        }
        assert_eq!(arena.history().len(), 5);
        assert_eq!(arena.history().get(0).unwrap().turn, 4);
    }

    // =========================================================================
    // Attacks
    // =========================================================================

    #[test]
    fn test_attack_passes_priority() {
        let mut arena = started();
        arena.begin_turn();
        let result = arena.execute_attack(AttackSlot::Primary);
        assert!(result.resolved);
        assert_eq!(result.damage, 18);
        assert_eq!(arena.active_side(), Side::Two);
    }

    #[test]
    fn test_insufficient_mana_keeps_priority() {
        let mut arena = started();
        arena.begin_turn();
        arena.execute_attack(AttackSlot::Primary);

        fighter(&mut arena, Side::Two).set_mana(0);
        let result = arena.execute_attack(AttackSlot::Secondary);
        assert!(!result.resolved);
        assert!(result.message.contains("enough mana"));
        assert_eq!(arena.active_side(), Side::Two);
        assert_eq!(arena.log().last().unwrap().action, result.message);
    }

    #[test]
    fn test_attack_block_is_a_message() {
        let mut arena = started();
        fighter(&mut arena, Side::One).set_attack_block(2);
        let result = arena.execute_attack(AttackSlot::Primary);
        assert!(!result.resolved);
        assert!(result.message.contains("cannot attack"));
        assert_eq!(arena.active_side(), Side::One);
    }

    #[test]
    fn test_stunned_turn_passes_priority() {
        let mut arena = started();
        fighter(&mut arena, Side::One).set_stunned(true);
        let start = arena.begin_turn();
        assert!(start.lost_turn);
        assert_eq!(arena.active_side(), Side::Two);
    }

    #[test]
    fn test_victory_freezes_priority() {
        let mut arena = started();
        fighter(&mut arena, Side::Two).set_health(10);
        arena.execute_attack(AttackSlot::Primary);
        assert_eq!(arena.phase(), BattlePhase::Finished);
        assert_eq!(arena.winner(), Some(Side::One));
        assert_eq!(arena.active_side(), Side::One);
        assert!(arena.log().last().unwrap().action.contains("Thorin won"));
    }

    // =========================================================================
    // Cards and arbitration
    // =========================================================================

    fn hand(arena: &mut Arena, side: Side, cards: &[Card]) {
        let fighter = fighter(arena, side);
        fighter.clear_inventory();
        for card in cards {
            fighter.add_item(*card).unwrap();
        }
    }

    #[test]
    fn test_use_card_reports_damage() {
        let mut arena = started();
        hand(&mut arena, Side::One, &[Card::BloodEssence]);
        let result = arena.use_card(0);
        assert!(result.resolved);
        assert_eq!(result.damage, 5);
        assert_eq!(arena.active_side(), Side::Two);
    }

    #[test]
    fn test_invalid_card_index_keeps_priority() {
        let mut arena = started();
        let result = arena.use_card(9);
        assert!(!result.resolved);
        assert_eq!(arena.active_side(), Side::One);
    }

    #[test]
    fn test_transmute_replaces_first_common_in_place() {
        let mut arena = started();
        hand(
            &mut arena,
            Side::One,
            &[Card::PhilosophersStone, Card::Excalibur, Card::HealthPotion, Card::ManaPotion],
        );
        arena.use_card(0);

        let inventory = arena.combatant(Side::One).unwrap().inventory().to_vec();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory[0], Card::Excalibur);
        assert_eq!(inventory[1].rarity(), Rarity::Mayhem);
        assert_eq!(inventory[2], Card::ManaPotion);
    }

    #[test]
    fn test_ankh_deals_three_epics() {
        let mut arena = started();
        hand(&mut arena, Side::One, &[Card::AnkhOfReincarnation, Card::HealthPotion]);
        arena.use_card(0);

        let inventory = arena.combatant(Side::One).unwrap().inventory().to_vec();
        assert_eq!(inventory.len(), 3);
        assert!(inventory.iter().all(|card| card.rarity() == Rarity::Epic));
    }

    #[test]
    fn test_crystal_orb_swaps_lowest() {
        let mut arena = started();
        hand(
            &mut arena,
            Side::One,
            &[Card::CrystalOrb, Card::Excalibur, Card::IronElixir],
        );
        arena.use_card(0);

        let inventory = arena.combatant(Side::One).unwrap().inventory().to_vec();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0], Card::Excalibur);
    }

    #[test]
    fn test_coin_flip_priority() {
        for seed in 0..20 {
            let mut arena = Arena::new(BattleConfig::default().with_seed(seed));
            arena.start_battle(Character::warrior("Thorin"), Character::mage("Gandalf"));
            hand(&mut arena, Side::One, &[Card::ApocalypseCoin]);
            let result = arena.use_card(0);

            let user_won = result.message.contains("Thorin plays next");
            let expected = if user_won { Side::One } else { Side::Two };
            assert_eq!(arena.active_side(), expected, "seed {seed}");
        }
    }

    // =========================================================================
    // Roster
    // =========================================================================

    #[test]
    fn test_find_fighter_case_insensitive() {
        let mut arena = Arena::default();
        arena.register_fighter(Character::warrior("Thorin"));
        assert_eq!(arena.find_fighter("tHoRiN").unwrap().name(), "Thorin");
        assert_eq!(
            arena.find_fighter("Sauron").unwrap_err(),
            BattleError::FighterNotFound("Sauron".into())
        );
    }

    #[test]
    fn test_auto_battle_unknown_fighter() {
        let mut arena = Arena::default();
        arena.register_fighter(Character::warrior("Thorin"));
        assert!(matches!(
            arena.run_auto_battle("Thorin", "Nobody"),
            Err(BattleError::FighterNotFound(_))
        ));
        assert_eq!(arena.phase(), BattlePhase::Idle);
    }

    #[test]
    fn test_restore_rng_replays_rolls() {
        let mut a = Arena::new(BattleConfig::default().with_seed(1));
        let mut b = Arena::new(BattleConfig::default().with_seed(2));
        a.start_battle(Character::archer("Legolas"), Character::archer("Hawkeye"));
        b.start_battle(Character::archer("Legolas"), Character::archer("Hawkeye"));

        b.restore_rng(&a.rng_state());
        assert_eq!(a.rng_state(), b.rng_state());

        // Swift Shot crits draw from the arena RNG; hands stay full.
        for _ in 0..8 {
            a.begin_turn();
            b.begin_turn();
            let hit_a = a.execute_attack(AttackSlot::Primary);
            let hit_b = b.execute_attack(AttackSlot::Primary);
            assert_eq!(hit_a.damage, hit_b.damage);
        }
        for side in Side::BOTH {
            assert_eq!(
                a.combatant(side).map(Character::health),
                b.combatant(side).map(Character::health)
            );
        }
        assert_eq!(a.rng_state(), b.rng_state());
    }
}
