//! End-of-turn orchestration

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::core::config::RulesConfig;
use crate::core::error::Result;
use crate::core::types::Turn;
use crate::engine::events::trigger_global_event;
use crate::engine::log::LogSink;
use crate::engine::rewards::award_country_rewards;
use crate::engine::rival::run_rival_turns;
use crate::engine::victory::{evaluate_victory, is_player_exposed, Victory};
use crate::state::GameState;

/// How a turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Play continues on `turn`
    Continue { turn: Turn },
    Victory(Victory),
    /// The player was exposed
    Defeat,
}

impl TurnOutcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, TurnOutcome::Continue { .. })
    }
}

/// Close the current turn.
///
/// Rivals act, one global event fires and country rewards are paid. A win
/// ends the game immediately with no further state changes; otherwise the
/// player receives income and passive visibility, and exposure is checked
/// before the next turn starts.
pub fn end_turn<R: Rng + ?Sized>(
    state: &mut GameState,
    catalogs: &Catalogs,
    rules: &RulesConfig,
    rng: &mut R,
    log: &mut dyn LogSink,
) -> Result<TurnOutcome> {
    let ending = state.turn;

    run_rival_turns(state, catalogs, rules, rng, log)?;
    trigger_global_event(state, &catalogs.events, rules, rng, log);
    award_country_rewards(state, rules, log);

    if let Some(victory) = evaluate_victory(state, rules) {
        log.record(victory.message().to_string());
        tracing::info!(turn = ending, victory = %victory, "game won");
        return Ok(TurnOutcome::Victory(victory));
    }

    state.turn += 1;
    accrue_player_income(state, rules);

    if is_player_exposed(state, rules) {
        log.record("Your agency has been exposed!".to_string());
        tracing::info!(turn = ending, "player exposed");
        return Ok(TurnOutcome::Defeat);
    }

    state.agents_used = 0;
    log.record(format!("End of Turn {}. Starting Turn {}.", ending, state.turn));
    tracing::info!(turn = state.turn, "turn started");

    Ok(TurnOutcome::Continue { turn: state.turn })
}

fn accrue_player_income(state: &mut GameState, rules: &RulesConfig) {
    let player = state.player_state_mut();
    player.budget = player.budget.saturating_add(rules.turn_budget_income);
    player.political_capital = player.political_capital.saturating_add(rules.turn_capital_income);
    player.research_points = player.research_points.saturating_add(rules.turn_research_income);
    player.raise_visibility(rules.turn_visibility_drift);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Agency;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (GameState, Catalogs, RulesConfig) {
        let catalogs = Catalogs::builtin().unwrap();
        let rules = RulesConfig::default();
        let state = GameState::new(Agency::Cia, &catalogs, &rules);
        (state, catalogs, rules)
    }

    #[test]
    fn test_turn_advances_with_income() {
        let (mut state, catalogs, rules) = setup();
        state.agents_used = 1;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut log = Vec::new();

        let outcome = end_turn(&mut state, &catalogs, &rules, &mut rng, &mut log).unwrap();

        assert_eq!(outcome, TurnOutcome::Continue { turn: 2 });
        assert_eq!(state.turn, 2);
        assert_eq!(state.agents_used, 0);
        assert_eq!(state.player_state().research_points, 3);
        assert!(state.player_state().visibility >= 6);
        assert_eq!(log.last().unwrap(), "End of Turn 1. Starting Turn 2.");
    }

    #[test]
    fn test_victory_stops_before_accrual() {
        let (mut state, catalogs, rules) = setup();
        for country in &mut state.countries {
            country.influence.insert(Agency::Cia, 200);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut log = Vec::new();

        let outcome = end_turn(&mut state, &catalogs, &rules, &mut rng, &mut log).unwrap();

        assert_eq!(outcome, TurnOutcome::Victory(Victory::GlobalDomination));
        assert!(outcome.is_finished());
        assert_eq!(state.turn, 1);
        assert_eq!(state.player_state().research_points, 0);
        assert_eq!(log.last().unwrap(), Victory::GlobalDomination.message());
    }

    #[test]
    fn test_shadow_victory_after_rival_drift() {
        let (mut state, catalogs, rules) = setup();
        for rival in [Agency::Mossad, Agency::Mss, Agency::Fsb] {
            // Drift pushes each to 98; nobody can afford research yet
            state.agency_mut(rival).visibility = 97;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut log = Vec::new();

        let outcome = end_turn(&mut state, &catalogs, &rules, &mut rng, &mut log).unwrap();
        assert_eq!(outcome, TurnOutcome::Victory(Victory::ShadowVictory));
    }

    #[test]
    fn test_exposure_after_passive_drift() {
        let (mut state, catalogs, rules) = setup();
        state.player_state_mut().visibility = 99;
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut log = Vec::new();

        let outcome = end_turn(&mut state, &catalogs, &rules, &mut rng, &mut log).unwrap();

        assert_eq!(outcome, TurnOutcome::Defeat);
        assert_eq!(state.turn, 2);
        assert_eq!(log.last().unwrap(), "Your agency has been exposed!");
    }

    #[test]
    fn test_same_seed_same_turn() {
        let (start, catalogs, rules) = setup();

        let mut runs = Vec::new();
        for _ in 0..2 {
            let mut state = start.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(1234);
            let mut log = Vec::new();
            for _ in 0..5 {
                end_turn(&mut state, &catalogs, &rules, &mut rng, &mut log).unwrap();
            }
            runs.push((state, log));
        }
        assert_eq!(runs[0], runs[1]);
    }
}
