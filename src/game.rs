//! Game session
//!
//! Owns everything one game needs: state, catalogs, rules, the seeded RNG
//! and the narration log. Front ends drive the game through this type; the
//! engine functions stay usable on their own for tests and tools.

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{Catalogs, Technology};
use crate::core::config::RulesConfig;
use crate::core::error::{DeepStateError, Result};
use crate::core::types::Agency;
use crate::engine::log::{LogSink, TurnLog};
use crate::engine::player::{
    available_technologies, perform_player_operation, recruit_player_agent, research_player_technology,
    OperationAttempt,
};
use crate::engine::research::ResearchAttempt;
use crate::engine::turn::{end_turn, TurnOutcome};
use crate::state::save::{load_game, save_game};
use crate::state::GameState;

pub struct Game {
    state: GameState,
    catalogs: Catalogs,
    rules: RulesConfig,
    rng: ChaCha8Rng,
    log: TurnLog,
    outcome: Option<TurnOutcome>,
}

impl Game {
    /// Start a new game as `player`
    pub fn new(player: Agency, catalogs: Catalogs, rules: RulesConfig, seed: u64) -> Result<Self> {
        rules.validate()?;
        let state = GameState::new(player, &catalogs, &rules);
        let mut log = TurnLog::new(state.turn);
        log.record(format!("Game started as {}.", player));
        tracing::info!(agency = %player, seed, "new game");

        Ok(Self {
            state,
            catalogs,
            rules,
            rng: ChaCha8Rng::seed_from_u64(seed),
            log,
            outcome: None,
        })
    }

    /// Resume a saved game. The RNG is reseeded from `seed`.
    pub fn load(path: &Path, catalogs: Catalogs, rules: RulesConfig, seed: u64) -> Result<Self> {
        rules.validate()?;
        let state = load_game(path)?;
        let mut log = TurnLog::new(state.turn);
        log.record(format!("Game loaded at turn {} as {}.", state.turn, state.player));

        Ok(Self {
            state,
            catalogs,
            rules,
            rng: ChaCha8Rng::seed_from_u64(seed),
            log,
            outcome: None,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_game(&self.state, path)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    /// Final outcome once the game has been won or lost
    pub fn outcome(&self) -> Option<TurnOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_over() {
            Err(DeepStateError::GameOver)
        } else {
            Ok(())
        }
    }

    pub fn perform_operation(&mut self, operation: &str, country: &str) -> Result<OperationAttempt> {
        self.ensure_running()?;
        perform_player_operation(
            &mut self.state,
            &self.catalogs.player_operations,
            operation,
            country,
            &mut self.rng,
            &mut self.log,
        )
    }

    pub fn recruit_agent(&mut self) -> Result<bool> {
        self.ensure_running()?;
        Ok(recruit_player_agent(&mut self.state, &self.rules, &mut self.log))
    }

    pub fn research(&mut self, technology: &str) -> Result<ResearchAttempt> {
        self.ensure_running()?;
        research_player_technology(&mut self.state, &self.catalogs.tech_tree, technology, &mut self.log)
    }

    pub fn available_technologies(&self) -> Vec<&Technology> {
        available_technologies(&self.state, &self.catalogs.tech_tree)
    }

    /// Close the current turn; a finished game rejects further turns
    pub fn end_turn(&mut self) -> Result<TurnOutcome> {
        self.ensure_running()?;
        let outcome = end_turn(
            &mut self.state,
            &self.catalogs,
            &self.rules,
            &mut self.rng,
            &mut self.log,
        )?;

        if outcome.is_finished() {
            self.outcome = Some(outcome);
        } else {
            self.log.set_turn(self.state.turn);
        }
        Ok(outcome)
    }
}
