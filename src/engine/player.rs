//! Player-initiated actions
//!
//! Same rules as the rivals, plus the per-turn agent limit. Shortfalls are
//! narrated and returned as outcomes; only bad names are errors.

use rand::Rng;

use crate::catalog::{OperationCatalog, TechTree, Technology};
use crate::core::config::RulesConfig;
use crate::core::error::Result;
use crate::engine::log::LogSink;
use crate::engine::recruitment::try_recruit;
use crate::engine::research::{research_named, ResearchAttempt};
use crate::engine::resolver::{resolve_operation, ResolutionResult};
use crate::state::GameState;

/// Result of the player launching an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationAttempt {
    Resolved(ResolutionResult),
    NoAgentsAvailable,
    InsufficientResources,
}

/// Launch a named player operation against a country
pub fn perform_player_operation<R: Rng + ?Sized>(
    state: &mut GameState,
    catalog: &OperationCatalog,
    operation_name: &str,
    country: &str,
    rng: &mut R,
    log: &mut dyn LogSink,
) -> Result<OperationAttempt> {
    let operation = catalog.require(operation_name)?;
    state.require_country_index(country)?;

    if state.agents_available() == 0 {
        log.record("All agents used this turn.".to_string());
        return Ok(OperationAttempt::NoAgentsAvailable);
    }

    if !state.player_state().can_afford(operation.budget, operation.capital) {
        log.record("Not enough budget or political capital.".to_string());
        return Ok(OperationAttempt::InsufficientResources);
    }

    let player = state.player;
    let result = resolve_operation(state, player, operation, country, rng)?;
    state.agents_used += 1;

    let verdict = if result.success {
        "Success!"
    } else {
        "Failed! Extra attention drawn."
    };
    log.record(format!(
        "Performing {} in {}... {} Visibility +{}, now {}%.",
        operation.name,
        country,
        verdict,
        result.visibility_delta,
        state.visibility_of(player)
    ));

    Ok(OperationAttempt::Resolved(result))
}

/// Buy one agent for the player
pub fn recruit_player_agent(state: &mut GameState, rules: &RulesConfig, log: &mut dyn LogSink) -> bool {
    let player = state.player;
    let recruited = try_recruit(state, player, rules);
    if recruited {
        log.record("You have recruited a new agent!".to_string());
    } else {
        log.record("Not enough budget or political capital to recruit an agent.".to_string());
    }
    recruited
}

/// Research a named technology for the player
pub fn research_player_technology(
    state: &mut GameState,
    tree: &TechTree,
    name: &str,
    log: &mut dyn LogSink,
) -> Result<ResearchAttempt> {
    let player = state.player;
    let attempt = research_named(state, player, tree, name)?;
    match &attempt {
        ResearchAttempt::Researched(outcome) => log.record(format!(
            "{} researched! Visibility -{}, from {}% to {}%.",
            outcome.technology,
            outcome.old_visibility - outcome.new_visibility,
            outcome.old_visibility,
            outcome.new_visibility
        )),
        ResearchAttempt::InsufficientResearchPoints { .. } => {
            log.record("Not enough research points.".to_string())
        }
    }
    Ok(attempt)
}

/// Technologies the player has not researched yet, in tree order
pub fn available_technologies<'a>(state: &GameState, tree: &'a TechTree) -> Vec<&'a Technology> {
    let player = state.player_state();
    tree.unresearched(&player.researched_techs).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalogs, OperationDef};
    use crate::core::error::DeepStateError;
    use crate::core::types::Agency;
    use rand::rngs::mock::StepRng;

    fn setup() -> (GameState, Catalogs, RulesConfig) {
        let catalogs = Catalogs::builtin().unwrap();
        let rules = RulesConfig::default();
        let state = GameState::new(Agency::Cia, &catalogs, &rules);
        (state, catalogs, rules)
    }

    fn sure_thing() -> OperationCatalog {
        OperationCatalog::new(vec![OperationDef {
            name: "Sure Thing".into(),
            budget: 75,
            capital: 10,
            success_chance: 1.0,
            influence_gain: 5,
            rival_influence_loss: 2,
            populism_change: 0,
            stability_change: 0,
            visibility_increase: None,
        }])
        .unwrap()
    }

    #[test]
    fn test_successful_operation_end_to_end() {
        let (mut state, _, _) = setup();
        {
            let player = state.player_state_mut();
            player.budget = 100;
            player.political_capital = 20;
        }
        let germany_before = state.country("Germany").unwrap().clone();
        let mut rng = StepRng::new(0, 0);
        let mut log = Vec::new();

        let attempt =
            perform_player_operation(&mut state, &sure_thing(), "Sure Thing", "Germany", &mut rng, &mut log)
                .unwrap();

        let OperationAttempt::Resolved(result) = attempt else {
            panic!("expected resolution, got {:?}", attempt);
        };
        assert!(result.success);
        assert_eq!(result.visibility_delta, 2);

        let player = state.player_state();
        assert_eq!(player.budget, 25);
        assert_eq!(player.political_capital, 10);
        assert_eq!(player.visibility, 7);
        assert_eq!(state.agents_used, 1);

        let germany = state.country("Germany").unwrap();
        assert_eq!(germany.influence_of(Agency::Cia), germany_before.influence_of(Agency::Cia) + 5);
        assert_eq!(germany.influence_of(Agency::Fsb), germany_before.influence_of(Agency::Fsb) - 2);
        assert_eq!(log, vec!["Performing Sure Thing in Germany... Success! Visibility +2, now 7%.".to_string()]);
    }

    #[test]
    fn test_agent_limit_blocks_second_operation() {
        let (mut state, _, _) = setup();
        state.player_state_mut().budget = 1000;
        let mut rng = StepRng::new(0, 0);
        let mut log = Vec::new();
        let catalog = sure_thing();

        perform_player_operation(&mut state, &catalog, "Sure Thing", "Japan", &mut rng, &mut log).unwrap();
        let before = state.clone();
        let attempt =
            perform_player_operation(&mut state, &catalog, "Sure Thing", "Japan", &mut rng, &mut log).unwrap();

        assert_eq!(attempt, OperationAttempt::NoAgentsAvailable);
        assert_eq!(state, before);
        assert_eq!(log.last().unwrap(), "All agents used this turn.");
    }

    #[test]
    fn test_unaffordable_operation_changes_nothing() {
        let (mut state, _, _) = setup();
        state.player_state_mut().political_capital = 9;
        let before = state.clone();
        let mut rng = StepRng::new(0, 0);
        let mut log = Vec::new();

        let attempt =
            perform_player_operation(&mut state, &sure_thing(), "Sure Thing", "Japan", &mut rng, &mut log).unwrap();
        assert_eq!(attempt, OperationAttempt::InsufficientResources);
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let (mut state, catalogs, _) = setup();
        let mut rng = StepRng::new(0, 0);
        let mut log = Vec::new();

        assert!(matches!(
            perform_player_operation(&mut state, &catalogs.player_operations, "Cyber Warfare", "Atlantis", &mut rng, &mut log),
            Err(DeepStateError::UnknownCountry(_))
        ));
        assert!(matches!(
            perform_player_operation(&mut state, &catalogs.player_operations, "Mind Control", "Japan", &mut rng, &mut log),
            Err(DeepStateError::UnknownOperation(_))
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn test_failure_narration() {
        let (mut state, catalogs, _) = setup();
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut log = Vec::new();

        let attempt = perform_player_operation(
            &mut state,
            &catalogs.player_operations,
            "Cyber Warfare",
            "Brazil",
            &mut rng,
            &mut log,
        )
        .unwrap();
        assert!(matches!(attempt, OperationAttempt::Resolved(ref r) if !r.success));
        assert_eq!(state.player_state().visibility, 11);
        assert_eq!(
            log[0],
            "Performing Cyber Warfare in Brazil... Failed! Extra attention drawn. Visibility +6, now 11%."
        );
    }

    #[test]
    fn test_recruit_messages() {
        let (mut state, _, rules) = setup();
        let mut log = Vec::new();
        assert!(recruit_player_agent(&mut state, &rules, &mut log));
        assert!(!recruit_player_agent(&mut state, &rules, &mut log));
        assert_eq!(state.player_state().agents, 2);
        assert_eq!(
            log,
            vec![
                "You have recruited a new agent!".to_string(),
                "Not enough budget or political capital to recruit an agent.".to_string(),
            ]
        );
    }

    #[test]
    fn test_research_and_available_list() {
        let (mut state, catalogs, _) = setup();
        let tree = &catalogs.tech_tree;
        let mut log = Vec::new();
        assert_eq!(available_technologies(&state, tree).len(), tree.len());

        let attempt = research_player_technology(&mut state, tree, "Encrypted Communications", &mut log).unwrap();
        assert!(matches!(attempt, ResearchAttempt::InsufficientResearchPoints { cost: 10, available: 0 }));
        assert_eq!(log[0], "Not enough research points.");

        state.player_state_mut().research_points = 10;
        research_player_technology(&mut state, tree, "Encrypted Communications", &mut log).unwrap();
        assert_eq!(log[1], "Encrypted Communications researched! Visibility -5, from 5% to 0%.");

        let remaining = available_technologies(&state, tree);
        assert_eq!(remaining.len(), tree.len() - 1);
        assert_eq!(remaining[0].name, "Forged Identities");
    }
}
