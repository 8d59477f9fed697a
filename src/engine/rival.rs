//! Rival agency decision policy
//!
//! A greedy, budget-constrained heuristic. Each rival in turn:
//! 1. drifts visibility up and earns flat research income
//! 2. if frozen (visibility at the freeze threshold) only researches and recruits
//! 3. recruits an agent when it can afford one
//! 4. picks a target country, weighted toward its own strongholds and the
//!    player's strongholds
//! 5. runs the most expensive operation it can afford
//! 6. researches at most one technology

use rand::Rng;

use crate::catalog::{Catalogs, OperationCatalog, OperationDef};
use crate::core::config::RulesConfig;
use crate::core::error::Result;
use crate::core::types::Agency;
use crate::engine::log::LogSink;
use crate::engine::recruitment::try_recruit;
use crate::engine::research::{research_best_available, ResearchOutcome};
use crate::engine::resolver::resolve_operation;
use crate::engine::weighted::WeightedTable;
use crate::state::GameState;

/// Run every rival's turn in agency order
pub fn run_rival_turns<R: Rng + ?Sized>(
    state: &mut GameState,
    catalogs: &Catalogs,
    rules: &RulesConfig,
    rng: &mut R,
    log: &mut dyn LogSink,
) -> Result<()> {
    let rivals: Vec<Agency> = state.rivals().collect();
    for rival in rivals {
        rival_turn(state, rival, catalogs, rules, rng, log)?;
    }
    Ok(())
}

/// One rival's full decision sequence
pub fn rival_turn<R: Rng + ?Sized>(
    state: &mut GameState,
    rival: Agency,
    catalogs: &Catalogs,
    rules: &RulesConfig,
    rng: &mut R,
    log: &mut dyn LogSink,
) -> Result<()> {
    {
        let resources = state.agency_mut(rival);
        resources.raise_visibility(rules.rival_visibility_drift);
        resources.research_points = resources.research_points.saturating_add(rules.rival_research_income);
    }

    if state.visibility_of(rival) >= rules.freeze_threshold {
        log.record(format!(
            "{} is frozen due to exposure and can only research or buy agents.",
            rival
        ));
        research_step(state, rival, catalogs, rules, log);
        recruit_step(state, rival, rules, log);
        return Ok(());
    }

    recruit_step(state, rival, rules, log);

    let target = pick_target_country(state, rival, rules, rng);
    let resources = state.agency(rival);
    let operation = pick_affordable_operation(
        &catalogs.rival_operations,
        resources.budget,
        resources.political_capital,
    );

    match (target, operation) {
        (_, None) => {
            log.record(format!("{} skips a turn due to lack of resources.", rival));
        }
        (None, Some(_)) => {
            log.record(format!("{} finds no country to target.", rival));
        }
        (Some(country), Some(operation)) => {
            run_operation(state, rival, operation, &country, rng, log)?;
        }
    }

    research_step(state, rival, catalogs, rules, log);
    Ok(())
}

fn run_operation<R: Rng + ?Sized>(
    state: &mut GameState,
    rival: Agency,
    operation: &OperationDef,
    country: &str,
    rng: &mut R,
    log: &mut dyn LogSink,
) -> Result<()> {
    log.record(format!("{} is conducting {} in {}...", rival, operation.name, country));

    let resources = state.agency(rival);
    if !operation.is_affordable(resources.budget, resources.political_capital) {
        log.record(format!("{} cannot afford {} this turn.", rival, operation.name));
        return Ok(());
    }

    let result = resolve_operation(state, rival, operation, country, rng)?;
    if result.success {
        log.record(format!("{} successfully increases influence in {}.", rival, country));
    } else {
        log.record(format!("{}'s {} failed in {}.", rival, operation.name, country));
    }
    Ok(())
}

fn recruit_step(state: &mut GameState, rival: Agency, rules: &RulesConfig, log: &mut dyn LogSink) {
    if try_recruit(state, rival, rules) {
        log.record(format!("{} recruited a new agent.", rival));
    }
}

fn research_step(
    state: &mut GameState,
    rival: Agency,
    catalogs: &Catalogs,
    rules: &RulesConfig,
    log: &mut dyn LogSink,
) -> Option<ResearchOutcome> {
    let outcome = research_best_available(state, rival, &catalogs.tech_tree, rules)?;
    log.record(format!(
        "{} researched {}, reducing visibility from {} to {}.",
        rival, outcome.technology, outcome.old_visibility, outcome.new_visibility
    ));
    Some(outcome)
}

/// Target weight of one country for `rival`
pub fn target_weight(state: &GameState, rival: Agency, country_idx: usize, rules: &RulesConfig) -> u32 {
    let Some(country) = state.countries.get(country_idx) else {
        return 0;
    };

    let mut weight = 1;
    if country.influence_of(rival) > rules.stronghold_influence {
        weight += rules.stronghold_weight;
    }
    if country.influence_of(state.player) > rules.contest_influence {
        weight += rules.contest_weight;
    }
    weight
}

/// Weighted country choice for `rival`; one uniform draw
pub fn pick_target_country<R: Rng + ?Sized>(
    state: &GameState,
    rival: Agency,
    rules: &RulesConfig,
    rng: &mut R,
) -> Option<String> {
    let mut table = WeightedTable::new();
    for (idx, country) in state.countries.iter().enumerate() {
        table.push(country.name.as_str(), target_weight(state, rival, idx, rules));
    }
    table.pick(rng).map(|name| name.to_string())
}

/// Most expensive affordable operation (by budget); the first declared wins ties
pub fn pick_affordable_operation(
    catalog: &OperationCatalog,
    budget: u32,
    capital: u32,
) -> Option<&OperationDef> {
    let mut best: Option<&OperationDef> = None;
    for op in catalog.iter().filter(|op| op.is_affordable(budget, capital)) {
        if best.map_or(true, |b| op.budget > b.budget) {
            best = Some(op);
        }
    }
    best
}
