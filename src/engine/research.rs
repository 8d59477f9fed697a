//! Technology research
//!
//! One technology per call. Under heavy exposure the biggest visibility cut
//! is researched first; otherwise the tree is walked in catalog order.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::catalog::{TechTree, Technology};
use crate::core::config::RulesConfig;
use crate::core::error::{DeepStateError, Result};
use crate::core::types::Agency;
use crate::state::GameState;

/// A completed research
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchOutcome {
    pub agency: Agency,
    pub technology: String,
    pub old_visibility: u32,
    pub new_visibility: u32,
}

/// Result of asking for a specific technology
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResearchAttempt {
    Researched(ResearchOutcome),
    InsufficientResearchPoints { cost: u32, available: u32 },
}

/// First affordable unresearched technology in research order
pub fn select_technology<'a>(
    tree: &'a TechTree,
    researched: &[String],
    research_points: u32,
    visibility: u32,
    rules: &RulesConfig,
) -> Option<&'a Technology> {
    let mut candidates: Vec<&Technology> = tree.unresearched(researched).collect();

    if visibility >= rules.research_pressure_threshold {
        // Stable, so equal reductions keep catalog order
        candidates.sort_by_key(|t| Reverse(t.visibility_reduction));
    }

    candidates.into_iter().find(|t| t.cost <= research_points)
}

/// Pay for `tech` and apply its visibility reduction.
///
/// The caller guarantees the technology is new and affordable.
pub fn apply_research(state: &mut GameState, agency: Agency, tech: &Technology) -> ResearchOutcome {
    let resources = state.agency_mut(agency);
    let old_visibility = resources.visibility;

    resources.research_points = resources.research_points.saturating_sub(tech.cost);
    resources.researched_techs.push(tech.name.clone());
    resources.lower_visibility(tech.visibility_reduction);

    tracing::debug!(agency = %agency, technology = %tech.name, "technology researched");

    ResearchOutcome {
        agency,
        technology: tech.name.clone(),
        old_visibility,
        new_visibility: resources.visibility,
    }
}

/// Research the best affordable technology, if any
pub fn research_best_available(
    state: &mut GameState,
    agency: Agency,
    tree: &TechTree,
    rules: &RulesConfig,
) -> Option<ResearchOutcome> {
    let resources = state.agency(agency);
    let tech = select_technology(
        tree,
        &resources.researched_techs,
        resources.research_points,
        resources.visibility,
        rules,
    )?;
    Some(apply_research(state, agency, tech))
}

/// Research a named technology
pub fn research_named(
    state: &mut GameState,
    agency: Agency,
    tree: &TechTree,
    name: &str,
) -> Result<ResearchAttempt> {
    let tech = tree.require(name)?;
    let resources = state.agency(agency);

    if resources.has_researched(name) {
        return Err(DeepStateError::AlreadyResearched(name.to_string()));
    }

    if resources.research_points < tech.cost {
        return Ok(ResearchAttempt::InsufficientResearchPoints {
            cost: tech.cost,
            available: resources.research_points,
        });
    }

    Ok(ResearchAttempt::Researched(apply_research(state, agency, tech)))
}
