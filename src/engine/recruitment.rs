//! Agent recruitment, shared by the player and rival agencies

use crate::core::config::RulesConfig;
use crate::core::types::Agency;
use crate::state::GameState;

/// Recruit one agent if the agency can pay the full price.
///
/// All-or-nothing: either both costs are paid and `agents` grows by one,
/// or nothing changes. Returns whether an agent was recruited.
pub fn try_recruit(state: &mut GameState, agency: Agency, rules: &RulesConfig) -> bool {
    let resources = state.agency_mut(agency);
    if !resources.can_afford(rules.recruit_budget_cost, rules.recruit_capital_cost) {
        return false;
    }

    resources.spend(rules.recruit_budget_cost, rules.recruit_capital_cost);
    resources.agents += 1;
    tracing::debug!(agency = %agency, agents = resources.agents, "agent recruited");
    true
}
