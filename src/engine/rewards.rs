//! Per-turn country rewards

use crate::core::config::RulesConfig;
use crate::engine::log::LogSink;
use crate::state::GameState;

/// Pay each calm country's rewards to the agency leading its influence.
///
/// A country is calm while its populism risk stays at or below the ceiling
/// and its stability at or above the floor.
pub fn award_country_rewards(state: &mut GameState, rules: &RulesConfig, log: &mut dyn LogSink) {
    for idx in 0..state.countries.len() {
        let country = &state.countries[idx];
        if country.populism_risk > rules.reward_max_populism || country.stability < rules.reward_min_stability {
            continue;
        }

        let leader = country.leading_agency();
        let (budget, capital) = (country.budget_reward, country.capital_reward);
        if budget == 0 && capital == 0 {
            continue;
        }
        let name = country.name.clone();

        let resources = state.agency_mut(leader);
        resources.budget = resources.budget.saturating_add(budget);
        resources.political_capital = resources.political_capital.saturating_add(capital);

        let label = if state.is_player(leader) {
            format!("{} (You)", leader)
        } else {
            leader.to_string()
        };
        log.record(format!(
            "{} collects ${} and {} political capital from {}.",
            label, budget, capital, name
        ));
    }
}
