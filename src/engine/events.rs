//! Global random events
//!
//! Once per turn one event is drawn uniformly from the catalog and applied
//! to either every agency or a random one or two of them.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{EventCatalog, EventTarget, GlobalEvent};
use crate::core::config::RulesConfig;
use crate::core::types::Agency;
use crate::engine::log::LogSink;
use crate::state::GameState;

/// Which event fired and whom it hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReport {
    pub event: String,
    pub affected: Vec<Agency>,
}

/// Draw and apply this turn's event; `None` for an empty catalog
pub fn trigger_global_event<R: Rng + ?Sized>(
    state: &mut GameState,
    events: &EventCatalog,
    rules: &RulesConfig,
    rng: &mut R,
    log: &mut dyn LogSink,
) -> Option<EventReport> {
    if events.is_empty() {
        return None;
    }

    let event = events.get(rng.gen_range(0..events.len()))?;
    log.record(format!("Global Event: {}", event.name));

    let affected = select_affected(event.target, rng);
    for &agency in &affected {
        apply_event_effects(state, event, agency, rules, rng, log);
    }

    tracing::debug!(event = %event.name, affected = ?affected, "global event applied");

    Some(EventReport {
        event: event.name.clone(),
        affected,
    })
}

/// Every agency for global events, otherwise 1 or 2 distinct agencies
pub fn select_affected<R: Rng + ?Sized>(target: EventTarget, rng: &mut R) -> Vec<Agency> {
    match target {
        EventTarget::Global => Agency::ALL.to_vec(),
        EventTarget::Random => {
            let count = rng.gen_range(1..=2);
            Agency::ALL.choose_multiple(rng, count).copied().collect()
        }
    }
}

/// Apply every effect `event` defines to one agency
pub fn apply_event_effects<R: Rng + ?Sized>(
    state: &mut GameState,
    event: &GlobalEvent,
    agency: Agency,
    rules: &RulesConfig,
    rng: &mut R,
    log: &mut dyn LogSink,
) {
    let label = if state.is_player(agency) {
        format!("{} (You)", agency)
    } else {
        agency.to_string()
    };

    if let Some(increase) = event.visibility_increase {
        let resources = state.agency_mut(agency);
        resources.raise_visibility(increase);
        log.record(format!("{} visibility +{}, now {}%", label, increase, resources.visibility));
    }

    if event.budget_loss {
        let loss = rng.gen_range(rules.event_budget_loss_min..=rules.event_budget_loss_max);
        let resources = state.agency_mut(agency);
        resources.budget = resources.budget.saturating_sub(loss);
        log.record(format!("{} lost ${} from budget, now ${}.", label, loss, resources.budget));
    }

    if let Some(gain) = event.political_capital_gain {
        let resources = state.agency_mut(agency);
        resources.political_capital = resources.political_capital.saturating_add(gain);
        log.record(format!(
            "{} gained {} political capital, now {}.",
            label, gain, resources.political_capital
        ));
    }
}
