//! Victory and defeat conditions
//!
//! Pure predicates over the state; nothing here mutates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::RulesConfig;
use crate::state::GameState;

/// How the player won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victory {
    /// Dominant influence in enough countries
    GlobalDomination,
    /// Every rival pushed to the brink of exposure
    ShadowVictory,
}

impl Victory {
    pub fn message(&self) -> &'static str {
        match self {
            Victory::GlobalDomination => "Your agency has established global dominance. You Win!",
            Victory::ShadowVictory => "You are the last unexposed agency. You Win!",
        }
    }
}

impl fmt::Display for Victory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Victory::GlobalDomination => f.write_str("Global Domination"),
            Victory::ShadowVictory => f.write_str("Shadow Victory"),
        }
    }
}

/// Countries where the player's influence reaches the domination level
pub fn dominated_countries(state: &GameState, rules: &RulesConfig) -> usize {
    state
        .countries
        .iter()
        .filter(|c| c.influence_of(state.player) >= rules.domination_influence)
        .count()
}

/// Player dominates at least the required share of countries
pub fn check_global_domination(state: &GameState, rules: &RulesConfig) -> bool {
    let total = state.countries.len();
    if total == 0 {
        return false;
    }
    dominated_countries(state, rules) as f64 / total as f64 >= rules.domination_share
}

/// Every rival's tracker value is at or above the shadow threshold.
///
/// High rival visibility wins, even though the flavour text speaks of the
/// player being the last *unexposed* agency.
pub fn check_shadow_victory(state: &GameState, rules: &RulesConfig) -> bool {
    state
        .rivals()
        .all(|rival| state.visibility_of(rival) >= rules.shadow_victory_visibility)
}

/// First satisfied win condition, Global Domination checked first
pub fn evaluate_victory(state: &GameState, rules: &RulesConfig) -> Option<Victory> {
    if check_global_domination(state, rules) {
        Some(Victory::GlobalDomination)
    } else if check_shadow_victory(state, rules) {
        Some(Victory::ShadowVictory)
    } else {
        None
    }
}

/// The player has been exposed
pub fn is_player_exposed(state: &GameState, rules: &RulesConfig) -> bool {
    state.visibility_of(state.player) >= rules.exposure_threshold
}
