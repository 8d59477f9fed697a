//! Game rules configuration with documented constants
//!
//! All magic numbers of the turn pipeline are collected here with
//! explanations of their purpose and how they interact with each other.
//! Every field can be overridden from a TOML file; missing fields keep
//! their default.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::error::{DeepStateError, Result};
use crate::core::types::Agency;

/// Tuning constants for the simulation
///
/// The defaults give the classic game pacing. Changing them
/// affects how quickly agencies get exposed and how fast the game converges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    // === SETUP ===
    /// Visibility the player starts with
    pub initial_player_visibility: u32,

    /// Starting tracker value for each rival
    ///
    /// The player's own entry is ignored; the player starts at
    /// `initial_player_visibility` instead.
    pub initial_rival_visibility: BTreeMap<Agency, u32>,

    /// Agents every agency owns at game start
    pub initial_agents: u32,

    // === RECRUITMENT ===
    /// Budget spent to recruit one agent
    pub recruit_budget_cost: u32,

    /// Political capital spent to recruit one agent
    pub recruit_capital_cost: u32,

    // === RIVAL POLICY ===
    /// Ambient visibility drift applied to every rival each turn
    pub rival_visibility_drift: u32,

    /// Flat research income rivals receive each turn
    pub rival_research_income: u32,

    /// Rival visibility at which the rival is frozen (no operations)
    pub freeze_threshold: u32,

    /// Rival influence above which a country counts as a stronghold
    pub stronghold_influence: u32,

    /// Extra target weight for a rival stronghold
    pub stronghold_weight: u32,

    /// Player influence above which a rival contests the country
    pub contest_influence: u32,

    /// Extra target weight for a contested player stronghold
    pub contest_weight: u32,

    // === RESEARCH ===
    /// Visibility at which research switches to biggest-reduction-first
    pub research_pressure_threshold: u32,

    // === EVENTS ===
    /// Smallest budget loss a financial event can inflict (inclusive)
    pub event_budget_loss_min: u32,

    /// Largest budget loss a financial event can inflict (inclusive)
    pub event_budget_loss_max: u32,

    // === REWARDS ===
    /// Countries above this populism risk pay no rewards
    pub reward_max_populism: i32,

    /// Countries below this stability pay no rewards
    pub reward_min_stability: i32,

    // === PLAYER INCOME (per turn) ===
    pub turn_budget_income: u32,
    pub turn_capital_income: u32,
    pub turn_research_income: u32,

    /// Visibility the player gains every turn just by operating
    pub turn_visibility_drift: u32,

    // === VICTORY / DEFEAT ===
    /// Influence at which the player dominates a country
    pub domination_influence: u32,

    /// Share of dominated countries required for Global Domination
    pub domination_share: f64,

    /// Tracker value every rival must reach for Shadow Victory
    pub shadow_victory_visibility: u32,

    /// Player visibility at which the player is exposed and loses
    pub exposure_threshold: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_player_visibility: 5,
            initial_rival_visibility: BTreeMap::from([
                (Agency::Cia, 20),
                (Agency::Mossad, 10),
                (Agency::Mss, 5),
                (Agency::Fsb, 10),
            ]),
            initial_agents: 1,

            recruit_budget_cost: 200,
            recruit_capital_cost: 50,

            rival_visibility_drift: 1,
            rival_research_income: 3,
            freeze_threshold: 100,
            stronghold_influence: 20,
            stronghold_weight: 3,
            contest_influence: 15,
            contest_weight: 2,

            research_pressure_threshold: 60,

            event_budget_loss_min: 20,
            event_budget_loss_max: 50,

            reward_max_populism: 50,
            reward_min_stability: 50,

            turn_budget_income: 50,
            turn_capital_income: 5,
            turn_research_income: 3,
            turn_visibility_drift: 1,

            domination_influence: 80,
            domination_share: 0.6,
            shadow_victory_visibility: 98,
            exposure_threshold: 100,
        }
    }
}

impl RulesConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from TOML text and validate the result
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load overrides from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Starting tracker value for a rival
    pub fn initial_visibility_for(&self, agency: Agency) -> u32 {
        self.initial_rival_visibility.get(&agency).copied().unwrap_or(0)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.event_budget_loss_min > self.event_budget_loss_max {
            return Err(DeepStateError::InvalidConfig(format!(
                "event_budget_loss_min ({}) must be <= event_budget_loss_max ({})",
                self.event_budget_loss_min, self.event_budget_loss_max
            )));
        }

        if !(0.0..=1.0).contains(&self.domination_share) {
            return Err(DeepStateError::InvalidConfig(format!(
                "domination_share ({}) must be within [0, 1]",
                self.domination_share
            )));
        }

        if self.exposure_threshold == 0 || self.freeze_threshold == 0 {
            return Err(DeepStateError::InvalidConfig(
                "exposure and freeze thresholds must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = RulesConfig::from_toml_str("recruit_budget_cost = 150\n").unwrap();
        assert_eq!(config.recruit_budget_cost, 150);
        assert_eq!(config.recruit_capital_cost, 50);
        assert_eq!(config.initial_visibility_for(Agency::Mss), 5);
    }

    #[test]
    fn test_rival_visibility_override() {
        let config = RulesConfig::from_toml_str("[initial_rival_visibility]\nFSB = 40\n").unwrap();
        assert_eq!(config.initial_visibility_for(Agency::Fsb), 40);
        // A replaced table drops the other entries
        assert_eq!(config.initial_visibility_for(Agency::Cia), 0);
    }

    #[test]
    fn test_inverted_loss_range_rejected() {
        let result = RulesConfig::from_toml_str(
            "event_budget_loss_min = 60\nevent_budget_loss_max = 50\n",
        );
        assert!(matches!(result, Err(DeepStateError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_domination_share_rejected() {
        let config = RulesConfig {
            domination_share: 1.5,
            ..RulesConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
