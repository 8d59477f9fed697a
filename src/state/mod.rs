//! GameState - the single mutable aggregate of a game in progress
//!
//! Every engine component receives the state explicitly; nothing reaches it
//! through globals. Player and rivals share one resource shape
//! (`AgencyState`). The player's `visibility` is the player's own exposure
//! score, a rival's `visibility` is its entry in the visibility tracker.

pub mod country;
pub mod report;
pub mod save;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::Catalogs;
use crate::core::config::RulesConfig;
use crate::core::error::{DeepStateError, Result};
use crate::core::types::{Agency, Turn};

pub use country::Country;

/// Resources held by one agency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyState {
    pub budget: u32,
    pub political_capital: u32,
    pub research_points: u32,
    pub agents: u32,
    /// Researched technology names in research order, no duplicates
    pub researched_techs: Vec<String>,
    pub visibility: u32,
}

impl AgencyState {
    pub fn can_afford(&self, budget: u32, capital: u32) -> bool {
        self.budget >= budget && self.political_capital >= capital
    }

    /// Deduct costs, flooring each resource at 0
    pub fn spend(&mut self, budget: u32, capital: u32) {
        self.budget = self.budget.saturating_sub(budget);
        self.political_capital = self.political_capital.saturating_sub(capital);
    }

    pub fn has_researched(&self, tech: &str) -> bool {
        self.researched_techs.iter().any(|name| name == tech)
    }

    pub fn raise_visibility(&mut self, amount: u32) {
        self.visibility = self.visibility.saturating_add(amount);
    }

    pub fn lower_visibility(&mut self, amount: u32) {
        self.visibility = self.visibility.saturating_sub(amount);
    }
}

/// The whole game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub turn: Turn,
    /// The player-controlled agency; every other agency is a rival
    pub player: Agency,
    /// Countries in catalog order
    pub countries: Vec<Country>,
    /// Resources for all four agencies
    pub agencies: BTreeMap<Agency, AgencyState>,
    /// Player agents already committed this turn
    pub agents_used: u32,
}

impl GameState {
    /// Seed a fresh game on turn 1
    pub fn new(player: Agency, catalogs: &Catalogs, rules: &RulesConfig) -> Self {
        let agencies = Agency::ALL
            .into_iter()
            .map(|agency| {
                let start = catalogs.starting_resources.for_agency(agency);
                let visibility = if agency == player {
                    rules.initial_player_visibility
                } else {
                    rules.initial_visibility_for(agency)
                };
                let state = AgencyState {
                    budget: start.budget,
                    political_capital: start.political_capital,
                    research_points: 0,
                    agents: rules.initial_agents,
                    researched_techs: Vec::new(),
                    visibility,
                };
                (agency, state)
            })
            .collect();

        Self {
            turn: 1,
            player,
            countries: catalogs.countries.to_vec(),
            agencies,
            agents_used: 0,
        }
    }

    pub fn is_player(&self, agency: Agency) -> bool {
        agency == self.player
    }

    /// Rival agencies in declaration order
    pub fn rivals(&self) -> impl Iterator<Item = Agency> {
        self.player.others()
    }

    /// Resources of an agency (a missing entry reads as empty)
    pub fn agency(&self, agency: Agency) -> AgencyState {
        self.agencies.get(&agency).cloned().unwrap_or_default()
    }

    pub fn agency_mut(&mut self, agency: Agency) -> &mut AgencyState {
        self.agencies.entry(agency).or_default()
    }

    pub fn player_state(&self) -> AgencyState {
        self.agency(self.player)
    }

    pub fn player_state_mut(&mut self) -> &mut AgencyState {
        let player = self.player;
        self.agency_mut(player)
    }

    pub fn visibility_of(&self, agency: Agency) -> u32 {
        self.agencies.get(&agency).map(|a| a.visibility).unwrap_or(0)
    }

    /// The rivals' visibility values
    pub fn visibility_tracker(&self) -> BTreeMap<Agency, u32> {
        self.rivals()
            .map(|rival| (rival, self.visibility_of(rival)))
            .collect()
    }

    /// Player agents still free this turn
    pub fn agents_available(&self) -> u32 {
        self.agencies
            .get(&self.player)
            .map(|p| p.agents.saturating_sub(self.agents_used))
            .unwrap_or(0)
    }

    pub fn country_index(&self, name: &str) -> Option<usize> {
        self.countries.iter().position(|c| c.name == name)
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Look up a country, reporting unknown names as errors
    pub fn require_country_index(&self, name: &str) -> Result<usize> {
        self.country_index(name)
            .ok_or_else(|| DeepStateError::UnknownCountry(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(player: Agency) -> GameState {
        let catalogs = Catalogs::builtin().unwrap();
        GameState::new(player, &catalogs, &RulesConfig::default())
    }

    #[test]
    fn test_new_game_defaults() {
        let state = new_game(Agency::Mossad);
        assert_eq!(state.turn, 1);
        assert_eq!(state.agents_used, 0);

        let player = state.player_state();
        assert_eq!(player.budget, 150);
        assert_eq!(player.political_capital, 40);
        assert_eq!(player.visibility, 5);
        assert_eq!(player.agents, 1);
        assert_eq!(player.research_points, 0);
    }

    #[test]
    fn test_visibility_tracker_holds_rivals_only() {
        let state = new_game(Agency::Cia);
        let tracker = state.visibility_tracker();
        assert_eq!(tracker.len(), 3);
        assert!(!tracker.contains_key(&Agency::Cia));
        assert_eq!(tracker[&Agency::Mossad], 10);
        assert_eq!(tracker[&Agency::Mss], 5);
        assert_eq!(tracker[&Agency::Fsb], 10);
    }

    #[test]
    fn test_rivals_start_with_their_own_resources() {
        let state = new_game(Agency::Fsb);
        assert_eq!(state.agency(Agency::Mss).budget, 250);
        assert_eq!(state.agency(Agency::Cia).visibility, 20);
    }

    #[test]
    fn test_spend_floors_at_zero() {
        let mut agency = AgencyState {
            budget: 10,
            political_capital: 3,
            ..AgencyState::default()
        };
        agency.spend(25, 5);
        assert_eq!(agency.budget, 0);
        assert_eq!(agency.political_capital, 0);
    }

    #[test]
    fn test_agents_available() {
        let mut state = new_game(Agency::Cia);
        assert_eq!(state.agents_available(), 1);
        state.agents_used = 1;
        assert_eq!(state.agents_available(), 0);
    }

    #[test]
    fn test_unknown_country() {
        let state = new_game(Agency::Cia);
        assert!(state.require_country_index("Germany").is_ok());
        assert!(matches!(
            state.require_country_index("Atlantis"),
            Err(DeepStateError::UnknownCountry(_))
        ));
    }
}
