//! Plain-text summaries of the game state

use crate::core::types::Agency;
use crate::state::GameState;

impl GameState {
    /// Player and rival resources, one line each
    pub fn resource_summary(&self) -> String {
        let mut lines = vec!["--- Resource Summary ---".to_string()];

        let player = self.player_state();
        lines.push(format!(
            "{} (You) - Budget: ${}, Political Capital: {}, Agents: {}, Research Points: {}",
            self.player, player.budget, player.political_capital, player.agents, player.research_points
        ));

        for rival in self.rivals() {
            let state = self.agency(rival);
            lines.push(format!(
                "{} - Budget: ${}, Political Capital: {}",
                rival, state.budget, state.political_capital
            ));
        }

        lines.join("\n")
    }

    pub fn visibility_report(&self) -> String {
        let mut lines = vec!["--- Agency Visibility Levels ---".to_string()];
        for agency in Agency::ALL {
            let suffix = if self.is_player(agency) { " (You)" } else { "" };
            lines.push(format!("{}{}: {}%", agency, suffix, self.visibility_of(agency)));
        }
        lines.join("\n")
    }

    /// Influence table with populism risk and stability columns
    pub fn influence_report(&self) -> String {
        let mut lines = vec![
            "--- Global Influence Report ---".to_string(),
            format!(
                "{:<12}{:>4}{:>7}{:>5}{:>5}{:>6}{:>6}",
                "Country", "CIA", "Mossad", "MSS", "FSB", "PopR", "Stab"
            ),
        ];

        for country in &self.countries {
            lines.push(format!(
                "{:<12}{:>4}{:>7}{:>5}{:>5}{:>6}{:>6}",
                country.name,
                country.influence_of(Agency::Cia),
                country.influence_of(Agency::Mossad),
                country.influence_of(Agency::Mss),
                country.influence_of(Agency::Fsb),
                country.populism_risk,
                country.stability,
            ));
        }

        lines.join("\n")
    }
}
