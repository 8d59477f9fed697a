//! Countries and per-agency influence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::Agency;

/// A contested country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// Influence per agency; a missing entry reads as 0
    #[serde(default)]
    pub influence: BTreeMap<Agency, u32>,
    pub populism_risk: i32,
    pub stability: i32,
    /// Budget paid each turn to the leading agency while the country is calm
    #[serde(default)]
    pub budget_reward: u32,
    /// Political capital paid each turn to the leading agency
    #[serde(default)]
    pub capital_reward: u32,
}

impl Country {
    pub fn influence_of(&self, agency: Agency) -> u32 {
        self.influence.get(&agency).copied().unwrap_or(0)
    }

    pub fn add_influence(&mut self, agency: Agency, amount: u32) {
        let entry = self.influence.entry(agency).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Remove influence, flooring at 0
    pub fn reduce_influence(&mut self, agency: Agency, amount: u32) {
        let entry = self.influence.entry(agency).or_insert(0);
        *entry = entry.saturating_sub(amount);
    }

    /// Agency with the most influence; ties go to the earliest agency
    pub fn leading_agency(&self) -> Agency {
        let mut leader = Agency::ALL[0];
        let mut best = self.influence_of(leader);
        for agency in Agency::ALL.into_iter().skip(1) {
            let value = self.influence_of(agency);
            if value > best {
                leader = agency;
                best = value;
            }
        }
        leader
    }
}
