//! Starting resources per agency

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::Agency;

/// Budget and political capital an agency starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingResources {
    pub budget: u32,
    pub political_capital: u32,
}

impl StartingResources {
    /// Used for an agency missing from a loaded table
    pub const FALLBACK: StartingResources = StartingResources {
        budget: 100,
        political_capital: 10,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StartingResourcesTable {
    entries: BTreeMap<Agency, StartingResources>,
}

impl StartingResourcesTable {
    pub fn new(entries: BTreeMap<Agency, StartingResources>) -> Self {
        Self { entries }
    }

    pub fn for_agency(&self, agency: Agency) -> StartingResources {
        self.entries
            .get(&agency)
            .copied()
            .unwrap_or(StartingResources::FALLBACK)
    }
}

impl Default for StartingResourcesTable {
    fn default() -> Self {
        let entry = |budget, political_capital| StartingResources {
            budget,
            political_capital,
        };
        Self::new(BTreeMap::from([
            (Agency::Cia, entry(200, 50)),
            (Agency::Mossad, entry(150, 40)),
            (Agency::Mss, entry(250, 60)),
            (Agency::Fsb, entry(180, 45)),
        ]))
    }
}
