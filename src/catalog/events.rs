//! Global random event definitions

use serde::{Deserialize, Serialize};

use crate::core::error::{DeepStateError, Result};

/// Which agencies an event hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTarget {
    /// Every agency
    Global,
    /// One or two agencies chosen at random
    Random,
}

/// A world event; every effect present applies to each affected agency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalEvent {
    pub name: String,
    pub target: EventTarget,
    #[serde(default)]
    pub visibility_increase: Option<u32>,
    /// Drain a freshly rolled amount of budget
    #[serde(default)]
    pub budget_loss: bool,
    #[serde(default)]
    pub political_capital_gain: Option<u32>,
}

impl GlobalEvent {
    pub fn has_effect(&self) -> bool {
        self.visibility_increase.is_some() || self.budget_loss || self.political_capital_gain.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventCatalog {
    events: Vec<GlobalEvent>,
}

impl EventCatalog {
    pub fn new(events: Vec<GlobalEvent>) -> Result<Self> {
        if let Some(inert) = events.iter().find(|e| !e.has_effect()) {
            return Err(DeepStateError::InvalidCatalog(format!(
                "event '{}' has no effect",
                inert.name
            )));
        }
        Ok(Self { events })
    }

    pub fn get(&self, idx: usize) -> Option<&GlobalEvent> {
        self.events.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlobalEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
