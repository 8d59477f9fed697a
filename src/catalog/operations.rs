//! Covert operation definitions
//!
//! Two catalogs exist: the player's (richer effects, includes rival
//! influence loss and country destabilisation) and the rivals' (influence
//! only). Both share the same definition type; unused effects default to 0.

use serde::{Deserialize, Serialize};

use crate::core::error::{DeepStateError, Result};

/// Visibility gained on success when a definition leaves it unspecified
pub const DEFAULT_VISIBILITY_INCREASE: u32 = 2;

/// Failed operations draw this many times the base visibility
pub const FAILURE_VISIBILITY_MULTIPLIER: u32 = 2;

/// A single operation's costs and effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDef {
    pub name: String,
    /// Budget cost, paid whether or not the operation succeeds
    pub budget: u32,
    /// Political capital cost, paid whether or not the operation succeeds
    pub capital: u32,
    /// Probability of success in [0, 1]
    pub success_chance: f64,
    pub influence_gain: u32,
    /// Influence every other agency loses in the target country
    #[serde(default)]
    pub rival_influence_loss: u32,
    #[serde(default)]
    pub populism_change: i32,
    #[serde(default)]
    pub stability_change: i32,
    #[serde(default)]
    pub visibility_increase: Option<u32>,
}

impl OperationDef {
    /// Visibility gained when the operation succeeds
    pub fn visibility_on_success(&self) -> u32 {
        self.visibility_increase.unwrap_or(DEFAULT_VISIBILITY_INCREASE)
    }

    /// Visibility gained when the operation fails (getting caught)
    pub fn visibility_on_failure(&self) -> u32 {
        self.visibility_on_success() * FAILURE_VISIBILITY_MULTIPLIER
    }

    pub fn is_affordable(&self, budget: u32, capital: u32) -> bool {
        budget >= self.budget && capital >= self.capital
    }
}

/// Ordered operation catalog with unique names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationCatalog {
    operations: Vec<OperationDef>,
}

impl OperationCatalog {
    /// Build a catalog, rejecting duplicate names and impossible chances
    pub fn new(operations: Vec<OperationDef>) -> Result<Self> {
        for (idx, op) in operations.iter().enumerate() {
            if !(0.0..=1.0).contains(&op.success_chance) {
                return Err(DeepStateError::InvalidCatalog(format!(
                    "operation '{}' has success_chance {} outside [0, 1]",
                    op.name, op.success_chance
                )));
            }
            if operations[..idx].iter().any(|other| other.name == op.name) {
                return Err(DeepStateError::InvalidCatalog(format!(
                    "duplicate operation '{}'",
                    op.name
                )));
            }
        }

        Ok(Self { operations })
    }

    pub fn get(&self, name: &str) -> Option<&OperationDef> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Look up an operation, reporting unknown names as errors
    pub fn require(&self, name: &str) -> Result<&OperationDef> {
        self.get(name)
            .ok_or_else(|| DeepStateError::UnknownOperation(name.to_string()))
    }

    /// Operations in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &OperationDef> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
