//! Operation resolution
//!
//! Costs are paid up front, then a single uniform draw decides the outcome.
//! Success moves influence and destabilises the target; failure only draws
//! double the usual attention.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::OperationDef;
use crate::core::error::Result;
use crate::core::types::Agency;
use crate::state::GameState;

/// What happened when an operation was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub actor: Agency,
    pub operation: String,
    pub country: String,
    pub success: bool,
    /// Visibility added to the actor
    pub visibility_delta: u32,
}

/// Resolve `operation` by `actor` against `country`.
///
/// The caller checks affordability beforehand; costs are still floored at 0
/// so an unchecked call cannot underflow. An unknown country is rejected
/// before anything is charged.
pub fn resolve_operation<R: Rng + ?Sized>(
    state: &mut GameState,
    actor: Agency,
    operation: &OperationDef,
    country: &str,
    rng: &mut R,
) -> Result<ResolutionResult> {
    let country_idx = state.require_country_index(country)?;

    state.agency_mut(actor).spend(operation.budget, operation.capital);

    let roll: f64 = rng.gen();
    let success = roll < operation.success_chance;

    let visibility_delta = if success {
        let target = &mut state.countries[country_idx];
        target.add_influence(actor, operation.influence_gain);
        if operation.rival_influence_loss > 0 {
            for other in actor.others() {
                target.reduce_influence(other, operation.rival_influence_loss);
            }
        }
        target.populism_risk += operation.populism_change;
        target.stability += operation.stability_change;
        operation.visibility_on_success()
    } else {
        operation.visibility_on_failure()
    };

    state.agency_mut(actor).raise_visibility(visibility_delta);

    tracing::debug!(
        actor = %actor,
        operation = %operation.name,
        country,
        roll,
        success,
        visibility_delta,
        "operation resolved"
    );

    Ok(ResolutionResult {
        actor,
        operation: operation.name.clone(),
        country: country.to_string(),
        success,
        visibility_delta,
    })
}
