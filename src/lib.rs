//! Deep State - Turn-Based Intelligence Agency Strategy Simulation
//!
//! The player runs one of four agencies and competes with three AI rivals
//! for influence over a set of countries through covert operations, agent
//! recruitment and technology research, while keeping its own visibility
//! below the exposure threshold.

pub mod catalog;
pub mod core;
pub mod engine;
pub mod game;
pub mod state;

pub use crate::catalog::Catalogs;
pub use crate::core::{Agency, DeepStateError, Result, RulesConfig};
pub use crate::engine::{TurnOutcome, Victory};
pub use crate::game::Game;
pub use crate::state::GameState;
