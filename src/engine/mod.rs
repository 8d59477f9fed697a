//! Turn resolution systems
//!
//! Free functions over `&mut GameState`. Randomness is always passed in,
//! narration always goes to a caller-supplied `LogSink`.

pub mod events;
pub mod log;
pub mod player;
pub mod recruitment;
pub mod research;
pub mod resolver;
pub mod rewards;
pub mod rival;
pub mod turn;
pub mod victory;
pub mod weighted;

pub use events::{trigger_global_event, EventReport};
pub use log::{LogEntry, LogSink, TracingSink, TurnLog};
pub use player::{
    available_technologies, perform_player_operation, recruit_player_agent, research_player_technology,
    OperationAttempt,
};
pub use recruitment::try_recruit;
pub use research::{research_best_available, research_named, ResearchAttempt, ResearchOutcome};
pub use resolver::{resolve_operation, ResolutionResult};
pub use rewards::award_country_rewards;
pub use rival::{run_rival_turns, rival_turn};
pub use turn::{end_turn, TurnOutcome};
pub use victory::{check_global_domination, check_shadow_victory, evaluate_victory, is_player_exposed, Victory};
pub use weighted::WeightedTable;
