//! Narration sinks
//!
//! The engine reports every state-changing action as a human-readable line.
//! Where the lines go (console, UI widget, test buffer) is up to the caller.

use serde::{Deserialize, Serialize};

use crate::core::types::Turn;

/// Append-only receiver of narration lines, in causal order
pub trait LogSink {
    fn record(&mut self, message: String);
}

impl LogSink for Vec<String> {
    fn record(&mut self, message: String) {
        self.push(message);
    }
}

/// Forwards narration to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&mut self, message: String) {
        tracing::info!(target: "deep_state::narration", "{}", message);
    }
}

/// A narration line tagged with the turn it happened on
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub turn: Turn,
    pub message: String,
}

/// The complete narration of a game
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TurnLog {
    pub entries: Vec<LogEntry>,
    current_turn: Turn,
    next_entry_id: u32,
}

impl TurnLog {
    pub fn new(turn: Turn) -> Self {
        Self {
            current_turn: turn,
            ..Self::default()
        }
    }

    /// Tag subsequent entries with `turn`
    pub fn set_turn(&mut self, turn: Turn) {
        self.current_turn = turn;
    }

    pub fn entries_for_turn(&self, turn: Turn) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.turn == turn)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LogSink for TurnLog {
    fn record(&mut self, message: String) {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        self.entries.push(LogEntry {
            id,
            turn: self.current_turn,
            message,
        });
    }
}
