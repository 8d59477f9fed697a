//! JSON snapshots of a game in progress

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::state::GameState;

impl GameState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write the state to `path` as pretty JSON
pub fn save_game(state: &GameState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, state.to_json()?)?;
    tracing::debug!("saved turn {} to {}", state.turn, path.display());
    Ok(())
}

pub fn load_game(path: &Path) -> Result<GameState> {
    let json = fs::read_to_string(path)?;
    GameState::from_json(&json)
}
