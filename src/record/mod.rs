//! Game records: externalize a game's history and rebuild a game from it.
//!
//! A `GameRecord` is the board configuration, the initial turn order and the
//! ordered list of accepted actions. Nothing else is stored; replaying the
//! actions through `GameManager::apply_action` reproduces every snapshot,
//! elimination and win exactly.
//!
//! ## Formats
//!
//! - Text: one line for the board, one for the turn order, then one per
//!   action (`Display` / `FromStr`)
//! - Binary: `bincode` (`to_bytes` / `from_bytes`)

mod error;
mod text;

pub use error::RecordError;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Action, BoardConfig, GameConfig, PlayerId};
use crate::game::GameManager;

/// Ordered tuple form of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board configuration.
    pub board: BoardConfig,

    /// Initial turn order.
    pub players: Vec<PlayerId>,

    /// Accepted actions, oldest first.
    pub actions: Vec<Action>,
}

impl GameRecord {
    /// Externalize the history of a game.
    #[must_use]
    pub fn from_manager(manager: &GameManager) -> Self {
        let config = manager.initial_config();
        Self {
            board: config.board,
            players: config.players.clone(),
            actions: manager.log().actions().copied().collect(),
        }
    }

    /// Configuration the recorded game started from.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.board, self.players.iter().copied())
    }

    /// Rebuild the game by applying every recorded action in order.
    ///
    /// # Errors
    ///
    /// - `RecordError::Rules` if the configuration is invalid
    /// - `RecordError::Replay` for the first action the rules reject
    #[instrument(level = "debug", skip(self), fields(actions = self.actions.len()))]
    pub fn replay(&self) -> Result<GameManager, RecordError> {
        let mut manager = GameManager::new(self.config())?;
        for (index, action) in self.actions.iter().enumerate() {
            manager
                .apply(action)
                .map_err(|source| RecordError::Replay { index, source })?;
        }
        debug!(status = ?manager.status(), "replay complete");
        Ok(manager)
    }

    /// Encode to the binary form.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Encode` if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from the binary form.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Encode` if the bytes are not a valid record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Write a game's record to `path` in text form.
///
/// # Errors
///
/// Returns `RecordError::Io` if the file cannot be written.
pub fn save(path: impl AsRef<Path>, manager: &GameManager) -> Result<(), RecordError> {
    fs::write(path, GameRecord::from_manager(manager).to_string())?;
    Ok(())
}

/// Read a text record from `path` and replay it.
///
/// # Errors
///
/// Returns `RecordError::Io` if the file cannot be read, `RecordError::Parse`
/// if it is malformed, or a replay error if the game it describes is illegal.
pub fn load(path: impl AsRef<Path>) -> Result<GameManager, RecordError> {
    let text = fs::read_to_string(path)?;
    text.parse::<GameRecord>()?.replay()
}
