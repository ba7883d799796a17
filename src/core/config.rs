//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `BoardConfig`: grid extent, building height cap, workers per player
//! - `GameConfig`: board configuration plus the ordered player sequence
//!
//! Defaults describe the standard game: a 5 × 5 board, towers capped at
//! height 4, two workers each for blue and white.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::RulesError;
use super::PlayerId;

/// Board dimensions and per-player limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns (x-axis).
    pub width: u8,

    /// Number of rows (y-axis).
    pub length: u8,

    /// Capped building level. A worker standing at `max_height - 1` has won.
    pub max_height: u8,

    /// Workers each player places before movement starts.
    pub max_workers_per_player: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 5,
            length: 5,
            max_height: 4,
            max_workers_per_player: 2,
        }
    }
}

impl BoardConfig {
    /// Create a new board configuration.
    #[must_use]
    pub const fn new(width: u8, length: u8, max_height: u8, max_workers_per_player: u8) -> Self {
        Self {
            width,
            length,
            max_height,
            max_workers_per_player,
        }
    }

    /// Set the grid extent.
    #[must_use]
    pub fn with_size(mut self, width: u8, length: u8) -> Self {
        self.width = width;
        self.length = length;
        self
    }

    /// Set the capped building level.
    #[must_use]
    pub fn with_max_height(mut self, max_height: u8) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the per-player worker cap.
    #[must_use]
    pub fn with_max_workers(mut self, max_workers_per_player: u8) -> Self {
        self.max_workers_per_player = max_workers_per_player;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.length)
    }

    /// Height a worker must stand on to win.
    #[must_use]
    pub fn winning_height(&self) -> u8 {
        self.max_height.saturating_sub(1)
    }

    /// Check that a board with this configuration can be played on.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidConfig` for an empty grid, a zero
    /// height cap or a zero worker cap.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.width == 0 || self.length == 0 {
            return Err(RulesError::config(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.length
            )));
        }
        if self.max_height == 0 {
            return Err(RulesError::config("max height must be at least 1"));
        }
        if self.max_workers_per_player == 0 {
            return Err(RulesError::config("each player needs at least one worker"));
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board configuration.
    pub board: BoardConfig,

    /// Turn order. The first player acts first.
    pub players: Vec<PlayerId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            players: vec![PlayerId::BLUE, PlayerId::WHITE],
        }
    }
}

impl GameConfig {
    /// Create a new game configuration.
    pub fn new(board: BoardConfig, players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            board,
            players: players.into_iter().collect(),
        }
    }

    /// Replace the board configuration.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Replace the turn order.
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = PlayerId>) -> Self {
        self.players = players.into_iter().collect();
        self
    }

    /// Check the board and the player sequence.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidConfig` if the board is invalid, no
    /// players are given, a player appears twice, or the board has fewer
    /// cells than there are workers to place.
    pub fn validate(&self) -> Result<(), RulesError> {
        self.board.validate()?;

        if self.players.is_empty() {
            return Err(RulesError::config("at least one player is required"));
        }

        let mut seen = FxHashSet::default();
        for &player in &self.players {
            if !seen.insert(player) {
                return Err(RulesError::config(format!(
                    "{player} appears twice in the turn order"
                )));
            }
        }

        let workers = self.players.len() * usize::from(self.board.max_workers_per_player);
        if self.board.cell_count() < workers {
            return Err(RulesError::config(format!(
                "{workers} workers do not fit on {} cells",
                self.board.cell_count()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_config_default() {
        let config = BoardConfig::default();

        assert_eq!(config.width, 5);
        assert_eq!(config.length, 5);
        assert_eq!(config.max_height, 4);
        assert_eq!(config.max_workers_per_player, 2);
        assert_eq!(config.winning_height(), 3);
        assert_eq!(config.cell_count(), 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_config_builder() {
        let config = BoardConfig::default()
            .with_size(3, 4)
            .with_max_height(2)
            .with_max_workers(1);

        assert_eq!(config, BoardConfig::new(3, 4, 2, 1));
        assert_eq!(config.cell_count(), 12);
    }

    #[test]
    fn test_board_config_rejects_empty_grid() {
        assert!(matches!(
            BoardConfig::default().with_size(0, 3).validate(),
            Err(RulesError::InvalidConfig { .. })
        ));
        assert!(matches!(
            BoardConfig::default().with_max_height(0).validate(),
            Err(RulesError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_board_config_rejects_zero_workers() {
        assert!(matches!(
            BoardConfig::default().with_max_workers(0).validate(),
            Err(RulesError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_game_config_default() {
        let config = GameConfig::default();

        assert_eq!(config.players, vec![PlayerId::BLUE, PlayerId::WHITE]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_game_config_rejects_bad_players() {
        let empty = GameConfig::default().with_players(Vec::<PlayerId>::new());
        assert!(matches!(empty.validate(), Err(RulesError::InvalidConfig { .. })));

        let duplicate = GameConfig::default().with_players([PlayerId::BLUE, PlayerId::BLUE]);
        assert!(matches!(duplicate.validate(), Err(RulesError::InvalidConfig { .. })));
    }

    #[test]
    fn test_game_config_rejects_overfull_board() {
        let two_players = [PlayerId::BLUE, PlayerId::WHITE];

        let crowded = GameConfig::new(BoardConfig::new(1, 1, 4, 1), two_players);
        assert!(matches!(crowded.validate(), Err(RulesError::InvalidConfig { .. })));

        let crowded = GameConfig::new(BoardConfig::new(3, 1, 4, 2), two_players);
        assert!(matches!(crowded.validate(), Err(RulesError::InvalidConfig { .. })));

        // exactly full is playable: nobody can move and the game ends by elimination
        let full = GameConfig::new(BoardConfig::new(2, 1, 4, 1), two_players);
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_game_config_serialization() {
        let players = [PlayerId::WHITE, PlayerId::new(2)];
        let config = GameConfig::new(BoardConfig::new(3, 3, 2, 1), players);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
