//! Game results and turn status.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, PlayerId};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A worker reached the winning level.
    ReachedTop,
    /// Every other player was eliminated.
    LastPlayerStanding,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The winning player.
    pub winner: PlayerId,
    /// How they won.
    pub reason: WinReason,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// What the game expects next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// `player` must perform an action of `phase`.
    InProgress {
        /// Player to act.
        player: PlayerId,
        /// Required phase.
        phase: Phase,
    },
    /// The game is over.
    Finished(GameOutcome),
}

impl Status {
    /// The outcome, if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Status::Finished(outcome) => Some(*outcome),
            Status::InProgress { .. } => None,
        }
    }
}
