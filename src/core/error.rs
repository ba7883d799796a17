//! Rule violation and consistency errors.
//!
//! Every variant rejects a single attempted action or configuration. None of
//! them leave a partially applied state behind: the board and game manager
//! either commit a whole action or nothing.

use thiserror::Error;

/// Errors raised by the board and the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Placement rejected: cell occupied, off the board, or worker cap reached.
    #[error("illegal placement: {reason}")]
    IllegalPlacement {
        /// What made the placement illegal.
        reason: String,
    },

    /// Move rejected: no such worker, wrong owner, or target not reachable.
    #[error("illegal move: {reason}")]
    IllegalMove {
        /// What made the move illegal.
        reason: String,
    },

    /// Build rejected: no such worker, wrong worker, or target not buildable.
    #[error("illegal build: {reason}")]
    IllegalBuild {
        /// What made the build illegal.
        reason: String,
    },

    /// Wrong player or wrong phase for the current turn.
    #[error("out of order: {reason}")]
    OutOfOrder {
        /// Which ordering rule was broken.
        reason: String,
    },

    /// The board is in a state no sequence of legal actions can produce.
    #[error("illegal board state: {reason}")]
    IllegalBoardState {
        /// The detected inconsistency.
        reason: String,
    },

    /// Board or game configuration cannot be played.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// The offending setting.
        reason: String,
    },
}

impl RulesError {
    pub(crate) fn placement(reason: impl Into<String>) -> Self {
        Self::IllegalPlacement { reason: reason.into() }
    }

    pub(crate) fn movement(reason: impl Into<String>) -> Self {
        Self::IllegalMove { reason: reason.into() }
    }

    pub(crate) fn build(reason: impl Into<String>) -> Self {
        Self::IllegalBuild { reason: reason.into() }
    }

    pub(crate) fn out_of_order(reason: impl Into<String>) -> Self {
        Self::OutOfOrder { reason: reason.into() }
    }

    pub(crate) fn board_state(reason: impl Into<String>) -> Self {
        Self::IllegalBoardState { reason: reason.into() }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }

    /// True if the error signals corrupted state rather than a rejected action.
    ///
    /// A fatal error should end the game session; retrying cannot help.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::IllegalBoardState { .. })
    }
}
