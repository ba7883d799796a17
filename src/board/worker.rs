//! Player-owned workers.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};

/// A worker on the board.
///
/// `height` always equals the grid height of the cell the worker stands on.
/// The board keeps the two in sync on every move; nothing can build under a
/// worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Worker {
    /// Owning player.
    pub player: PlayerId,

    /// Current cell.
    pub position: Position,

    /// Level the worker stands on.
    pub height: u8,
}

impl Worker {
    /// Create a worker standing on the ground.
    #[must_use]
    pub const fn new(player: PlayerId, position: Position) -> Self {
        Self {
            player,
            position,
            height: 0,
        }
    }

    pub(crate) fn relocate(&mut self, position: Position, height: u8) {
        self.position = position;
        self.height = height;
    }
}
