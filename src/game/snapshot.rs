//! Append-only history of completed actions.
//!
//! Each snapshot pairs an action with the board it produced. Boards are
//! persistent structures, so keeping one per action costs a few shared nodes
//! rather than a full copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Action, Phase, PlayerId};

/// One completed action and the resulting board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player who acted.
    pub active_player: PlayerId,

    /// Board after the action.
    pub board: Board,

    /// The action performed.
    pub action: Action,
}

impl Snapshot {
    /// Phase of the performed action.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.action.phase()
    }
}

/// Ordered, append-only sequence of snapshots.
///
/// Past entries are never modified or removed; the only way back is
/// `GameManager::reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    snapshots: Vector<Snapshot>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Snapshot by index (0 = first action).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no action has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Recorded actions in order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.snapshots.iter().map(|s| &s.action)
    }
}
