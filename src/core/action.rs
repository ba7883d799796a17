//! Action representation: phase tag + typed arguments.
//!
//! Every turn step is one of three phases. The arguments of each phase have a
//! fixed shape, so actions are a closed enum rather than a template with a
//! variable number of pointers:
//! - "Place" = player + target cell
//! - "Move" = player + worker cell + destination
//! - "Build" = player + worker cell + build cell
//!
//! The flat coordinate form (`[x, y]` or `[x0, y0, x1, y1]`) is what external
//! callers and game records hand in; `Action::from_coordinates` is the only
//! place that interprets it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::RulesError;
use super::player::PlayerId;
use super::position::Position;

/// The kind of action required next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Put a new worker on the board.
    Place,
    /// Move one of your workers to a neighbouring cell.
    Move,
    /// Build with the worker that just moved.
    Build,
}

impl Phase {
    /// Name used in game records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Place => "place_worker",
            Phase::Move => "move",
            Phase::Build => "build",
        }
    }

    /// Parse a record name produced by [`Phase::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "place_worker" => Some(Phase::Place),
            "move" => Some(Phase::Move),
            "build" => Some(Phase::Build),
            _ => None,
        }
    }

    /// Number of flat coordinates an action of this phase takes.
    #[must_use]
    pub const fn coordinate_count(self) -> usize {
        match self {
            Phase::Place => 2,
            Phase::Move | Phase::Build => 4,
        }
    }

    fn arity_error(self, got: usize) -> RulesError {
        let reason = format!("expected {} coordinates, got {got}", self.coordinate_count());
        match self {
            Phase::Place => RulesError::placement(reason),
            Phase::Move => RulesError::movement(reason),
            Phase::Build => RulesError::build(reason),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete, typed game action.
///
/// ## Example
///
/// ```
/// use santorini_rules::core::{Action, Phase, PlayerId, Position};
///
/// let action = Action::from_coordinates(Phase::Move, PlayerId::BLUE, &[0, 0, 1, 0]).unwrap();
/// assert_eq!(
///     action,
///     Action::Move {
///         player: PlayerId::BLUE,
///         from: Position::new(0, 0),
///         to: Position::new(1, 0),
///     }
/// );
/// assert_eq!(action.coordinates().as_slice(), &[0, 0, 1, 0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a new worker.
    Place {
        /// Acting player.
        player: PlayerId,
        /// Target cell.
        at: Position,
    },
    /// Move a worker.
    Move {
        /// Acting player.
        player: PlayerId,
        /// Cell of the worker to move.
        from: Position,
        /// Destination cell.
        to: Position,
    },
    /// Raise a cell next to a worker.
    Build {
        /// Acting player.
        player: PlayerId,
        /// Cell of the building worker.
        worker: Position,
        /// Cell to raise.
        at: Position,
    },
}

impl Action {
    /// Build an action from its phase and flat coordinates.
    ///
    /// # Errors
    ///
    /// Returns the phase's illegal-action variant if the number of
    /// coordinates does not match the phase.
    pub fn from_coordinates(
        phase: Phase,
        player: PlayerId,
        coordinates: &[i32],
    ) -> Result<Self, RulesError> {
        match (phase, coordinates) {
            (Phase::Place, &[x, y]) => Ok(Action::Place {
                player,
                at: Position::new(x, y),
            }),
            (Phase::Move, &[x0, y0, x1, y1]) => Ok(Action::Move {
                player,
                from: Position::new(x0, y0),
                to: Position::new(x1, y1),
            }),
            (Phase::Build, &[x0, y0, x1, y1]) => Ok(Action::Build {
                player,
                worker: Position::new(x0, y0),
                at: Position::new(x1, y1),
            }),
            (phase, coordinates) => Err(phase.arity_error(coordinates.len())),
        }
    }

    /// The phase this action belongs to.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Action::Place { .. } => Phase::Place,
            Action::Move { .. } => Phase::Move,
            Action::Build { .. } => Phase::Build,
        }
    }

    /// The acting player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match *self {
            Action::Place { player, .. }
            | Action::Move { player, .. }
            | Action::Build { player, .. } => player,
        }
    }

    /// Flat coordinate form, the inverse of [`Action::from_coordinates`].
    #[must_use]
    pub fn coordinates(&self) -> SmallVec<[i32; 4]> {
        match *self {
            Action::Place { at, .. } => SmallVec::from_slice(&[at.x, at.y]),
            Action::Move { from, to, .. } => SmallVec::from_slice(&[from.x, from.y, to.x, to.y]),
            Action::Build { worker, at, .. } => {
                SmallVec::from_slice(&[worker.x, worker.y, at.x, at.y])
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { player, at } => write!(f, "{player} places a worker at {at}"),
            Action::Move { player, from, to } => write!(f, "{player} moves {from} -> {to}"),
            Action::Build { player, worker, at } => {
                write!(f, "{player} builds at {at} with worker {worker}")
            }
        }
    }
}
