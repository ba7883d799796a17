//! Grid coordinates.
//!
//! `x` runs along the board width, `y` along its length. Coordinates are
//! signed so that candidates from outside the board (including negative
//! ones) can be expressed and then rejected by the legality checks.

use serde::{Deserialize, Serialize};

/// Offsets to the 8 neighbouring cells, row-major.
const NEIGHBOR_SHIFTS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column (along the width).
    pub x: i32,
    /// Row (along the length).
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8 surrounding positions (Chebyshev distance 1).
    ///
    /// Positions off the board are included; callers filter by bounds.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        NEIGHBOR_SHIFTS
            .iter()
            .map(move |&(dx, dy)| Position::new(self.x + dx, self.y + dy))
    }

    /// True if `other` is one of the 8 neighbouring cells.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
