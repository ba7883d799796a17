//! Building heights per cell.
//!
//! Heights live in a persistent `im::Vector` in row-major order, so cloning a
//! grid for a snapshot shares structure with the original instead of copying
//! every cell.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Rectangular height map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u8,
    length: u8,
    heights: Vector<u8>,
}

impl Grid {
    /// Create a flat grid (all heights 0).
    #[must_use]
    pub fn new(width: u8, length: u8) -> Self {
        let cells = usize::from(width) * usize::from(length);
        Self {
            width,
            length,
            heights: std::iter::repeat(0).take(cells).collect(),
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Check if a position lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        let width = usize::from(self.width);
        (x < width && y < usize::from(self.length)).then_some(y * width + x)
    }

    /// Height at a position, `None` if off the grid.
    #[must_use]
    pub fn height(&self, pos: Position) -> Option<u8> {
        self.index(pos).and_then(|i| self.heights.get(i).copied())
    }

    /// Add one level at a position.
    ///
    /// Returns the new height, or `None` if the position is off the grid.
    /// Height caps are enforced by the board, not here.
    pub fn raise(&mut self, pos: Position) -> Option<u8> {
        let index = self.index(pos)?;
        let height = self.heights.get_mut(index)?;
        *height = height.saturating_add(1);
        Some(*height)
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        let length = i32::from(self.length);
        (0..length).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Heights row by row.
    pub fn rows(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        let width = usize::from(self.width);
        (0..usize::from(self.length)).map(move |y| {
            self.heights
                .iter()
                .skip(y * width)
                .take(width)
                .copied()
                .collect()
        })
    }

    /// Flatten all buildings back to height 0.
    pub fn clear(&mut self) {
        *self = Self::new(self.width, self.length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_flat() {
        let grid = Grid::new(3, 2);

        assert_eq!(grid.positions().count(), 6);
        assert!(grid.positions().all(|p| grid.height(p) == Some(0)));
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::new(3, 2);

        assert!(grid.contains(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 0)));
        assert!(!grid.contains(Position::new(0, 2)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert_eq!(grid.height(Position::new(0, -1)), None);
    }

    #[test]
    fn test_raise_is_row_major() {
        let mut grid = Grid::new(3, 2);

        assert_eq!(grid.raise(Position::new(2, 0)), Some(1));
        assert_eq!(grid.raise(Position::new(2, 0)), Some(2));
        assert_eq!(grid.raise(Position::new(0, 1)), Some(1));
        assert_eq!(grid.raise(Position::new(5, 5)), None);

        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![vec![0, 0, 2], vec![1, 0, 0]]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::new(2, 2);
        let snapshot = grid.clone();

        grid.raise(Position::new(1, 1));

        assert_eq!(snapshot.height(Position::new(1, 1)), Some(0));
        assert_eq!(grid.height(Position::new(1, 1)), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(2, 2);
        grid.raise(Position::new(0, 0));
        grid.clear();

        assert_eq!(grid, Grid::new(2, 2));
    }
}
