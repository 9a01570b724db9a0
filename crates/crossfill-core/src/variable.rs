use crate::Position;

/// The direction in which a slot is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// Left to right along a row.
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

/// A slot in the grid that must be filled with exactly one word.
///
/// Two variables are equal when their start cell, direction and length are
/// equal, so variables can be used directly as map keys and set members.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Position, Variable};
///
/// let var = Variable::new(1, 0, Direction::Across, 3);
/// let cells: Vec<_> = var.cells().collect();
/// assert_eq!(
///     cells,
///     [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]
/// );
/// assert_eq!(var, Variable::new(1, 0, Direction::Across, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{direction} at ({row}, {col}) of length {length}")]
pub struct Variable {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    /// Creates a variable starting at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0.
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        assert!(length >= 1, "Invalid variable length: {length}");
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Returns the row of the first cell.
    #[must_use]
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of the first cell.
    #[must_use]
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns the first cell.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the reading direction.
    #[must_use]
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells (and so the required word length).
    #[must_use]
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the `k`-th cell of this variable.
    ///
    /// Returns `None` if `k` is not less than [`length`](Self::length).
    #[must_use]
    pub const fn cell(&self, k: usize) -> Option<Position> {
        if k >= self.length {
            return None;
        }
        Some(match self.direction {
            Direction::Across => Position::new(self.row, self.col + k),
            Direction::Down => Position::new(self.row + k, self.col),
        })
    }

    /// Returns the cells of this variable in reading order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Position> + use<> {
        let Self {
            row,
            col,
            direction,
            length,
        } = *self;
        (0..length).map(move |k| match direction {
            Direction::Across => Position::new(row, col + k),
            Direction::Down => Position::new(row + k, col),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_cells_across_and_down() {
        let across = Variable::new(0, 0, Direction::Across, 3);
        assert_eq!(
            across.cells().collect::<Vec<_>>(),
            [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );

        let down = Variable::new(0, 0, Direction::Down, 3);
        assert_eq!(
            down.cells().collect::<Vec<_>>(),
            [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(down.cells().len(), 3);
    }

    #[test]
    fn test_cell_matches_cells() {
        let var = Variable::new(2, 1, Direction::Down, 4);
        for (k, pos) in var.cells().enumerate() {
            assert_eq!(var.cell(k), Some(pos));
        }
        assert_eq!(var.cell(4), None);
    }

    #[test]
    fn test_value_equality() {
        let a = Variable::new(0, 0, Direction::Across, 3);
        let b = Variable::new(0, 0, Direction::Across, 3);
        let c = Variable::new(0, 0, Direction::Down, 3);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let var = Variable::new(1, 2, Direction::Down, 5);
        assert_eq!(var.to_string(), "down at (1, 2) of length 5");
        assert_eq!(Direction::Across.to_string(), "across");
        assert_eq!(
            Variable::new(0, 3, Direction::Across, 2).to_string(),
            "across at (0, 3) of length 2"
        );
    }

    #[test]
    #[should_panic(expected = "Invalid variable length: 0")]
    fn test_zero_length_panics() {
        let _ = Variable::new(0, 0, Direction::Across, 0);
    }
}
