/// A cell coordinate in a crossword grid.
///
/// Rows grow downwards and columns grow to the right, both starting at 0.
///
/// # Examples
///
/// ```
/// use crossfill_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }
}
