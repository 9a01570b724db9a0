use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Position, StructuralError};

/// The open/blocked layout of a crossword grid.
///
/// The text format has one row per line: `_` marks an open cell and any
/// other character a blocked one. Trailing blank lines are ignored.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Position, Structure};
///
/// let structure: Structure = "#___\n#_##\n".parse()?;
///
/// assert_eq!((structure.width(), structure.height()), (4, 2));
/// assert!(structure.is_open(Position::new(0, 1)));
/// assert!(!structure.is_open(Position::new(1, 2)));
/// assert!(!structure.is_open(Position::new(5, 5)));
/// # Ok::<(), crossfill_core::StructuralError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Structure {
    /// Character marking an open cell in the text format.
    pub const OPEN: char = '_';
    /// Character written for a blocked cell in the text format.
    pub const BLOCKED: char = '#';

    /// Creates a structure from rows of cells, `true` meaning open.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::EmptyStructure`] if there are no cells and
    /// [`StructuralError::NonRectangular`] if rows differ in width.
    pub fn new<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, StructuralError>
    where
        R: AsRef<[bool]>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = vec![];
        for (row, cols) in rows.into_iter().enumerate() {
            let cols = cols.as_ref();
            let expected = *width.get_or_insert(cols.len());
            if cols.len() != expected {
                return Err(StructuralError::NonRectangular {
                    row,
                    expected,
                    found: cols.len(),
                });
            }
            cells.extend_from_slice(cols);
            height += 1;
        }
        let width = width
            .filter(|&width| width > 0)
            .ok_or(StructuralError::EmptyStructure)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the position is inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width
    }

    /// Returns `true` if the cell is open. Positions outside the grid are
    /// reported as blocked.
    #[must_use]
    #[inline]
    pub fn is_open(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[pos.row() * self.width + pos.col()]
    }

    /// Iterates over the rows as slices of cells.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }
}

impl FromStr for Structure {
    type Err = StructuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = s.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        Self::new(lines.into_iter().map(|line| {
            line.chars()
                .map(|ch| ch == Self::OPEN)
                .collect::<Vec<_>>()
        }))
    }
}

impl Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &open in row {
                f.write_char(if open { Self::OPEN } else { Self::BLOCKED })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
