use std::fmt::{self, Display, Write as _};

use crate::{Position, Structure};

/// The letters of an assignment laid out on the grid.
///
/// Open cells hold the letter of the word covering them, if any. Blocked
/// cells never hold a letter.
///
/// `Display` renders one line per row, with `█` for blocked cells and a
/// space for open cells without a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    width: usize,
    height: usize,
    open: Vec<bool>,
    letters: Vec<Option<char>>,
}

impl LetterGrid {
    /// Character rendered for blocked cells.
    pub const BLOCKED: char = '█';

    pub(crate) fn new(structure: &Structure) -> Self {
        let open: Vec<bool> = structure.rows().flatten().copied().collect();
        Self {
            width: structure.width(),
            height: structure.height(),
            letters: vec![None; open.len()],
            open,
        }
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        if self.is_open(pos) {
            let i = self.index(pos);
            self.letters[i] = Some(letter);
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row() * self.width + pos.col()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the cell is open. Positions outside the grid are
    /// reported as blocked.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width && self.open[self.index(pos)]
    }

    /// Returns the letter at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if self.is_open(pos) {
            self.letters[self.index(pos)]
        } else {
            None
        }
    }

    /// Iterates over the rows as slices of optional letters.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Option<char>]> + '_ {
        self.letters.chunks_exact(self.width)
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Position::new(row, col);
                let ch = if self.is_open(pos) {
                    self.get(pos).unwrap_or(' ')
                } else {
                    Self::BLOCKED
                };
                f.write_char(ch)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
