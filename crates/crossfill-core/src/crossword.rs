use std::collections::{BTreeMap, BTreeSet};

use crate::{
    Assignment, Direction, LetterGrid, Position, StructuralError, Structure, Variable, Vocabulary,
};

/// The shared cell of two crossing variables.
///
/// `first` indexes into the cells of the first variable of the pair and
/// `second` into the cells of the second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    /// Index of the shared cell within the first variable.
    pub first: usize,
    /// Index of the shared cell within the second variable.
    pub second: usize,
}

impl Overlap {
    /// Creates an overlap from the two cell indices.
    #[must_use]
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Returns the same overlap seen from the other variable.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

static NO_NEIGHBORS: BTreeSet<Variable> = BTreeSet::new();

/// A crossword puzzle: the grid layout, its slots, and the words that may fill them.
///
/// Slots ([`Variable`]s) are the maximal horizontal and vertical runs of at
/// least two open cells. Each pair of slots sharing a cell is recorded as an
/// [`Overlap`]. This data never changes after construction.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Crossword, Direction, Overlap, Variable};
///
/// let crossword = Crossword::new("___\n_##\n_##\n".parse()?, "CAT\nCAR\nDOG".parse()?)?;
/// let across = Variable::new(0, 0, Direction::Across, 3);
/// let down = Variable::new(0, 0, Direction::Down, 3);
///
/// assert_eq!(crossword.variables().len(), 2);
/// assert_eq!(crossword.overlap(&across, &down), Some(Overlap::new(0, 0)));
/// assert!(crossword.neighbors(&across).contains(&down));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crossword {
    structure: Structure,
    variables: BTreeSet<Variable>,
    overlaps: BTreeMap<(Variable, Variable), Overlap>,
    neighbors: BTreeMap<Variable, BTreeSet<Variable>>,
    words: Vocabulary,
}

impl Crossword {
    /// Builds a crossword from a structure, deriving its variables.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralError`] if two derived variables share more than
    /// one cell.
    pub fn new(structure: Structure, words: Vocabulary) -> Result<Self, StructuralError> {
        let variables = derive_variables(&structure);
        Self::with_variables(structure, variables, words)
    }

    /// Builds a crossword from a structure and an explicit set of variables.
    ///
    /// Duplicate variables collapse.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralError`] if a variable leaves the grid, covers a
    /// blocked cell, or shares more than one cell with another variable. A
    /// variable that leaves the grid is reported as out of bounds even if it
    /// also covers a blocked cell.
    pub fn with_variables(
        structure: Structure,
        variables: impl IntoIterator<Item = Variable>,
        words: Vocabulary,
    ) -> Result<Self, StructuralError> {
        let variables: BTreeSet<Variable> = variables.into_iter().collect();

        let mut occupants: BTreeMap<Position, Vec<(Variable, usize)>> = BTreeMap::new();
        for &variable in &variables {
            let inside = variable
                .cell(variable.length() - 1)
                .is_some_and(|last| structure.contains(last));
            if !inside {
                return Err(StructuralError::OutOfBounds { variable });
            }
            for (k, position) in variable.cells().enumerate() {
                if !structure.is_open(position) {
                    return Err(StructuralError::BlockedCell { variable, position });
                }
                occupants.entry(position).or_default().push((variable, k));
            }
        }

        let mut overlaps = BTreeMap::new();
        let mut neighbors: BTreeMap<Variable, BTreeSet<Variable>> = BTreeMap::new();
        for cell_occupants in occupants.values() {
            for (i, &(x, a)) in cell_occupants.iter().enumerate() {
                for &(y, b) in &cell_occupants[i + 1..] {
                    if overlaps.insert((x, y), Overlap::new(a, b)).is_some() {
                        return Err(StructuralError::MultipleOverlap {
                            first: x,
                            second: y,
                        });
                    }
                    overlaps.insert((y, x), Overlap::new(b, a));
                    neighbors.entry(x).or_default().insert(y);
                    neighbors.entry(y).or_default().insert(x);
                }
            }
        }

        log::debug!(
            "built crossword: {}x{}, {} variables, {} overlapping pairs, {} words",
            structure.width(),
            structure.height(),
            variables.len(),
            overlaps.len() / 2,
            words.len()
        );

        Ok(Self {
            structure,
            variables,
            overlaps,
            neighbors,
            words,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.structure.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.structure.height()
    }

    /// Returns the open/blocked layout.
    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns all variables in a stable order.
    #[must_use]
    pub fn variables(&self) -> &BTreeSet<Variable> {
        &self.variables
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn words(&self) -> &Vocabulary {
        &self.words
    }

    /// Returns where `x` and `y` cross, or `None` if they share no cell.
    ///
    /// The result is oriented: `overlap(x, y)` is `overlap(y, x)` reversed.
    #[must_use]
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(&(*x, *y)).copied()
    }

    /// Returns the variables crossing `variable`.
    #[must_use]
    pub fn neighbors(&self, variable: &Variable) -> &BTreeSet<Variable> {
        self.neighbors.get(variable).unwrap_or(&NO_NEIGHBORS)
    }

    /// Returns the number of variables crossing `variable`.
    #[must_use]
    pub fn degree(&self, variable: &Variable) -> usize {
        self.neighbors(variable).len()
    }

    /// Returns `true` if every variable of the crossword has a word.
    #[must_use]
    pub fn is_complete(&self, assignment: &Assignment) -> bool {
        assignment.len() == self.variables.len()
            && self.variables.iter().all(|var| assignment.contains(var))
    }

    /// Returns `true` if the assignment breaks no constraint.
    ///
    /// An assignment is consistent when its words are pairwise distinct, each
    /// word has the length of its variable, and crossing variables agree on
    /// their shared letter. Variables that are not part of this crossword
    /// make the assignment inconsistent.
    #[must_use]
    pub fn is_consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = BTreeSet::new();
        for (var, word) in assignment {
            if !self.variables.contains(var) {
                return false;
            }
            if !seen.insert(word) {
                return false;
            }
            if word.length() != var.length() {
                return false;
            }
            for neighbor in self.neighbors(var) {
                let Some(other) = assignment.get(neighbor) else {
                    continue;
                };
                let Some(overlap) = self.overlap(var, neighbor) else {
                    continue;
                };
                if word.letter(overlap.first) != other.letter(overlap.second) {
                    return false;
                }
            }
        }
        true
    }

    /// Lays the assigned words out on the grid.
    #[must_use]
    pub fn letter_grid(&self, assignment: &Assignment) -> LetterGrid {
        let mut grid = LetterGrid::new(&self.structure);
        for (var, word) in assignment {
            for (position, &letter) in var.cells().zip(word.letters()) {
                grid.set(position, letter);
            }
        }
        grid
    }
}

/// Collects the maximal runs of two or more open cells, across then down.
fn derive_variables(structure: &Structure) -> Vec<Variable> {
    let mut variables = vec![];
    for (direction, outer, inner) in [
        (Direction::Across, structure.height(), structure.width()),
        (Direction::Down, structure.width(), structure.height()),
    ] {
        let to_position = |line: usize, offset: usize| match direction {
            Direction::Across => Position::new(line, offset),
            Direction::Down => Position::new(offset, line),
        };
        for line in 0..outer {
            let mut offset = 0;
            while offset < inner {
                if !structure.is_open(to_position(line, offset)) {
                    offset += 1;
                    continue;
                }
                let start = offset;
                while offset < inner && structure.is_open(to_position(line, offset)) {
                    offset += 1;
                }
                let length = offset - start;
                if length >= 2 {
                    let first = to_position(line, start);
                    variables.push(Variable::new(first.row(), first.col(), direction, length));
                }
            }
        }
    }
    variables
}
