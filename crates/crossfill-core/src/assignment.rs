use std::collections::{BTreeMap, btree_map};

use crate::{Variable, Word};

/// A (possibly partial) mapping from variables to the words placed in them.
///
/// An assignment carries no constraint checks of its own; use
/// [`Crossword::is_consistent`](crate::Crossword::is_consistent) and
/// [`Crossword::is_complete`](crate::Crossword::is_complete) to validate it.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Assignment, Direction, Variable};
///
/// let var = Variable::new(0, 0, Direction::Across, 3);
/// let mut assignment = Assignment::new();
/// assignment.assign(var, "cat".parse()?);
/// assert_eq!(assignment.get(&var).map(|w| w.as_str()), Some("CAT"));
///
/// assignment.unassign(&var);
/// assert!(assignment.is_empty());
/// # Ok::<(), crossfill_core::ParseWordError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<Variable, Word>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Binds `variable` to `word`, returning the previous binding.
    pub fn assign(&mut self, variable: Variable, word: Word) -> Option<Word> {
        self.words.insert(variable, word)
    }

    /// Removes the binding of `variable`, returning it.
    pub fn unassign(&mut self, variable: &Variable) -> Option<Word> {
        self.words.remove(variable)
    }

    /// Returns the word bound to `variable`.
    #[must_use]
    pub fn get(&self, variable: &Variable) -> Option<&Word> {
        self.words.get(variable)
    }

    /// Returns `true` if `variable` has a word.
    #[must_use]
    pub fn contains(&self, variable: &Variable) -> bool {
        self.words.contains_key(variable)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the bindings in variable order.
    pub fn iter(&self) -> btree_map::Iter<'_, Variable, Word> {
        self.words.iter()
    }
}

impl FromIterator<(Variable, Word)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, Word)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a Variable, &'a Word);
    type IntoIter = btree_map::Iter<'a, Variable, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Assignment {
    type Item = (Variable, Word);
    type IntoIter = btree_map::IntoIter<Variable, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
