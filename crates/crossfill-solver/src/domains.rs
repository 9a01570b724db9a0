use std::collections::{BTreeMap, BTreeSet};

use crossfill_core::{Crossword, Variable, Word};

static NO_WORDS: BTreeSet<Word> = BTreeSet::new();

/// The candidate words still possible for each variable.
///
/// Domains start out as the full vocabulary and only ever shrink.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Crossword, Direction, Variable};
/// use crossfill_solver::Domains;
///
/// let crossword = Crossword::new("___\n".parse()?, "CAT\nDOGS".parse()?)?;
/// let var = Variable::new(0, 0, Direction::Across, 3);
///
/// let mut domains = Domains::new(&crossword);
/// assert_eq!(domains.len(&var), 2);
///
/// domains.enforce_node_consistency();
/// assert_eq!(domains.len(&var), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    domains: BTreeMap<Variable, BTreeSet<Word>>,
}

impl Domains {
    /// Creates domains holding the whole vocabulary for every variable.
    #[must_use]
    pub fn new(crossword: &Crossword) -> Self {
        let words: BTreeSet<Word> = crossword.words().iter().cloned().collect();
        let domains = crossword
            .variables()
            .iter()
            .map(|&var| (var, words.clone()))
            .collect();
        Self { domains }
    }

    /// Returns the candidate words of `variable`.
    ///
    /// Unknown variables have no candidates.
    #[must_use]
    pub fn get(&self, variable: &Variable) -> &BTreeSet<Word> {
        self.domains.get(variable).unwrap_or(&NO_WORDS)
    }

    /// Returns the number of candidate words of `variable`.
    #[must_use]
    pub fn len(&self, variable: &Variable) -> usize {
        self.get(variable).len()
    }

    /// Returns the total number of candidates across all variables.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.domains.values().map(BTreeSet::len).sum()
    }

    /// Returns the first variable (in variable order) with no candidates left.
    #[must_use]
    pub fn first_empty(&self) -> Option<Variable> {
        self.domains
            .iter()
            .find(|(_, words)| words.is_empty())
            .map(|(&var, _)| var)
    }

    /// Iterates over all variables and their candidates.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Variable, &BTreeSet<Word>)> + '_ {
        self.domains.iter()
    }

    /// Keeps only the candidates of `variable` for which `keep` returns `true`.
    ///
    /// Returns `true` if any candidate was removed.
    pub(crate) fn retain(&mut self, variable: &Variable, keep: impl FnMut(&Word) -> bool) -> bool {
        let Some(words) = self.domains.get_mut(variable) else {
            return false;
        };
        let before = words.len();
        words.retain(keep);
        words.len() != before
    }

    /// Removes every candidate whose length differs from its variable's length.
    ///
    /// The filter is idempotent. It may leave a domain empty.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn enforce_node_consistency(&mut self) -> bool {
        let mut changed = false;
        for (var, words) in &mut self.domains {
            let before = words.len();
            words.retain(|word| word.length() == var.length());
            if words.len() != before {
                log::trace!(
                    "node consistency: {var} kept {} of {before} words",
                    words.len()
                );
                changed = true;
            }
        }
        changed
    }
}
