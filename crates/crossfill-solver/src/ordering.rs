//! Variable and value ordering heuristics for backtracking search.

use std::{
    cmp::Reverse,
    collections::{BTreeSet, HashMap},
};

use crossfill_core::{Assignment, Crossword, Overlap, Variable, Word};

use crate::Domains;

/// Picks the next variable to branch on.
///
/// Among the variables missing from `assignment`, chooses the one with the
/// fewest candidates left (minimum remaining values). Ties go to the
/// variable crossing the most other variables (degree), then to the first in
/// variable order.
///
/// Returns `None` when every variable is assigned.
#[must_use]
pub fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<Variable> {
    crossword
        .variables()
        .iter()
        .filter(|var| !assignment.contains(var))
        .min_by_key(|var| (domains.len(var), Reverse(crossword.degree(var))))
        .copied()
}

/// Letter histogram of one unassigned neighbor at its shared cell.
struct NeighborLetters {
    overlap: Overlap,
    total: usize,
    counts: HashMap<char, usize>,
}

impl NeighborLetters {
    fn new(overlap: Overlap, words: &BTreeSet<Word>) -> Self {
        let mut counts = HashMap::new();
        for letter in words.iter().filter_map(|word| word.letter(overlap.second)) {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self {
            overlap,
            total: words.len(),
            counts,
        }
    }

    /// Number of neighbor words whose letter differs from `word` at the shared cell.
    fn conflicts(&self, word: &Word) -> usize {
        let matching = word
            .letter(self.overlap.first)
            .and_then(|letter| self.counts.get(&letter).copied())
            .unwrap_or(0);
        self.total - matching
    }
}

/// Orders the candidates of `variable` by least-constraining value.
///
/// Each candidate is scored by how many words it would rule out among the
/// unassigned neighbors of `variable`: the neighbor words with a different
/// letter in the shared cell. Candidates are returned by ascending score;
/// equal scores keep lexicographic order.
#[must_use]
pub fn order_domain_values<'a>(
    crossword: &Crossword,
    domains: &'a Domains,
    variable: &Variable,
    assignment: &Assignment,
) -> Vec<&'a Word> {
    let neighbors: Vec<NeighborLetters> = crossword
        .neighbors(variable)
        .iter()
        .filter(|neighbor| !assignment.contains(neighbor))
        .filter_map(|neighbor| {
            let overlap = crossword.overlap(variable, neighbor)?;
            Some(NeighborLetters::new(overlap, domains.get(neighbor)))
        })
        .collect();

    let mut scored: Vec<(usize, &Word)> = domains
        .get(variable)
        .iter()
        .map(|word| {
            let score = neighbors.iter().map(|n| n.conflicts(word)).sum();
            (score, word)
        })
        .collect();
    scored.sort_by_key(|&(score, _)| score);
    scored.into_iter().map(|(_, word)| word).collect()
}
