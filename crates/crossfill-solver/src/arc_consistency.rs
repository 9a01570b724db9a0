//! Arc consistency for crossword domains (AC-3).
//!
//! An arc `(x, y)` is consistent when every word left for `x` has at least
//! one word left for `y` with the same letter in their shared cell. Making
//! one arc consistent can break others pointing at `x`, so [`ac3`] keeps a
//! queue of arcs to re-check until nothing changes or a domain runs dry.
//!
//! Arc consistency never removes a word that belongs to some complete
//! solution, but reaching it does not prove that a solution exists.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crossfill_core::{Crossword, Variable};

use crate::Domains;

/// A directed constraint from `x` towards `y`: revising it shrinks `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arc {
    /// The variable whose domain is revised.
    pub x: Variable,
    /// The variable whose domain supports `x`.
    pub y: Variable,
}

impl Arc {
    /// Creates the arc from `x` towards `y`.
    #[must_use]
    pub const fn new(x: Variable, y: Variable) -> Self {
        Self { x, y }
    }
}

/// Result of an AC-3 run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Consistency {
    /// Every domain is arc consistent and non-empty.
    Consistent,
    /// A domain is empty, so no solution exists.
    Inconsistent {
        /// The variable left without candidates.
        variable: Variable,
    },
}

/// Returns every ordered pair of distinct variables.
#[must_use]
pub fn all_arcs(crossword: &Crossword) -> Vec<Arc> {
    let variables = crossword.variables();
    variables
        .iter()
        .flat_map(|&x| {
            variables
                .iter()
                .filter(move |&&y| y != x)
                .map(move |&y| Arc::new(x, y))
        })
        .collect()
}

/// Makes `x` arc consistent with `y`.
///
/// Removes every word of `x` that has no word in `y` with the same letter at
/// their shared cell. Nothing is removed if `x` and `y` do not cross. Words
/// too short to reach the shared cell have no letter there and are removed.
///
/// Returns `true` if the domain of `x` changed.
pub fn revise(crossword: &Crossword, domains: &mut Domains, x: &Variable, y: &Variable) -> bool {
    let Some(overlap) = crossword.overlap(x, y) else {
        return false;
    };
    let supported: BTreeSet<char> = domains
        .get(y)
        .iter()
        .filter_map(|word| word.letter(overlap.second))
        .collect();
    let changed = domains.retain(x, |word| {
        word.letter(overlap.first)
            .is_some_and(|letter| supported.contains(&letter))
    });
    if changed {
        log::trace!("revised {x} against {y}: {} words left", domains.len(x));
    }
    changed
}

/// Runs AC-3 starting from every arc of the crossword.
///
/// See [`ac3_with_arcs`].
pub fn ac3(crossword: &Crossword, domains: &mut Domains) -> Consistency {
    ac3_with_arcs(crossword, domains, all_arcs(crossword))
}

/// Runs AC-3 starting from the given arcs.
///
/// Arcs are processed first-in first-out. Whenever revising `(x, y)` shrinks
/// `x`, the arcs `(z, x)` for every neighbor `z` of `x` other than `y` are
/// queued again, unless they are already pending. The run stops as soon as a
/// domain becomes empty.
///
/// A domain that was already empty is reported as inconsistent too, even if
/// no arc touches its variable.
pub fn ac3_with_arcs(
    crossword: &Crossword,
    domains: &mut Domains,
    arcs: impl IntoIterator<Item = Arc>,
) -> Consistency {
    let mut queue = VecDeque::new();
    let mut pending = HashSet::new();
    for arc in arcs {
        if pending.insert(arc) {
            queue.push_back(arc);
        }
    }
    log::debug!("ac3: starting with {} arcs", queue.len());

    let mut revisions = 0_usize;
    while let Some(arc) = queue.pop_front() {
        pending.remove(&arc);
        if !revise(crossword, domains, &arc.x, &arc.y) {
            continue;
        }
        revisions += 1;
        if domains.get(&arc.x).is_empty() {
            log::debug!("ac3: domain of {} wiped out after {revisions} revisions", arc.x);
            return Consistency::Inconsistent { variable: arc.x };
        }
        for &z in crossword.neighbors(&arc.x) {
            if z == arc.y {
                continue;
            }
            let next = Arc::new(z, arc.x);
            if pending.insert(next) {
                queue.push_back(next);
            }
        }
    }

    if let Some(variable) = domains.first_empty() {
        log::debug!("ac3: {variable} has no candidates after {revisions} revisions");
        return Consistency::Inconsistent { variable };
    }

    log::debug!("ac3: consistent after {revisions} revisions");
    Consistency::Consistent
}

#[cfg(test)]
mod tests {
    use crossfill_core::Direction;
    use proptest::prelude::*;

    use super::*;
    use crate::testing;

    fn across() -> Variable {
        Variable::new(0, 0, Direction::Across, 3)
    }

    fn down() -> Variable {
        Variable::new(0, 0, Direction::Down, 3)
    }

    fn node_consistent(crossword: &Crossword) -> Domains {
        let mut domains = Domains::new(crossword);
        domains.enforce_node_consistency();
        domains
    }

    #[test]
    fn test_all_arcs_are_ordered_distinct_pairs() {
        let crossword = testing::crossword("___\n_#_\n___\n", "");
        let arcs = all_arcs(&crossword);
        assert_eq!(arcs.len(), 4 * 3);
        assert!(arcs.iter().all(|arc| arc.x != arc.y));
        let unique: BTreeSet<_> = arcs.iter().collect();
        assert_eq!(unique.len(), arcs.len());
    }

    #[test]
    fn test_revise_removes_unsupported_words() {
        let crossword = testing::crossword("___\n_##\n_##\n", "CAT\nDOG\nCOW");
        let mut domains = node_consistent(&crossword);
        domains.retain(&down(), |word| word.as_str() == "COW");

        assert!(revise(&crossword, &mut domains, &across(), &down()));
        assert_eq!(testing::words_of(domains.get(&across())), ["CAT", "COW"]);
        assert!(!revise(&crossword, &mut domains, &across(), &down()));
    }

    #[test]
    fn test_revise_without_overlap_changes_nothing() {
        let crossword = testing::crossword("___\n###\n___\n", "CAT\nDOG");
        let top = Variable::new(0, 0, Direction::Across, 3);
        let bottom = Variable::new(2, 0, Direction::Across, 3);
        let mut domains = node_consistent(&crossword);
        domains.retain(&bottom, |word| word.as_str() == "DOG");

        assert!(!revise(&crossword, &mut domains, &top, &bottom));
        assert_eq!(domains.len(&top), 2);
    }

    #[test]
    fn test_ac3_propagates_through_chain() {
        // the across word crosses both down words at their middle letters
        let crossword = testing::crossword("_#_\n___\n_#_\n", "AXB\nQAR\nSBT\nQCR\nUVW");
        let mut domains = node_consistent(&crossword);
        let left = Variable::new(0, 0, Direction::Down, 3);
        let middle = Variable::new(1, 0, Direction::Across, 3);
        let right = Variable::new(0, 2, Direction::Down, 3);
        domains.retain(&left, |word| word.as_str() == "QAR");

        assert_eq!(ac3(&crossword, &mut domains), Consistency::Consistent);
        assert_eq!(testing::words_of(domains.get(&middle)), ["AXB"]);
        assert_eq!(testing::words_of(domains.get(&right)), ["SBT"]);
    }

    #[test]
    fn test_ac3_reports_wipeout() {
        let crossword = testing::crossword("___\n_##\n_##\n", "ABC\nXYZ");
        let mut domains = node_consistent(&crossword);
        domains.retain(&across(), |word| word.as_str() == "ABC");
        domains.retain(&down(), |word| word.as_str() == "XYZ");

        let result = ac3(&crossword, &mut domains);
        assert!(result.is_inconsistent());
        let Consistency::Inconsistent { variable } = result else {
            unreachable!();
        };
        assert!(domains.get(&variable).is_empty());
    }

    #[test]
    fn test_ac3_with_no_arcs_changes_nothing() {
        let crossword = testing::crossword("___\n_##\n_##\n", "ABC\nXYZ");
        let mut domains = node_consistent(&crossword);
        domains.retain(&down(), |word| word.as_str() == "XYZ");
        let before = domains.clone();

        assert!(ac3_with_arcs(&crossword, &mut domains, [] as [Arc; 0]).is_consistent());
        assert_eq!(domains, before);
    }

    #[test]
    fn test_ac3_reports_empty_domain_without_neighbors() {
        let crossword = testing::crossword("_____\n", "CAT");
        let mut domains = node_consistent(&crossword);
        let slot = Variable::new(0, 0, Direction::Across, 5);

        assert_eq!(
            ac3(&crossword, &mut domains),
            Consistency::Inconsistent { variable: slot }
        );
        assert_eq!(
            ac3_with_arcs(&crossword, &mut domains, [] as [Arc; 0]),
            Consistency::Inconsistent { variable: slot }
        );
    }

    #[test]
    fn test_ac3_with_given_arcs() {
        let crossword = testing::crossword("___\n_##\n_##\n", "ABC\nAYZ\nXYZ");
        let mut domains = node_consistent(&crossword);
        domains.retain(&down(), |word| word.as_str() == "AYZ");

        let result = ac3_with_arcs(&crossword, &mut domains, [Arc::new(across(), down())]);
        assert!(result.is_consistent());
        assert_eq!(testing::words_of(domains.get(&across())), ["ABC", "AYZ"]);
    }

    proptest! {
        #[test]
        fn test_revise_and_ac3_only_shrink(words in testing::vocabulary_strategy(3, 12)) {
            let crossword = testing::crossword_with_words("___\n_#_\n___\n", words);
            let mut domains = node_consistent(&crossword);

            for arc in all_arcs(&crossword) {
                let before = domains.get(&arc.x).clone();
                revise(&crossword, &mut domains, &arc.x, &arc.y);
                prop_assert!(domains.get(&arc.x).is_subset(&before));
            }

            let before = domains.clone();
            ac3(&crossword, &mut domains);
            for (var, words) in domains.iter() {
                prop_assert!(words.is_subset(before.get(var)));
            }
        }

        #[test]
        fn test_ac3_is_idempotent(words in testing::vocabulary_strategy(3, 12)) {
            let crossword = testing::crossword_with_words("___\n_#_\n___\n", words);
            let mut domains = node_consistent(&crossword);
            if ac3(&crossword, &mut domains).is_consistent() {
                let settled = domains.clone();
                prop_assert!(ac3(&crossword, &mut domains).is_consistent());
                prop_assert_eq!(domains, settled);
            }
        }

        #[test]
        fn test_ac3_leaves_every_arc_supported(words in testing::vocabulary_strategy(3, 12)) {
            let crossword = testing::crossword_with_words("___\n_#_\n___\n", words);
            let mut domains = node_consistent(&crossword);
            if ac3(&crossword, &mut domains).is_consistent() {
                for arc in all_arcs(&crossword) {
                    let mut probe = domains.clone();
                    prop_assert!(!revise(&crossword, &mut probe, &arc.x, &arc.y));
                }
            }
        }
    }
}
