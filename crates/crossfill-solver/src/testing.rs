//! Fixtures and checks shared by the solver tests.

use std::collections::{BTreeSet, HashSet};

use crossfill_core::{Assignment, Crossword, Variable, Vocabulary, Word};
use proptest::prelude::*;

/// A small grid with exactly one fill from [`WORDS_0`].
pub(crate) const STRUCTURE_0: &str = "
#___#
#_##_
#_##_
#_##_
#____
";

/// Number words one to ten.
pub(crate) const WORDS_0: &str = "
one
two
three
four
five
six
seven
eight
nine
ten
";

/// Builds a crossword from a structure template and a newline-separated word list.
#[track_caller]
pub(crate) fn crossword(template: &str, words: &str) -> Crossword {
    crossword_with_words(template, words.parse().unwrap())
}

/// Builds a crossword from a structure template and a vocabulary.
#[track_caller]
pub(crate) fn crossword_with_words(template: &str, words: Vocabulary) -> Crossword {
    let template = template.trim_start_matches('\n');
    Crossword::new(template.parse().unwrap(), words).unwrap()
}

#[track_caller]
pub(crate) fn word(s: &str) -> Word {
    s.parse().unwrap()
}

pub(crate) fn words_of(words: &BTreeSet<Word>) -> Vec<&str> {
    words.iter().map(Word::as_str).collect()
}

/// Vocabularies of up to `max_words` words over the letters A to C, with
/// lengths from `length - 1` to `length + 1`.
pub(crate) fn vocabulary_strategy(
    length: usize,
    max_words: usize,
) -> impl Strategy<Value = Vocabulary> {
    let pattern = format!("[ABC]{{{},{}}}", length - 1, length + 1);
    let letters = proptest::string::string_regex(&pattern).unwrap();
    prop::collection::btree_set(letters, 0..=max_words)
        .prop_map(|words| words.iter().map(|s| word(s)).collect::<Vocabulary>())
}

/// Checks the length, uniqueness and overlap rules one by one.
#[track_caller]
pub(crate) fn assert_valid_solution(crossword: &Crossword, assignment: &Assignment) {
    assert!(crossword.is_complete(assignment), "incomplete: {assignment:?}");

    let mut seen = HashSet::new();
    for (var, word) in assignment {
        assert_eq!(word.length(), var.length(), "{word} does not fit {var}");
        assert!(seen.insert(word), "{word} is used twice");
        for neighbor in crossword.neighbors(var) {
            let overlap = crossword.overlap(var, neighbor).unwrap();
            let other = assignment.get(neighbor).unwrap();
            assert_eq!(
                word.letter(overlap.first),
                other.letter(overlap.second),
                "{word} at {var} disagrees with {other} at {neighbor}"
            );
        }
    }

    assert!(crossword.is_consistent(assignment));
}

/// Tries every combination of words, without any pruning heuristics.
pub(crate) fn has_solution(crossword: &Crossword) -> bool {
    fn extend(crossword: &Crossword, variables: &[Variable], assignment: &mut Assignment) -> bool {
        let Some((&var, rest)) = variables.split_first() else {
            return true;
        };
        for word in crossword.words() {
            assignment.assign(var, word.clone());
            if crossword.is_consistent(assignment) && extend(crossword, rest, assignment) {
                return true;
            }
            assignment.unassign(&var);
        }
        false
    }

    let variables: Vec<_> = crossword.variables().iter().copied().collect();
    extend(crossword, &variables, &mut Assignment::new())
}
