//! Core data structures for crossword filling.
//!
//! This crate models a crossword as a constraint satisfaction problem: the
//! grid layout, the slots to fill, where they cross, and the words that may
//! go in them. Solving lives in `crossfill-solver`; this crate performs no
//! I/O and no search.
//!
//! # Overview
//!
//! - [`Structure`]: the open/blocked layout parsed from text.
//! - [`Variable`]: a slot, identified by its start cell, [`Direction`] and length.
//! - [`Word`] and [`Vocabulary`]: the candidate words.
//! - [`Crossword`]: slots and their [`Overlap`]s derived from a structure,
//!   together with the vocabulary.
//! - [`Assignment`]: words placed in slots, validated by the crossword.
//! - [`LetterGrid`]: an assignment laid out cell by cell for rendering.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{Assignment, Crossword, Direction, Position, Variable};
//!
//! let crossword = Crossword::new("___\n_##\n_##\n".parse()?, "CAT\nCAR".parse()?)?;
//!
//! let mut assignment = Assignment::new();
//! assignment.assign(Variable::new(0, 0, Direction::Across, 3), "CAT".parse()?);
//! assignment.assign(Variable::new(0, 0, Direction::Down, 3), "CAR".parse()?);
//!
//! assert!(crossword.is_complete(&assignment));
//! assert!(crossword.is_consistent(&assignment));
//! assert_eq!(crossword.letter_grid(&assignment).get(Position::new(2, 0)), Some('R'));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    assignment::Assignment,
    crossword::{Crossword, Overlap},
    error::StructuralError,
    letter_grid::LetterGrid,
    position::Position,
    structure::Structure,
    variable::{Direction, Variable},
    word::{ParseVocabularyError, ParseWordError, Vocabulary, Word},
};

mod assignment;
mod crossword;
mod error;
mod letter_grid;
mod position;
mod structure;
mod variable;
mod word;
