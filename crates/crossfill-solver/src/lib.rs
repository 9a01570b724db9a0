//! Constraint satisfaction solver for crossword filling.
//!
//! This crate fills a [`Crossword`](crossfill_core::Crossword) by treating
//! each slot as a variable whose domain is a set of candidate words.
//!
//! # Overview
//!
//! - [`Domains`]: candidate words per variable, with node consistency
//!   (word length filtering).
//! - [`arc_consistency`]: `revise` and AC-3 propagation across crossings.
//! - [`ordering`]: minimum-remaining-values/degree variable selection and
//!   least-constraining-value ordering.
//! - [`CrosswordSolver`]: runs the stages in order and backtracks to the first
//!   complete fill. AC-3 failing skips the search entirely.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::Crossword;
//! use crossfill_solver::{CrosswordSolver, SolveOutcome};
//!
//! let crossword = Crossword::new("___\n_##\n_##\n".parse()?, "CAT\nCAR\nDOG".parse()?)?;
//! let mut solver = CrosswordSolver::new(&crossword);
//!
//! match solver.solve_with_outcome() {
//!     SolveOutcome::Solved(assignment) => println!("{}", crossword.letter_grid(&assignment)),
//!     SolveOutcome::Unsolvable(reason) => println!("no solution: {reason}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    arc_consistency::Consistency,
    domains::Domains,
    solver::{CrosswordSolver, SolveOutcome, SolverStats, UnsolvableReason},
};

pub mod arc_consistency;
mod backtrack;
mod domains;
pub mod ordering;
mod solver;

#[cfg(test)]
mod testing;
