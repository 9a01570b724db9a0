//! File loading and output for the `crossfill` command-line tool.
//!
//! The solver crates perform no I/O; this crate reads structure and word
//! files into their core types and writes filled grids back out.

pub use self::{
    loader::{LoadError, load_crossword, load_structure, load_words},
    output::{SaveError, save},
};

mod loader;
mod output;
