//! Command-line crossword filler.
//!
//! # Usage
//!
//! ```sh
//! crossfill data/structures/0.txt data/words/0.txt [output.txt] [--stats]
//! ```
//!
//! Set `RUST_LOG=debug` to follow the solving stages.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use crossfill_cli::{LoadError, SaveError};
use crossfill_solver::{CrosswordSolver, SolveOutcome};

/// Fill a crossword grid with words from a word list.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Structure file: one row per line, `_` for open cells, anything else blocked.
    #[arg(value_name = "STRUCTURE")]
    structure: PathBuf,

    /// Words file: one word per line.
    #[arg(value_name = "WORDS")]
    words: PathBuf,

    /// Also write the filled grid to this file.
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum Error {
    #[display("{_0}")]
    Load(LoadError),
    #[display("{_0}")]
    Save(SaveError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, Error> {
    let crossword = crossfill_cli::load_crossword(&args.structure, &args.words)?;
    let mut solver = CrosswordSolver::new(&crossword);
    let outcome = solver.solve_with_outcome();

    if args.stats {
        print_stats(&solver);
    }

    match outcome {
        SolveOutcome::Solved(assignment) => {
            let grid = crossword.letter_grid(&assignment);
            print!("{grid}");
            if let Some(output) = &args.output {
                crossfill_cli::save(output, &grid)?;
            }
            Ok(true)
        }
        SolveOutcome::Unsolvable(reason) => {
            log::info!("{reason}");
            println!("No solution.");
            Ok(false)
        }
    }
}

fn print_stats(solver: &CrosswordSolver<'_>) {
    let stats = solver.stats();
    println!("Stats:");
    println!("  variables: {}", solver.crossword().variables().len());
    println!("  candidates: {}", solver.domains().total_len());
    println!("  backtrack calls: {}", stats.backtrack_calls());
    println!("  values tried: {}", stats.values_tried());
    println!("  rejected values: {}", stats.rejected_values());
    println!();
}
