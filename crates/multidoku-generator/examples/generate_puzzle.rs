//! Example demonstrating puzzle generation.
//!
//! Generates a single puzzle and prints the problem and solution grids.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a board size and clue count:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 6 --clues 16
//! ```
//!
//! Fix the seed for a reproducible puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Removal progress is logged at debug level:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_puzzle
//! ```

use std::process;

use clap::Parser;
use multidoku_core::BoardSize;
use multidoku_generator::{GeneratedPuzzle, PuzzleGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length (6, 8, or 9).
    #[arg(long, value_name = "SIDE", default_value_t = 9)]
    size: usize,

    /// Number of clues to retain. Defaults to a medium difficulty for
    /// the chosen size.
    #[arg(long, value_name = "COUNT")]
    clues: Option<usize>,

    /// Seed for deterministic generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(size) = BoardSize::from_side(args.size) else {
        eprintln!("Unsupported board size: {}. Use 6, 8, or 9.", args.size);
        process::exit(2);
    };
    let clues = args.clues.unwrap_or_else(|| default_clues(size));

    let mut generator = match args.seed {
        Some(seed) => PuzzleGenerator::from_seed(seed),
        None => PuzzleGenerator::new(),
    };

    match generator.generate(size, clues) {
        Ok(puzzle) => print_puzzle(&puzzle, clues),
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn default_clues(size: BoardSize) -> usize {
    match size {
        BoardSize::Six => 16,
        BoardSize::Eight => 25,
        BoardSize::Nine => 30,
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, requested: usize) {
    println!("Clues:");
    println!("  {} retained ({requested} requested)", puzzle.clues);
    println!();
    println!("Problem:");
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
}
