//! Puzzle generation for multidoku boards.
//!
//! Generation happens in two phases, both driven by a seedable PCG random
//! source:
//!
//! 1. **Fill**: backtracking over the empty grid in row-major order, with
//!    the candidate order freshly shuffled at every cell. The shuffle
//!    randomizes *which* complete grid is produced, not the search
//!    strategy.
//! 2. **Removal**: visit all cells in random order and clear each one
//!    only if the remaining grid still has exactly one solution, verified
//!    by a bounded solver run on an independent copy.
//!
//! The result is a puzzle with a guaranteed unique solution. Seeded
//! generators are fully deterministic, which tests and benchmarks rely
//! on.
//!
//! # Examples
//!
//! ```
//! use multidoku_core::BoardSize;
//! use multidoku_generator::PuzzleGenerator;
//! use multidoku_solver::Solver;
//!
//! let mut generator = PuzzleGenerator::from_seed(42);
//! let puzzle = generator.generate(BoardSize::Six, 20).unwrap();
//!
//! assert!(Solver::new().has_unique_solution(&puzzle.problem));
//! assert!(puzzle.solution.is_complete());
//! ```

pub use self::{
    generator::PuzzleGenerator,
    puzzle::{GenerateError, GeneratedPuzzle},
};

mod generator;
mod puzzle;
