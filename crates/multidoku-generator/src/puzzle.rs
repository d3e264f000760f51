//! Generated puzzles and generation failures.

use multidoku_core::{Board, BoardSize};

/// A generated puzzle together with the solution it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, with clue cells filled and the rest empty.
    pub problem: Board,
    /// The complete grid the problem was carved from. The problem is
    /// guaranteed to have exactly one solution, and this is it.
    pub solution: Board,
    /// The number of clues actually retained. This can exceed the
    /// requested count when removal stops early to preserve uniqueness.
    pub clues: usize,
}

/// Errors produced by puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// Backtracking fill exhausted every branch without producing a
    /// complete grid. This should not occur for the supported sizes;
    /// retrying with fresh randomness is a reasonable response.
    #[display("no complete grid could be generated for a {size} board")]
    Unfillable {
        /// The board size that failed to fill.
        size: BoardSize,
    },
}
