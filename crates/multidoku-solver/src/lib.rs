//! Exhaustive search over multidoku boards.
//!
//! This crate provides two engines built on the same backtracking core:
//!
//! - [`Solver`]: finds a completion of a partially filled board
//!   ([`Solver::solve`]) or counts completions up to a small bound
//!   ([`Solver::count_solutions`]), which is how generation and loading
//!   decide whether a puzzle is unique.
//! - [`HintEngine`]: finds a single-cell placement that provably keeps
//!   the board completable.
//!
//! The search is plain depth-first backtracking: empty cells are visited
//! in row-major order and candidate values are tried in ascending order.
//! Recursion depth is bounded by the cell count (at most 81), so native
//! recursion is safe. Every what-if trial runs on an independent clone of
//! the caller's board.

pub use self::{
    backtrack::{Solver, UNIQUENESS_BOUND},
    hint::HintEngine,
};

mod backtrack;
mod hint;
