//! Single-cell hints backed by full solvability checks.

use multidoku_core::{Board, Move, Position};
use tinyvec::ArrayVec;

use crate::Solver;

/// Finds placements that keep a board completable.
///
/// A hint is more than a locally valid candidate: each candidate is placed
/// on an independent clone of the board and the clone is solved to the
/// end. The first candidate whose clone solves is returned, so an applied
/// hint always leaves the live board in a provably completable state.
///
/// # Examples
///
/// ```
/// use multidoku_core::{Board, BoardSize};
/// use multidoku_solver::HintEngine;
///
/// let engine = HintEngine::new();
/// let board = Board::new(BoardSize::Six);
///
/// let hint = engine.next_hint(&board).expect("empty board is solvable");
/// assert!(board.is_valid_move(hint.pos, hint.value));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HintEngine {
    solver: Solver,
}

impl HintEngine {
    /// Creates a new hint engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
        }
    }

    /// Finds a hint for the cell at `pos`.
    ///
    /// Returns `None` if `pos` is out of range, the cell is already
    /// filled, or no candidate value leads to a solvable board. The last
    /// case means the grid cannot be completed through this cell with any
    /// single value, which usually indicates earlier placements have
    /// already made the board unsolvable.
    #[must_use]
    pub fn hint_for(&self, board: &Board, pos: Position) -> Option<Move> {
        if board.get_cell(pos)? != 0 {
            return None;
        }

        let mut candidates: ArrayVec<[u8; 9]> = ArrayVec::new();
        for value in board.size().values() {
            if board.is_valid_move(pos, value) {
                candidates.push(value);
            }
        }

        for value in candidates {
            let mut trial = board.clone();
            trial.set_cell(pos, value);
            if self.solver.solve(&mut trial) {
                return Some(Move::new(pos, value));
            }
        }
        None
    }

    /// Finds a hint for the first empty cell in row-major order.
    ///
    /// Returns `None` if the board is already full or the first empty
    /// cell admits no completable value.
    #[must_use]
    pub fn next_hint(&self, board: &Board) -> Option<Move> {
        self.hint_for(board, board.first_empty()?)
    }
}
