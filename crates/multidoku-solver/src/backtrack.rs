//! Backtracking search and bounded solution counting.

use multidoku_core::Board;

/// Bound used by uniqueness checks.
///
/// Counting is capped at two: one solution means unique, two means the
/// puzzle is ambiguous, and there is never a reason to enumerate further.
pub const UNIQUENESS_BOUND: usize = 2;

/// A bounded counter for complete grids found during search.
///
/// Carries the running count and the cap explicitly so early termination
/// is an ordinary check at each search node.
#[derive(Debug, Clone, Copy)]
struct SolutionBudget {
    count: usize,
    max: usize,
}

impl SolutionBudget {
    fn new(max: usize) -> Self {
        Self { count: 0, max }
    }

    fn record(&mut self) {
        self.count += 1;
    }

    fn exhausted(&self) -> bool {
        self.count >= self.max
    }
}

/// Exhaustive backtracking solver.
///
/// The solver itself is stateless; all state lives in the board being
/// searched (for [`solve`]) or in an internal clone (for
/// [`count_solutions`]).
///
/// [`solve`]: Solver::solve
/// [`count_solutions`]: Solver::count_solutions
///
/// # Examples
///
/// ```
/// use multidoku_core::{Board, BoardSize};
/// use multidoku_solver::Solver;
///
/// let solver = Solver::new();
/// let mut board = Board::new(BoardSize::Six);
///
/// assert!(solver.solve(&mut board));
/// assert!(board.is_complete());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Completes the board in place, returning whether a solution exists.
    ///
    /// Empty cells are visited in row-major order; at each cell the values
    /// `1..=side` are tried in ascending order, so the result is
    /// deterministic for a given grid. On success the grid is left solved.
    /// If every branch is exhausted the grid is rolled back to its exact
    /// pre-call pattern and `false` is returned.
    pub fn solve(&self, board: &mut Board) -> bool {
        let Some(pos) = board.first_empty() else {
            return true;
        };
        for value in board.size().values() {
            if board.is_valid_move(pos, value) {
                board.set_cell(pos, value);
                if self.solve(board) {
                    return true;
                }
                board.set_cell(pos, 0);
            }
        }
        false
    }

    /// Counts completions of the board, stopping at `max_solutions`.
    ///
    /// The search runs on an internal clone; the caller's board is never
    /// touched. Unlike [`solve`](Solver::solve), reaching a complete grid
    /// records it and keeps backtracking, so the result distinguishes
    /// `0` (unsolvable), `1` (unique), and `max_solutions` (at least that
    /// many). Callers checking uniqueness should pass
    /// [`UNIQUENESS_BOUND`] or use
    /// [`has_unique_solution`](Solver::has_unique_solution).
    #[must_use]
    pub fn count_solutions(&self, board: &Board, max_solutions: usize) -> usize {
        let mut budget = SolutionBudget::new(max_solutions);
        let mut scratch = board.clone();
        self.count_from(&mut scratch, &mut budget);
        budget.count
    }

    /// Returns `true` if the board has exactly one completion.
    #[must_use]
    pub fn has_unique_solution(&self, board: &Board) -> bool {
        self.count_solutions(board, UNIQUENESS_BOUND) == 1
    }

    fn count_from(&self, board: &mut Board, budget: &mut SolutionBudget) {
        if budget.exhausted() {
            return;
        }
        let Some(pos) = board.first_empty() else {
            budget.record();
            return;
        };
        for value in board.size().values() {
            if board.is_valid_move(pos, value) {
                board.set_cell(pos, value);
                self.count_from(board, budget);
                board.set_cell(pos, 0);
                if budget.exhausted() {
                    return;
                }
            }
        }
    }
}
