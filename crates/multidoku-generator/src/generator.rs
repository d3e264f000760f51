//! Randomized board filling and clue removal.

use log::{debug, warn};
use multidoku_core::{Board, BoardSize, Position};
use multidoku_solver::Solver;
use rand::SeedableRng as _;
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64Mcg;

use crate::{GenerateError, GeneratedPuzzle};

/// Randomized puzzle generator.
///
/// The generator owns its random source, a [`Pcg64Mcg`]. Use
/// [`from_seed`](PuzzleGenerator::from_seed) to make generation
/// deterministic; [`new`](PuzzleGenerator::new) seeds from OS entropy.
///
/// # Examples
///
/// ```
/// use multidoku_core::BoardSize;
/// use multidoku_generator::PuzzleGenerator;
///
/// let mut generator = PuzzleGenerator::from_seed(7);
/// let puzzle = generator.generate(BoardSize::Nine, 36).unwrap();
/// assert_eq!(puzzle.problem.filled_cells(), puzzle.clues);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
    solver: Solver,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
            solver: Solver::new(),
        }
    }

    /// Creates a deterministic generator from a seed.
    ///
    /// Two generators built from the same seed produce identical puzzles
    /// for identical call sequences.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
            solver: Solver::new(),
        }
    }

    /// Generates a puzzle of the given size with `clues` retained cells.
    ///
    /// Fills a complete grid, keeps it as the solution, then removes
    /// cells while the puzzle stays unique. If removal cannot reach the
    /// requested clue count without breaking uniqueness, the puzzle is
    /// returned anyway with its actual (higher) clue count in
    /// [`GeneratedPuzzle::clues`]; choosing to retry instead is up to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Unfillable`] if no complete grid exists
    /// for the size. This is retryable and not expected for the supported
    /// sizes.
    pub fn generate(
        &mut self,
        size: BoardSize,
        clues: usize,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut board = Board::new(size);
        if !self.generate_full_board(&mut board) {
            return Err(GenerateError::Unfillable { size });
        }
        let solution = board.clone();

        self.remove_numbers(&mut board, clues);
        Ok(GeneratedPuzzle {
            clues: board.filled_cells(),
            problem: board,
            solution,
        })
    }

    /// Fills the board with a complete valid grid, chosen at random.
    ///
    /// The board is reset to all-empty first. Returns `false` only if no
    /// complete grid exists for the board's geometry, in which case the
    /// board is left empty.
    pub fn generate_full_board(&mut self, board: &mut Board) -> bool {
        board.clear_all();
        self.fill_from(board, 0)
    }

    fn fill_from(&mut self, board: &mut Board, index: usize) -> bool {
        let size = board.size();
        if index == size.cell_count() {
            return true;
        }
        let side = size.side();
        let pos = Position::new(index / side, index % side);

        let mut values: Vec<u8> = size.values().collect();
        values.shuffle(&mut self.rng);
        for value in values {
            if board.is_valid_move(pos, value) {
                board.set_cell(pos, value);
                if self.fill_from(board, index + 1) {
                    return true;
                }
                board.set_cell(pos, 0);
            }
        }
        false
    }

    /// Removes cells from a solved board until `clues` filled cells
    /// remain, keeping the solution unique.
    ///
    /// Cells are visited in random order. Each removal is kept only if
    /// the board still has exactly one solution; the uniqueness check
    /// runs on an independent copy, so a rejected removal is undone by
    /// restoring the single cleared value. Returns whether the target
    /// clue count was reached exactly; `false` means removal stopped
    /// early and the board holds more clues than requested.
    pub fn remove_numbers(&mut self, board: &mut Board, clues: usize) -> bool {
        let total_to_remove = board.size().cell_count().saturating_sub(clues);
        let mut cells: Vec<Position> = board.positions().collect();
        cells.shuffle(&mut self.rng);

        let mut removed = 0;
        for pos in cells {
            if removed == total_to_remove {
                break;
            }
            let value = board.get_cell(pos).unwrap_or(0);
            if value == 0 {
                continue;
            }
            board.set_cell(pos, 0);
            if self.solver.has_unique_solution(board) {
                removed += 1;
                debug!("removed {value} at {pos} ({removed}/{total_to_remove})");
            } else {
                board.set_cell(pos, value);
            }
        }

        if removed < total_to_remove {
            warn!(
                "removal stopped early: {} clues retained, {clues} requested",
                board.filled_cells(),
            );
        }
        removed == total_to_remove
    }
}
