//! Game session state.

use multidoku_core::{Board, BoardSize, Move, Position};
use multidoku_generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator};
use multidoku_solver::HintEngine;

use crate::Difficulty;

/// Errors produced by game-session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The coordinates are outside the board.
    #[display("cell {pos} is out of range")]
    OutOfRange {
        /// The offending position.
        pos: Position,
    },
    /// The value is outside `1..=side`.
    #[display("value {value} is out of range")]
    InvalidValue {
        /// The offending value.
        value: u8,
    },
    /// The cell is part of the puzzle and cannot be changed.
    #[display("cell {pos} is a given and cannot be modified")]
    CannotModifyGivenCell {
        /// The given cell.
        pos: Position,
    },
    /// The wrong-guess budget is spent.
    #[display("no wrong attempts left")]
    OutOfAttempts,
    /// All hints for this session have been used.
    #[display("hint quota exhausted")]
    HintQuotaExhausted,
    /// No single value completes the board through this cell.
    #[display("no hint available for {pos}")]
    NoHintAvailable {
        /// The cell a hint was requested for.
        pos: Position,
    },
}

/// Result of entering a value into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlacementOutcome {
    /// The value was locally valid and has been placed.
    Placed {
        /// `true` if this placement completed the puzzle.
        solved: bool,
    },
    /// The value conflicts with its row, column, or box; one wrong
    /// attempt has been charged and the grid is unchanged.
    Rejected {
        /// Wrong attempts remaining after this one.
        attempts_left: u32,
    },
}

/// A Sudoku play session.
///
/// Wraps a board with the rules of play: clue cells are fixed, locally
/// invalid entries cost a wrong attempt, and hints are rationed. The
/// session is considered solved when the grid is full and every cell is
/// locally valid, so any valid completion wins, not only the generator's.
///
/// # Examples
///
/// ```
/// use multidoku_core::BoardSize;
/// use multidoku_game::{Difficulty, Game};
/// use multidoku_generator::PuzzleGenerator;
///
/// let mut generator = PuzzleGenerator::from_seed(1);
/// let mut game = Game::generate(&mut generator, BoardSize::Six, Difficulty::Easy).unwrap();
///
/// let hint = game.hint_next().unwrap();
/// assert_eq!(game.cell(hint.pos), Some(hint.value));
/// assert_eq!(game.hints_used(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    givens: Vec<bool>,
    wrong_attempts_left: u32,
    hints_used: u32,
    hint_engine: HintEngine,
}

impl Game {
    /// Wrong guesses allowed per session.
    pub const MAX_WRONG_ATTEMPTS: u32 = 3;
    /// Hints allowed per session.
    pub const MAX_HINTS: u32 = 3;

    /// Creates a session from a generated puzzle.
    ///
    /// Every filled cell of the problem grid becomes a given.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::from_board(puzzle.problem)
    }

    /// Creates a session from a board, treating every filled cell as a
    /// given.
    ///
    /// This is how loaded grids enter play: values saved mid-game reload
    /// as fixed clues. The board is assumed to have passed the uniqueness
    /// check performed by [`storage::load_board`](crate::load_board).
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let givens = board
            .positions()
            .map(|pos| board.get_cell(pos).unwrap_or(0) != 0)
            .collect();
        Self {
            board,
            givens,
            wrong_attempts_left: Self::MAX_WRONG_ATTEMPTS,
            hints_used: 0,
            hint_engine: HintEngine::new(),
        }
    }

    /// Generates a fresh puzzle and starts a session on it.
    ///
    /// # Errors
    ///
    /// Propagates [`GenerateError`] from the generator.
    pub fn generate(
        generator: &mut PuzzleGenerator,
        size: BoardSize,
        difficulty: Difficulty,
    ) -> Result<Self, GenerateError> {
        let puzzle = generator.generate(size, difficulty.clue_count(size))?;
        Ok(Self::new(puzzle))
    }

    /// Returns the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the value at `pos`, or `None` for out-of-range coordinates.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<u8> {
        self.board.get_cell(pos)
    }

    /// Returns `true` if the cell at `pos` is a fixed clue.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        let side = self.board.size().side();
        pos.row < side && pos.col < side && self.givens[pos.row * side + pos.col]
    }

    /// Returns the number of wrong attempts remaining.
    #[must_use]
    pub fn wrong_attempts_left(&self) -> u32 {
        self.wrong_attempts_left
    }

    /// Returns the number of hints used so far.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns `true` if the grid is full and every cell is locally valid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_complete()
    }

    /// Enters `value` at `pos`.
    ///
    /// A locally valid value is placed. A conflicting value is not placed
    /// and costs one wrong attempt; the outcome reports the remaining
    /// budget. Once the budget is spent, further entries fail with
    /// [`GameError::OutOfAttempts`].
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`], [`GameError::InvalidValue`],
    /// [`GameError::CannotModifyGivenCell`], or
    /// [`GameError::OutOfAttempts`].
    pub fn enter(&mut self, pos: Position, value: u8) -> Result<PlacementOutcome, GameError> {
        self.check_writable(pos)?;
        if value == 0 || value > self.board.size().max_value() {
            return Err(GameError::InvalidValue { value });
        }
        if self.wrong_attempts_left == 0 {
            return Err(GameError::OutOfAttempts);
        }

        if self.board.is_valid_move(pos, value) {
            self.board.set_cell(pos, value);
            Ok(PlacementOutcome::Placed {
                solved: self.is_solved(),
            })
        } else {
            self.wrong_attempts_left -= 1;
            Ok(PlacementOutcome::Rejected {
                attempts_left: self.wrong_attempts_left,
            })
        }
    }

    /// Erases the player-entered value at `pos`.
    ///
    /// Erasing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`] or [`GameError::CannotModifyGivenCell`].
    pub fn erase(&mut self, pos: Position) -> Result<(), GameError> {
        self.check_writable(pos)?;
        self.board.set_cell(pos, 0);
        Ok(())
    }

    /// Requests a hint for the cell at `pos` and applies it.
    ///
    /// # Errors
    ///
    /// [`GameError::HintQuotaExhausted`] once [`Self::MAX_HINTS`] hints
    /// have been used, [`GameError::OutOfRange`] or
    /// [`GameError::CannotModifyGivenCell`] for bad targets, and
    /// [`GameError::NoHintAvailable`] if the cell is filled or no value
    /// keeps the board completable.
    pub fn hint(&mut self, pos: Position) -> Result<Move, GameError> {
        if self.hints_used >= Self::MAX_HINTS {
            return Err(GameError::HintQuotaExhausted);
        }
        self.check_writable(pos)?;
        let hint = self
            .hint_engine
            .hint_for(&self.board, pos)
            .ok_or(GameError::NoHintAvailable { pos })?;
        self.board.set_cell(hint.pos, hint.value);
        self.hints_used += 1;
        Ok(hint)
    }

    /// Requests a hint for the first empty cell and applies it.
    ///
    /// # Errors
    ///
    /// As for [`hint`](Game::hint). A board with no empty cell yields
    /// [`GameError::NoHintAvailable`], reported at `r0c0`.
    pub fn hint_next(&mut self) -> Result<Move, GameError> {
        if self.hints_used >= Self::MAX_HINTS {
            return Err(GameError::HintQuotaExhausted);
        }
        let pos = self
            .board
            .first_empty()
            .ok_or(GameError::NoHintAvailable {
                pos: Position::new(0, 0),
            })?;
        self.hint(pos)
    }

    /// Clears all player entries, keeping givens, and resets the wrong
    /// attempt and hint counters.
    pub fn clear_entries(&mut self) {
        for pos in self.board.positions().collect::<Vec<_>>() {
            if !self.is_given(pos) {
                self.board.set_cell(pos, 0);
            }
        }
        self.wrong_attempts_left = Self::MAX_WRONG_ATTEMPTS;
        self.hints_used = 0;
    }

    fn check_writable(&self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_none() {
            return Err(GameError::OutOfRange { pos });
        }
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell { pos });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = "\
        5 3 0 0 7 0 0 0 0\n\
        6 0 0 1 9 5 0 0 0\n\
        0 9 8 0 0 0 0 6 0\n\
        8 0 0 0 6 0 0 0 3\n\
        4 0 0 8 0 3 0 0 1\n\
        7 0 0 0 2 0 0 0 6\n\
        0 6 0 0 0 0 2 8 0\n\
        0 0 0 4 1 9 0 0 5\n\
        0 0 0 0 8 0 0 7 9\n";

    const CLASSIC_SOLVED: &str = "\
        5 3 4 6 7 8 9 1 2\n\
        6 7 2 1 9 5 3 4 8\n\
        1 9 8 3 4 2 5 6 7\n\
        8 5 9 7 6 1 4 2 3\n\
        4 2 6 8 5 3 7 9 1\n\
        7 1 3 9 2 4 8 5 6\n\
        9 6 1 5 3 7 2 8 4\n\
        2 8 7 4 1 9 6 3 5\n\
        3 4 5 2 8 6 1 7 9\n";

    fn classic_game() -> Game {
        Game::from_board(CLASSIC.parse().unwrap())
    }

    #[test]
    fn test_givens_are_protected() {
        let mut game = classic_game();
        let given = Position::new(0, 0);
        assert!(game.is_given(given));

        assert_eq!(
            game.enter(given, 1),
            Err(GameError::CannotModifyGivenCell { pos: given })
        );
        assert_eq!(
            game.erase(given),
            Err(GameError::CannotModifyGivenCell { pos: given })
        );
        assert_eq!(game.cell(given), Some(5));
    }

    #[test]
    fn test_enter_validates_input() {
        let mut game = classic_game();
        let out = Position::new(9, 0);
        assert_eq!(game.enter(out, 1), Err(GameError::OutOfRange { pos: out }));

        let empty = Position::new(0, 2);
        assert_eq!(
            game.enter(empty, 0),
            Err(GameError::InvalidValue { value: 0 })
        );
        assert_eq!(
            game.enter(empty, 10),
            Err(GameError::InvalidValue { value: 10 })
        );
    }

    #[test]
    fn test_enter_and_erase() {
        let mut game = classic_game();
        let pos = Position::new(0, 2);

        // 4 is the solution value, so it is locally valid here
        assert_eq!(game.enter(pos, 4), Ok(PlacementOutcome::Placed { solved: false }));
        assert_eq!(game.cell(pos), Some(4));
        assert_eq!(game.wrong_attempts_left(), Game::MAX_WRONG_ATTEMPTS);

        game.erase(pos).unwrap();
        assert_eq!(game.cell(pos), Some(0));
    }

    #[test]
    fn test_wrong_guesses_spend_the_budget() {
        let mut game = classic_game();
        let pos = Position::new(0, 2);

        // 5 conflicts with the given 5 at r0c0
        assert_eq!(game.enter(pos, 5), Ok(PlacementOutcome::Rejected { attempts_left: 2 }));
        assert_eq!(game.enter(pos, 5), Ok(PlacementOutcome::Rejected { attempts_left: 1 }));
        assert_eq!(game.enter(pos, 5), Ok(PlacementOutcome::Rejected { attempts_left: 0 }));
        assert_eq!(game.cell(pos), Some(0));

        // Budget spent: even a correct entry is refused now
        assert_eq!(game.enter(pos, 4), Err(GameError::OutOfAttempts));
    }

    #[test]
    fn test_completing_the_grid_reports_solved() {
        let mut game = classic_game();
        let solution: Board = CLASSIC_SOLVED.parse().unwrap();

        let empties: Vec<Position> = game
            .board()
            .positions()
            .filter(|&pos| game.cell(pos) == Some(0))
            .collect();
        let (&last, rest) = empties.split_last().unwrap();

        for &pos in rest {
            let value = solution.get_cell(pos).unwrap();
            assert_eq!(
                game.enter(pos, value),
                Ok(PlacementOutcome::Placed { solved: false })
            );
        }
        let value = solution.get_cell(last).unwrap();
        assert_eq!(
            game.enter(last, value),
            Ok(PlacementOutcome::Placed { solved: true })
        );
        assert!(game.is_solved());
    }

    #[test]
    fn test_hint_quota() {
        let mut game = classic_game();

        for used in 1..=Game::MAX_HINTS {
            let hint = game.hint_next().unwrap();
            assert_eq!(game.cell(hint.pos), Some(hint.value));
            assert_eq!(game.hints_used(), used);
        }
        assert_eq!(game.hint_next(), Err(GameError::HintQuotaExhausted));
    }

    #[test]
    fn test_hint_rejects_bad_targets() {
        let mut game = classic_game();

        let given = Position::new(0, 0);
        assert_eq!(
            game.hint(given),
            Err(GameError::CannotModifyGivenCell { pos: given })
        );

        let pos = Position::new(0, 2);
        game.enter(pos, 4).unwrap();
        assert_eq!(game.hint(pos), Err(GameError::NoHintAvailable { pos }));
    }

    #[test]
    fn test_clear_entries() {
        let mut game = classic_game();
        let pos = Position::new(0, 2);

        game.enter(pos, 4).unwrap();
        game.hint_next().unwrap();
        let rejected = game.enter(Position::new(2, 0), 8);
        assert!(matches!(rejected, Ok(PlacementOutcome::Rejected { .. })));

        game.clear_entries();
        assert_eq!(game.cell(pos), Some(0));
        assert_eq!(game.wrong_attempts_left(), Game::MAX_WRONG_ATTEMPTS);
        assert_eq!(game.hints_used(), 0);
        // Givens survive the reset
        assert_eq!(game.cell(Position::new(0, 0)), Some(5));
    }
}
