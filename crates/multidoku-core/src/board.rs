//! Board state and local rule checks.

use std::fmt::{self, Display};

use crate::{BoardSize, Position};

/// A proposed or applied placement of a value into a cell.
///
/// Produced by hint lookups and consumed by game sessions. `value` is
/// always in `1..=side` for the board the move was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The target cell.
    pub pos: Position,
    /// The value to place, in `1..=side`.
    pub value: u8,
}

impl Move {
    /// Creates a new move.
    #[must_use]
    pub const fn new(pos: Position, value: u8) -> Self {
        Self { pos, value }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.pos, self.value)
    }
}

/// A Sudoku grid of one of the supported sizes.
///
/// Cells are stored row-major as `u8` values in `0..=side`, where `0`
/// marks an empty cell. All mutation goes through [`set_cell`], which
/// validates coordinates and value range and leaves the grid untouched on
/// rejection.
///
/// `Board` is `Clone`; cloning produces a fully independent grid. Solver
/// and generator code relies on this for what-if exploration: a trial runs
/// on a clone and a failed trial is discarded by dropping it.
///
/// [`set_cell`]: Board::set_cell
///
/// # Examples
///
/// ```
/// use multidoku_core::{Board, BoardSize, Position};
///
/// let mut board = Board::new(BoardSize::Six);
/// assert!(board.set_cell(Position::new(0, 0), 3));
///
/// // Out-of-range value: rejected, nothing changes
/// assert!(!board.set_cell(Position::new(0, 1), 7));
/// assert_eq!(board.get_cell(Position::new(0, 1)), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<u8>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![0; size.cell_count()],
        }
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let side = self.size.side();
        (pos.row < side && pos.col < side).then(|| pos.row * side + pos.col)
    }

    /// Returns the value at `pos`, or `None` for out-of-range coordinates.
    ///
    /// An in-range empty cell reads as `Some(0)`.
    #[must_use]
    pub fn get_cell(&self, pos: Position) -> Option<u8> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Writes `value` at `pos`.
    ///
    /// Succeeds iff `pos` is in range and `value` is in `0..=side`
    /// (`0` erases). On rejection the grid is left unmodified and `false`
    /// is returned. This does not check the Sudoku rules; see
    /// [`is_valid_move`](Board::is_valid_move).
    pub fn set_cell(&mut self, pos: Position, value: u8) -> bool {
        if value > self.size.max_value() {
            return false;
        }
        let Some(i) = self.index(pos) else {
            return false;
        };
        self.cells[i] = value;
        true
    }

    /// Checks whether placing `value` at `pos` respects the row, column,
    /// and box uniqueness rules.
    ///
    /// `value == 0` (erasure) is always valid. A non-zero value is valid
    /// iff no *other* cell in the same row, column, or subgrid box already
    /// holds it; the target cell itself is excluded from the comparison,
    /// so re-validating an already-placed value succeeds. Out-of-range
    /// coordinates or `value > side` are invalid.
    ///
    /// This is a local consistency check only; it says nothing about
    /// whether the board remains solvable.
    #[must_use]
    pub fn is_valid_move(&self, pos: Position, value: u8) -> bool {
        if value == 0 {
            return true;
        }
        if value > self.size.max_value() || self.index(pos).is_none() {
            return false;
        }

        let side = self.size.side();
        for i in 0..side {
            if i != pos.col && self.cells[pos.row * side + i] == value {
                return false;
            }
            if i != pos.row && self.cells[i * side + pos.col] == value {
                return false;
            }
        }

        let box_rows = self.size.box_rows();
        let box_cols = self.size.box_cols();
        let start_row = (pos.row / box_rows) * box_rows;
        let start_col = (pos.col / box_cols) * box_cols;
        for row in start_row..start_row + box_rows {
            for col in start_col..start_col + box_cols {
                if (row != pos.row || col != pos.col) && self.cells[row * side + col] == value {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        let side = self.size.side();
        self.cells
            .iter()
            .position(|&value| value == 0)
            .map(|i| Position::new(i / side, i % side))
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let side = self.size.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns `true` if every cell is filled and locally valid.
    ///
    /// This is the win condition for a game session: a full grid where
    /// each value passes [`is_valid_move`](Board::is_valid_move) against
    /// its peers.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.positions().all(|pos| {
            let value = self.get_cell(pos).unwrap_or(0);
            value != 0 && self.is_valid_move(pos, value)
        })
    }

    /// Resets every cell to empty.
    pub fn clear_all(&mut self) {
        self.cells.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn size_strategy() -> impl Strategy<Value = BoardSize> {
        prop::sample::select(&BoardSize::ALL[..])
    }

    #[test]
    fn test_new_board_is_empty() {
        for size in BoardSize::ALL {
            let board = Board::new(size);
            assert_eq!(board.filled_cells(), 0);
            assert_eq!(board.first_empty(), Some(Position::new(0, 0)));
            assert!(!board.is_full());
        }
    }

    #[test]
    fn test_set_cell_rejects_out_of_range() {
        let mut board = Board::new(BoardSize::Six);

        assert!(!board.set_cell(Position::new(6, 0), 1));
        assert!(!board.set_cell(Position::new(0, 6), 1));
        assert!(!board.set_cell(Position::new(0, 0), 7));
        assert_eq!(board.filled_cells(), 0);

        // Boundary values are accepted
        assert!(board.set_cell(Position::new(5, 5), 6));
        assert!(board.set_cell(Position::new(5, 5), 0));
    }

    #[test]
    fn test_get_cell_out_of_range_is_none() {
        let board = Board::new(BoardSize::Nine);
        assert_eq!(board.get_cell(Position::new(9, 0)), None);
        assert_eq!(board.get_cell(Position::new(0, 9)), None);
        assert_eq!(board.get_cell(Position::new(8, 8)), Some(0));
    }

    #[test]
    fn test_is_valid_move_row_column_conflicts() {
        let mut board = Board::new(BoardSize::Nine);
        board.set_cell(Position::new(4, 4), 5);

        assert!(!board.is_valid_move(Position::new(4, 0), 5));
        assert!(!board.is_valid_move(Position::new(0, 4), 5));
        // The occupied cell itself is excluded from the comparison
        assert!(board.is_valid_move(Position::new(4, 4), 5));
        // Unrelated cell, unrelated value
        assert!(board.is_valid_move(Position::new(0, 0), 5));
        assert!(board.is_valid_move(Position::new(4, 0), 6));
    }

    #[test]
    fn test_is_valid_move_box_conflicts() {
        // 6x6 boxes are 3x2: (0,0) and (2,1) share a box, (2,2) does not
        let mut board = Board::new(BoardSize::Six);
        board.set_cell(Position::new(0, 0), 4);

        assert!(!board.is_valid_move(Position::new(2, 1), 4));
        assert!(board.is_valid_move(Position::new(2, 2), 4));

        // 8x8 boxes are 4x2: (0,0) and (3,1) share a box, (4,1) does not
        let mut board = Board::new(BoardSize::Eight);
        board.set_cell(Position::new(0, 0), 7);

        assert!(!board.is_valid_move(Position::new(3, 1), 7));
        assert!(board.is_valid_move(Position::new(4, 1), 7));
    }

    #[test]
    fn test_is_valid_move_out_of_range() {
        let board = Board::new(BoardSize::Six);
        assert!(!board.is_valid_move(Position::new(6, 0), 1));
        assert!(!board.is_valid_move(Position::new(0, 0), 7));
        // Erasure stays valid even out of range
        assert!(board.is_valid_move(Position::new(6, 0), 0));
    }

    #[test]
    fn test_first_empty_row_major() {
        let mut board = Board::new(BoardSize::Six);
        board.set_cell(Position::new(0, 0), 1);
        board.set_cell(Position::new(0, 1), 2);
        assert_eq!(board.first_empty(), Some(Position::new(0, 2)));

        for pos in board.positions().collect::<Vec<_>>() {
            let value = u8::try_from((pos.row + pos.col) % 6 + 1).unwrap();
            board.set_cell(pos, value);
        }
        assert_eq!(board.first_empty(), None);
        assert!(board.is_full());
    }

    #[test]
    fn test_is_complete() {
        // Valid complete 6x6 grid
        let mut board = Board::new(BoardSize::Six);
        let rows = [
            [1, 2, 3, 4, 5, 6],
            [4, 5, 6, 1, 2, 3],
            [2, 3, 1, 5, 6, 4],
            [5, 6, 4, 2, 3, 1],
            [3, 1, 2, 6, 4, 5],
            [6, 4, 5, 3, 1, 2],
        ];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                assert!(board.set_cell(Position::new(row, col), value));
            }
        }
        assert!(board.is_complete());

        // Introduce a duplicate in row 0
        board.set_cell(Position::new(0, 0), 2);
        assert!(!board.is_complete());

        // An empty cell also fails completion
        board.set_cell(Position::new(0, 0), 0);
        assert!(!board.is_complete());
    }

    #[test]
    fn test_clear_all() {
        let mut board = Board::new(BoardSize::Eight);
        board.set_cell(Position::new(3, 3), 8);
        board.set_cell(Position::new(7, 0), 1);
        board.clear_all();
        assert_eq!(board.filled_cells(), 0);
    }

    proptest! {
        #[test]
        fn prop_erasure_is_always_valid(
            size in size_strategy(),
            row in 0usize..16,
            col in 0usize..16,
        ) {
            let board = Board::new(size);
            prop_assert!(board.is_valid_move(Position::new(row, col), 0));
        }

        #[test]
        fn prop_set_then_get_round_trips(
            size in size_strategy(),
            row in 0usize..6,
            col in 0usize..6,
            value in 0u8..=6,
        ) {
            let mut board = Board::new(size);
            let pos = Position::new(row, col);
            prop_assert!(board.set_cell(pos, value));
            prop_assert_eq!(board.get_cell(pos), Some(value));
        }

        #[test]
        fn prop_rejected_set_does_not_mutate(
            size in size_strategy(),
            row in 0usize..16,
            col in 0usize..16,
            value in 0u8..=16,
        ) {
            let mut board = Board::new(size);
            let before = board.clone();
            let accepted = board.set_cell(Position::new(row, col), value);
            if !accepted {
                prop_assert_eq!(board, before);
            }
        }
    }
}
