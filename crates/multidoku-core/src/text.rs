//! Plain-text grid format.
//!
//! A board serializes as one line per row, with cells separated by
//! whitespace. A cell is either a digit in `1..=side` or a placeholder for
//! empty: `0` on output, `0` or `.` on input. The board size is inferred
//! from the number of non-empty lines and must be 6, 8, or 9.
//!
//! ```
//! use multidoku_core::{Board, BoardSize, Position};
//!
//! let text = "\
//! 1 2 3 4 5 6
//! . . . 1 2 3
//! 2 3 1 . . .
//! . . . 2 3 1
//! 3 1 2 . . .
//! . . . 3 1 2
//! ";
//! let board: Board = text.parse().unwrap();
//! assert_eq!(board.size(), BoardSize::Six);
//! assert_eq!(board.get_cell(Position::new(0, 5)), Some(6));
//! assert_eq!(board.get_cell(Position::new(1, 0)), Some(0));
//! ```
//!
//! Parsing validates shape and token range only. Rejecting grids that do
//! not have a unique solution requires the solver and happens in the game
//! layer before a loaded grid is accepted into play.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Board, BoardSize, Position};

/// Errors produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The line count is not one of the supported side lengths.
    #[display("unsupported grid size: {rows} rows (expected 6, 8, or 9)")]
    UnsupportedSize {
        /// Number of non-empty lines found.
        rows: usize,
    },
    /// A row does not have exactly `side` cells.
    #[display("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of tokens found in the row.
        found: usize,
        /// Expected number of tokens.
        expected: usize,
    },
    /// A token is neither a placeholder nor a digit in `1..=side`.
    #[display("invalid cell {token:?} at row {row}, column {col}")]
    InvalidToken {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending token.
        token: String,
    },
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.size().side();
        for row in 0..side {
            for col in 0..side {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let value = self.get_cell(Position::new(row, col)).unwrap_or(0);
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let size = BoardSize::from_side(lines.len())
            .ok_or(ParseBoardError::UnsupportedSize { rows: lines.len() })?;
        let side = size.side();

        let mut board = Board::new(size);
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != side {
                return Err(ParseBoardError::RowWidth {
                    row,
                    found: tokens.len(),
                    expected: side,
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                let value = parse_cell(token, size).ok_or_else(|| ParseBoardError::InvalidToken {
                    row,
                    col,
                    token: (*token).to_owned(),
                })?;
                board.set_cell(Position::new(row, col), value);
            }
        }
        Ok(board)
    }
}

fn parse_cell(token: &str, size: BoardSize) -> Option<u8> {
    if token == "." || token == "0" {
        return Some(0);
    }
    let value: u8 = token.parse().ok()?;
    (1..=size.max_value()).contains(&value).then_some(value)
}
