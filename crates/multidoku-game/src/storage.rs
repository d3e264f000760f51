//! File persistence for boards.
//!
//! Boards are stored in the plain-text grid format defined by
//! [`multidoku_core::text`]: one line per row, whitespace-separated
//! cells, `0` or `.` for empty. Loading re-validates the grid with the
//! solver and refuses any puzzle that does not have exactly one solution,
//! so a grid accepted by [`load_board`] is always playable.

use std::fs;
use std::path::Path;

use multidoku_core::{Board, ParseBoardError};
use multidoku_solver::Solver;

/// Errors produced when loading a board from a file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read puzzle file: {_0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a well-formed grid.
    #[display("malformed puzzle file: {_0}")]
    Parse(#[from] ParseBoardError),
    /// The grid parsed but does not have exactly one solution.
    #[display("puzzle does not have exactly one solution")]
    NotUnique,
}

/// Writes the board to `path` in the plain-text grid format.
///
/// # Errors
///
/// Propagates I/O errors from writing the file.
pub fn save_board<P: AsRef<Path>>(board: &Board, path: P) -> std::io::Result<()> {
    fs::write(path, board.to_string())
}

/// Reads a board from `path`, rejecting malformed or ambiguous grids.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, [`LoadError::Parse`] if
/// the contents are not a valid grid, and [`LoadError::NotUnique`] if the
/// grid does not have exactly one solution.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
    let text = fs::read_to_string(path)?;
    let board: Board = text.parse()?;
    if !Solver::new().has_unique_solution(&board) {
        return Err(LoadError::NotUnique);
    }
    Ok(board)
}
