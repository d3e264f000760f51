//! Board coordinates.

use std::fmt::{self, Display};

/// A zero-based `(row, col)` coordinate on a board.
///
/// Positions carry no size information of their own; whether a position is
/// in range depends on the board it is used with.
///
/// # Examples
///
/// ```
/// use multidoku_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 5);
/// assert_eq!(pos.to_string(), "r2c5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
