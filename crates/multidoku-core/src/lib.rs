//! Core data structures for multi-size Sudoku.
//!
//! This crate provides the board representation shared by the solving,
//! generation, and game-session crates. A board is a square grid of one of
//! three supported sizes (6x6, 8x8, 9x9), each tiled by rectangular
//! subgrid boxes:
//!
//! | Side | Box shape |
//! |------|-----------|
//! | 9    | 3 x 3     |
//! | 8    | 4 x 2     |
//! | 6    | 3 x 2     |
//!
//! Cells hold values `1..=side`, with `0` standing for an empty cell.
//! Placement operations validate their inputs and report failure through
//! `bool`/`Option` results; they never mutate the grid on rejection.
//!
//! # Examples
//!
//! ```
//! use multidoku_core::{Board, BoardSize, Position};
//!
//! let mut board = Board::new(BoardSize::Nine);
//! let pos = Position::new(0, 0);
//!
//! assert!(board.set_cell(pos, 5));
//! assert_eq!(board.get_cell(pos), Some(5));
//!
//! // 5 now conflicts with the rest of its row, column, and box
//! assert!(!board.is_valid_move(Position::new(0, 8), 5));
//! assert!(!board.is_valid_move(Position::new(2, 2), 5));
//! ```

pub mod board;
pub mod position;
pub mod size;
pub mod text;

// Re-export commonly used types
pub use self::{
    board::{Board, Move},
    position::Position,
    size::BoardSize,
    text::ParseBoardError,
};
