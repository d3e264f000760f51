//! Game sessions over multidoku puzzles.
//!
//! A [`Game`] wraps a board with the play policies that sit outside the
//! core engine: given cells that cannot be modified, a wrong-guess
//! budget, a hint quota, and difficulty presets mapping to clue counts.
//! The [`storage`] module persists boards in the plain-text grid format
//! and refuses to load any grid that does not have exactly one solution.
//!
//! # Examples
//!
//! ```
//! use multidoku_core::BoardSize;
//! use multidoku_game::{Difficulty, Game};
//! use multidoku_generator::PuzzleGenerator;
//!
//! let mut generator = PuzzleGenerator::from_seed(42);
//! let game = Game::generate(&mut generator, BoardSize::Six, Difficulty::Easy).unwrap();
//!
//! assert!(!game.is_solved());
//! assert_eq!(game.wrong_attempts_left(), Game::MAX_WRONG_ATTEMPTS);
//! ```

pub use self::{
    difficulty::Difficulty,
    game::{Game, GameError, PlacementOutcome},
    storage::{LoadError, load_board, save_board},
};

mod difficulty;
mod game;
pub mod storage;
