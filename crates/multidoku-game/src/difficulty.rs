//! Difficulty presets.

use std::fmt::{self, Display};

use multidoku_core::BoardSize;

/// Difficulty level, expressed as the number of clues to retain.
///
/// Difficulty is a presentation-layer policy: the engine only ever sees
/// the resulting clue count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// The most clues; little search required of the player.
    Easy,
    /// The default level.
    Medium,
    /// The fewest clues.
    Hard,
}

impl Difficulty {
    /// Array containing all difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of clues to retain for a board size.
    ///
    /// # Examples
    ///
    /// ```
    /// use multidoku_core::BoardSize;
    /// use multidoku_game::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.clue_count(BoardSize::Nine), 36);
    /// assert_eq!(Difficulty::Hard.clue_count(BoardSize::Six), 12);
    /// ```
    #[must_use]
    pub const fn clue_count(self, size: BoardSize) -> usize {
        match (size, self) {
            (BoardSize::Nine, Self::Easy) => 36,
            (BoardSize::Nine, Self::Medium) | (BoardSize::Eight, Self::Easy) => 30,
            (BoardSize::Nine, Self::Hard) | (BoardSize::Eight, Self::Medium) => 25,
            (BoardSize::Eight, Self::Hard) | (BoardSize::Six, Self::Easy) => 20,
            (BoardSize::Six, Self::Medium) => 16,
            (BoardSize::Six, Self::Hard) => 12,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(name)
    }
}
