//! Supported board sizes and their subgrid geometry.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;

/// One of the three supported board sizes.
///
/// Each size pairs a side length with a fixed rectangular box shape that
/// exactly tiles the grid: `box_rows * box_cols == side`.
///
/// # Examples
///
/// ```
/// use multidoku_core::BoardSize;
///
/// let size = BoardSize::Six;
/// assert_eq!(size.side(), 6);
/// assert_eq!((size.box_rows(), size.box_cols()), (3, 2));
///
/// for size in BoardSize::ALL {
///     assert_eq!(size.box_rows() * size.box_cols(), size.side());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoardSize {
    /// A 6x6 grid with 3x2 boxes.
    Six,
    /// An 8x8 grid with 4x2 boxes.
    Eight,
    /// A 9x9 grid with 3x3 boxes.
    Nine,
}

impl BoardSize {
    /// Array containing all supported sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Six, Self::Eight, Self::Nine];

    /// Creates a size from a side length, if it is one of 6, 8, or 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use multidoku_core::BoardSize;
    ///
    /// assert_eq!(BoardSize::from_side(9), Some(BoardSize::Nine));
    /// assert_eq!(BoardSize::from_side(7), None);
    /// ```
    #[must_use]
    pub const fn from_side(side: usize) -> Option<Self> {
        match side {
            6 => Some(Self::Six),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// Returns the number of cells along one side of the grid.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            Self::Six => 6,
            Self::Eight => 8,
            Self::Nine => 9,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Returns the number of rows in each subgrid box.
    #[must_use]
    pub const fn box_rows(self) -> usize {
        match self {
            Self::Six | Self::Nine => 3,
            Self::Eight => 4,
        }
    }

    /// Returns the number of columns in each subgrid box.
    #[must_use]
    pub const fn box_cols(self) -> usize {
        match self {
            Self::Six | Self::Eight => 2,
            Self::Nine => 3,
        }
    }

    /// Returns the range of playable cell values, `1..=side`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multidoku_core::BoardSize;
    ///
    /// let values: Vec<u8> = BoardSize::Six.values().collect();
    /// assert_eq!(values, [1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn values(self) -> RangeInclusive<u8> {
        1..=self.side() as u8
    }

    /// Returns the largest playable cell value, equal to the side length.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn max_value(self) -> u8 {
        self.side() as u8
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{n}x{n}", n = self.side())
    }
}
