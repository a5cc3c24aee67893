use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// A single row or column coordinate.
pub type Coord = usize;
/// A row or column count. Boards are never empty along either axis.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A cell `(row, col)` on a board, in padded coordinates.
///
/// Row and column `0` belong to the border ring; the playable area starts at `Position(1, 1)`.
pub struct Position(pub Coord, pub Coord);

impl Position {
    /// The row of this position.
    #[inline]
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this position.
    #[inline]
    pub fn col(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    /// Shift by `(rows, cols)`. Stepping off the top or left edge wraps to a huge coordinate, which every board treats as out of range.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether `self` and `other` share a row or a column.
    pub fn is_aligned_with(&self, other: Position) -> bool {
        self.0 == other.0 || self.1 == other.1
    }
}

impl From<(Ix, Ix)> for Position {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
