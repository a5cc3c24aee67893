use std::cmp::Ordering;

use strum::VariantArray;

use crate::position::Position;

/// One of the four axis-aligned moves a connecting path can make between adjacent cells.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// Attempt the step from `position` and return the resulting [`Position`].
    pub fn attempt_from(&self, position: Position) -> Position {
        match self {
            Self::Up => position.offset_by((-1, 0)),
            Self::Down => position.offset_by((1, 0)),
            Self::Left => position.offset_by((0, -1)),
            Self::Right => position.offset_by((0, 1)),
        }
    }

    /// The direction leading from `a` straight to `b`.
    ///
    /// Returns [`None`] if the two positions are equal or share neither a row nor a column.
    pub fn toward(a: Position, b: Position) -> Option<Self> {
        match (a.row().cmp(&b.row()), a.col().cmp(&b.col())) {
            (Ordering::Greater, Ordering::Equal) => Some(Self::Up),
            (Ordering::Less, Ordering::Equal) => Some(Self::Down),
            (Ordering::Equal, Ordering::Greater) => Some(Self::Left),
            (Ordering::Equal, Ordering::Less) => Some(Self::Right),
            _ => None,
        }
    }

    /// Determine the direction from `a` to an adjacent `b` by trying every variant.
    pub fn between_adjacent(a: Position, b: Position) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|dir| dir.attempt_from(a) == b)
    }
}
