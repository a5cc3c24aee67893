use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::position::Position;
use crate::step::Step;

/// A connecting route between two tiles: every cell visited from `start` to `end`, both inclusive.
///
/// Consecutive positions are always orthogonally adjacent.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Path {
    positions: Vec<Position>,
}

impl Path {
    /// The straight run of cells from `from` to `to`, inclusive.
    ///
    /// `None` unless the two positions are distinct and share a row or column.
    pub(crate) fn straight(from: Position, to: Position) -> Option<Self> {
        let step = Step::toward(from, to)?;
        let mut positions = vec![from];
        let mut here = from;
        while here != to {
            here = step.attempt_from(here);
            positions.push(here);
        }
        Some(Self { positions })
    }

    /// Concatenate legs that meet end to start, dropping the duplicated joints.
    pub(crate) fn join(legs: impl IntoIterator<Item=Path>) -> Self {
        let mut positions: Vec<Position> = Vec::new();
        for leg in legs {
            let skip = match (positions.last(), leg.positions.first()) {
                (Some(last), Some(first)) if last == first => 1,
                _ => 0,
            };
            positions.extend(leg.positions.into_iter().skip(skip));
        }
        Self { positions }
    }

    /// All visited cells, in order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The cell the path leaves from.
    pub fn start(&self) -> Position {
        self.positions[0]
    }

    /// The cell the path arrives at.
    pub fn end(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Number of visited cells, endpoints included.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A path always holds at least its two endpoints; this exists for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Cells strictly between the endpoints, i.e. the empty or border cells the line is drawn across.
    pub fn crossed(&self) -> &[Position] {
        &self.positions[1..self.positions.len() - 1]
    }

    /// Number of 90 degree turns along the path.
    pub fn bends(&self) -> usize {
        self.positions.iter()
            .tuple_windows()
            .filter_map(|(a, b)| Step::between_adjacent(*a, *b))
            .dedup()
            .count()
            .saturating_sub(1)
    }

    /// The same route walked from `end` to `start`.
    pub fn reversed(&self) -> Self {
        Self { positions: self.positions.iter().rev().copied().collect_vec() }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.positions.iter().join(" -> "))
    }
}
