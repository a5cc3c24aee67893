use itertools::Itertools;
use ndarray::Array2;

use crate::position::{Coord, Dimension, Position};
use crate::tile::Tile;

/// Where a position falls relative to the padded storage.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Region {
    /// The always-empty ring around the playable area.
    Border,
    Playable,
    OutOfRange,
}

/// Tile storage for a `rows x cols` playing field, padded by one empty cell on every side.
///
/// Playable cells live at `1..=rows` by `1..=cols`; physical storage spans `0..rows + 2` by `0..cols + 2`.
/// [`Grid::region`] is the one place positions are checked against those bounds.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    // rows, cols of the playable area
    dims: (Dimension, Dimension),
    cells: Array2<Option<Tile>>,
}

impl Grid {
    pub(crate) fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.0.get() + 2, dims.1.get() + 2), None),
        }
    }

    #[inline]
    pub(crate) fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Rows and columns of the padded storage.
    #[inline]
    pub(crate) fn physical_dims(&self) -> (Coord, Coord) {
        self.cells.dim()
    }

    pub(crate) fn region(&self, position: Position) -> Region {
        Self::region_within(self.dims, position)
    }

    /// Classify `position` against a padded grid whose playable area is `dims`.
    pub(crate) fn region_within(dims: (Dimension, Dimension), position: Position) -> Region {
        let (rows, cols) = (dims.0.get() + 2, dims.1.get() + 2);
        if position.row() >= rows || position.col() >= cols {
            Region::OutOfRange
        } else if position.row() == 0 || position.col() == 0 || position.row() == rows - 1 || position.col() == cols - 1 {
            Region::Border
        } else {
            Region::Playable
        }
    }

    pub(crate) fn get(&self, position: Position) -> Option<Tile> {
        match self.region(position) {
            Region::Playable => self.cells[position.as_index()],
            _ => None,
        }
    }

    /// Store `tile` at `position`, returning whatever was there.
    ///
    /// Writes outside the playable area are dropped so the border ring stays empty.
    pub(crate) fn set(&mut self, position: Position, tile: Option<Tile>) -> Option<Tile> {
        match self.region(position) {
            Region::Playable => std::mem::replace(&mut self.cells[position.as_index()], tile),
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Every playable position in row-major order.
    pub(crate) fn playable_positions(&self) -> impl Iterator<Item=Position> {
        (1..=self.dims.0.get())
            .cartesian_product(1..=self.dims.1.get())
            .map(Position::from)
    }

    /// Positions holding an active tile, in row-major order.
    pub(crate) fn active_positions(&self) -> Vec<Position> {
        self.playable_positions()
            .filter(|position| self.get(*position).is_some_and(|tile| tile.is_active()))
            .collect_vec()
    }
}
