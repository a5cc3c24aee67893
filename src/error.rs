use thiserror::Error;

use crate::position::Position;

/// Rejected board configurations.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A board needs at least one row and one column.
    #[error("board dimensions must be at least 1x1, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    /// A deal needs at least one tile type to draw from.
    #[error("at least one tile type is required")]
    ZeroTileTypes,
}

/// Selections the move engine refuses.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum SelectError {
    /// The cell is empty, on the border, or off the board.
    #[error("no tile at {0}")]
    NoTile(Position),
    /// A first tile is already picked; pick the second one or deselect.
    #[error("a tile is already selected at {0}")]
    AlreadySelected(Position),
    /// A second tile was offered without a first.
    #[error("no first tile selected")]
    NothingSelected,
}
