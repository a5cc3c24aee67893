use std::num::NonZero;

use strum::{Display, EnumString, VariantArray};

use crate::error::ConfigError;
use crate::position::Dimension;

/// The three numbers a board is built from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoardConfig {
    /// Playable rows.
    pub rows: Dimension,
    /// Playable columns.
    pub cols: Dimension,
    /// Distinct tile types available to a deal.
    pub tile_types: NonZero<usize>,
}

impl BoardConfig {
    /// Construct a config from already-validated parts.
    pub fn new(rows: Dimension, cols: Dimension, tile_types: NonZero<usize>) -> Self {
        Self { rows, cols, tile_types }
    }

    /// Construct a config from plain integers, rejecting zeroes.
    pub fn try_new(rows: usize, cols: usize, tile_types: usize) -> Result<Self, ConfigError> {
        let (Some(r), Some(c)) = (NonZero::new(rows), NonZero::new(cols)) else {
            return Err(ConfigError::ZeroDimension { rows, cols });
        };
        let tile_types = NonZero::new(tile_types).ok_or(ConfigError::ZeroTileTypes)?;

        Ok(Self::new(r, c, tile_types))
    }
}

/// Preset difficulty levels offered to players.
#[derive(Copy, Clone, Debug, Default, Display, EnumString, VariantArray, Eq, PartialEq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// 6x6 with 12 tile types.
    #[strum(to_string = "6×6 Easy", serialize = "easy")]
    Easy,
    /// 8x8 with 18 tile types.
    #[default]
    #[strum(to_string = "8×8 Normal", serialize = "normal")]
    Normal,
    /// 10x10 with 24 tile types.
    #[strum(to_string = "10×10 Hard", serialize = "hard")]
    Hard,
}

impl GameMode {
    /// The board this mode plays on.
    pub fn config(&self) -> BoardConfig {
        let (rows, cols, tile_types) = match self {
            Self::Easy => (6, 6, 12),
            Self::Normal => (8, 8, 18),
            Self::Hard => (10, 10, 24),
        };

        // preset values are all nonzero
        BoardConfig::try_new(rows, cols, tile_types).unwrap()
    }
}

impl From<GameMode> for BoardConfig {
    fn from(value: GameMode) -> Self {
        value.config()
    }
}
