use std::collections::HashMap;
use std::num::NonZero;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::grid::{Grid, Region};
use crate::position::{Dimension, Position};
use crate::tile::{type_of_glyph, TileType};

/// Reasons a builder may become invalid while building.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile was placed outside the playable area, which includes placing it on the border ring.
    #[error("tile placed outside the playable area at {0}")]
    TileOutOfBounds(Position),
    /// A tile type larger than the configured type count was placed.
    #[error("tile type {0} exceeds the configured type count")]
    TypeOutOfRange(TileType),
    /// A layout had rows of different lengths, or no rows at all.
    #[error("layout rows differ in length or the layout is empty")]
    RaggedLayout,
    /// A layout held a character that is neither `.` nor a tile glyph.
    #[error("unrecognised layout glyph {0:?}")]
    UnknownGlyph(char),
    /// A tile type occurs an odd number of times, so one of its tiles could never be matched.
    #[error("tile type {0} occurs an odd number of times")]
    UnpairedType(TileType),
}

/// Builds a [`Board`] with a chosen layout instead of a random deal.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once any [`BuilderInvalidReason`] arises, further calls are ignored and [`build`](Self::build) reports the reasons.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    tile_types: Option<NonZero<usize>>,
    tiles: HashMap<Position, TileType>,
    seed: Option<u64>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(6).unwrap(), NonZero::new(6).unwrap()))
    }
}

impl BoardBuilder {
    /// Construct a new, empty [`Self`] with the specified playable dimensions, specified in `(rows, cols)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            tile_types: None,
            tiles: Default::default(),
            seed: None,
            invalid_reasons: Default::default(),
        }
    }

    /// Parse a layout of one line per row, using `.` for empty cells and tile glyphs (`1`-`9`, `A`-`Z`, `a`-`z`) for types.
    ///
    /// Leading and trailing blank lines and surrounding whitespace on each line are ignored.
    pub fn from_layout(layout: &str) -> Self {
        let lines = layout.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();

        let cols = lines.first().map_or(0, |line| line.chars().count());
        let (Some(rows), Some(cols)) = (NonZero::new(lines.len()), NonZero::new(cols)) else {
            let mut builder = Self::default();
            builder.invalid_reasons.push(BuilderInvalidReason::RaggedLayout);
            return builder;
        };

        let mut builder = Self::with_dims((rows, cols));
        if lines.iter().any(|line| line.chars().count() != cols.get()) {
            builder.invalid_reasons.push(BuilderInvalidReason::RaggedLayout);
            return builder;
        }

        for (row, line) in lines.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                if glyph == '.' {
                    continue;
                }
                match type_of_glyph(glyph) {
                    Some(tile_type) => builder.place(tile_type, Position(row + 1, col + 1)),
                    None => {
                        builder.invalid_reasons.push(BuilderInvalidReason::UnknownGlyph(glyph));
                        return builder;
                    }
                };
            }
        }

        builder
    }

    /// Set the number of tile types later deals may use.
    ///
    /// If never called, the highest placed type is used (or `1` for a board with no tiles).
    pub fn tile_types(&mut self, tile_types: NonZero<usize>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.tile_types = Some(tile_types);
        self
    }

    /// Seed the board's random number generator so later shuffles and deals are reproducible.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Put a tile of `tile_type` at `position`, replacing anything placed there before.
    ///
    /// May cause the builder to enter a [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds) invalid state if `position` is not playable.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place(&mut self, tile_type: TileType, position: Position) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if Grid::region_within(self.dims, position) != Region::Playable {
            self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds(position));
            return self;
        }

        self.tiles.insert(position, tile_type);
        self
    }

    /// Place two tiles of `tile_type`. The order of `positions` does not matter.
    pub fn place_pair(&mut self, tile_type: TileType, positions: (Position, Position)) -> &mut Self {
        self.place(tile_type, positions.0).place(tile_type, positions.1)
    }

    /// Remove whatever was placed at `position`, if anything.
    pub fn clear(&mut self, position: Position) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.tiles.remove(&position);
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    ///
    /// On top of any reason recorded while building, placed types are checked against the configured type count
    /// and every type must occur an even number of times. If anything is wrong, the collected reasons say why.
    pub fn build(&mut self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            let counts = self.tiles.values().copied().counts();

            if let Some(limit) = self.tile_types {
                self.invalid_reasons.extend(counts.keys()
                    .filter(|tile_type| **tile_type > limit)
                    .sorted()
                    .map(|tile_type| BuilderInvalidReason::TypeOutOfRange(*tile_type)));
            }

            self.invalid_reasons.extend(counts.iter()
                .filter(|(_, count)| **count % 2 != 0)
                .map(|(tile_type, _)| *tile_type)
                .sorted()
                .map(BuilderInvalidReason::UnpairedType));
        }

        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let tile_types = self.tile_types
            .or_else(|| self.tiles.values().max().copied())
            .unwrap_or(NonZero::<usize>::MIN);
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut board = Board::with_rng(BoardConfig::new(self.dims.0, self.dims.1, tile_types), rng);
        for (position, tile_type) in self.tiles.iter().sorted() {
            board.place(*position, *tile_type);
        }

        Ok(board)
    }
}
