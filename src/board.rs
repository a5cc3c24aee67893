use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::sync::atomic::{AtomicU64, Ordering};

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::config::BoardConfig;
use crate::grid::{Grid, Region};
use crate::path::Path;
use crate::pathfinder;
use crate::position::{Coord, Dimension, Position};
use crate::tile::{Tile, TileType};

// shared by every board so a stamp never repeats, even across boards
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

fn fresh_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// A playing field of `rows x cols` tiles surrounded by an empty border ring that paths may run along.
///
/// Positions are given in padded coordinates, so the playable cells are `Position(1, 1)` through `Position(rows, cols)`.
/// Use [`Board::new`] or [`Board::with_seed`] and then [`initialize`](Board::initialize) for a random deal,
/// or a [`BoardBuilder`](crate::builder::BoardBuilder) for an explicit layout.
///
/// Every mutation that can change occupancy or types assigns the board a fresh [`stamp`](Board::stamp),
/// which is what lets a [`PathFinder`](crate::PathFinder) notice its cache has gone stale.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) tile_types: NonZero<usize>,
    pub(crate) rng: StdRng,
    stamp: u64,
}

impl Board {
    /// An empty board for `config`, seeded from system entropy.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// An empty board for `config` whose deals and shuffles are reproducible from `seed`.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub(crate) fn with_rng(config: BoardConfig, rng: StdRng) -> Self {
        Self {
            grid: Grid::with_dims((config.rows, config.cols)),
            tile_types: config.tile_types,
            rng,
            stamp: fresh_stamp(),
        }
    }

    /// Number of playable rows.
    pub fn rows(&self) -> Dimension {
        self.grid.dims().0
    }

    /// Number of playable columns.
    pub fn cols(&self) -> Dimension {
        self.grid.dims().1
    }

    /// Number of distinct tile types a deal may use.
    pub fn tile_types(&self) -> NonZero<usize> {
        self.tile_types
    }

    /// Rows and columns of the board including the border ring, i.e. `(rows + 2, cols + 2)`.
    pub fn physical_dims(&self) -> (Coord, Coord) {
        self.grid.physical_dims()
    }

    /// Identifies the current occupancy and type assignment. Changes on every mutation and is never reused.
    pub fn stamp(&self) -> u64 {
        self.stamp
    }

    pub(crate) fn touch(&mut self) {
        self.stamp = fresh_stamp();
    }

    /// Deal a fresh random board.
    ///
    /// `rows * cols` is rounded down to an even tile count, and the pairs are spread as evenly as possible over the available types,
    /// lower types taking the remainder. Types are shuffled and laid out row-major; on an odd-sized board the last playable cell stays empty.
    pub fn initialize(&mut self) {
        let total_tiles = self.rows().get() * self.cols().get() / 2 * 2;
        let needed_pairs = total_tiles / 2;
        let types_used = self.tile_types.get().min(needed_pairs);

        let mut deck = Vec::with_capacity(total_tiles);
        if types_used > 0 {
            let base = needed_pairs / types_used;
            let remainder = needed_pairs % types_used;
            for (index, tile_type) in (1..=types_used).filter_map(NonZero::new).enumerate() {
                let pairs = if index < remainder { base + 1 } else { base };
                deck.extend(std::iter::repeat(tile_type).take(pairs * 2));
            }
        }
        deck.shuffle(&mut self.rng);

        self.grid.clear();
        let mut deck = deck.into_iter();
        for position in self.grid.playable_positions().collect_vec() {
            self.grid.set(position, deck.next().map(Tile::new));
        }
        self.touch();

        debug!(rows = self.rows().get(), cols = self.cols().get(), types = types_used, tiles = total_tiles, "dealt board");
    }

    /// The tile at `position`; [`None`] for empty, border, or out-of-range cells.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.grid.get(position).filter(Tile::is_active)
    }

    /// Whether a path may cross `position`.
    ///
    /// Border cells always are; playable cells are when they hold no active tile; out-of-range positions never are.
    pub fn is_empty(&self, position: Position) -> bool {
        match self.grid.region(position) {
            Region::Border => true,
            Region::Playable => self.tile(position).is_none(),
            Region::OutOfRange => false,
        }
    }

    /// Clear the cell at `position`. Does nothing for empty, border, or out-of-range cells.
    pub fn remove_tile(&mut self, position: Position) {
        if self.grid.set(position, None).is_some() {
            self.touch();
        }
    }

    pub(crate) fn place(&mut self, position: Position, tile_type: TileType) {
        self.grid.set(position, Some(Tile::new(tile_type)));
        self.touch();
    }

    /// Whether the tiles at `a` and `b` can be matched right now: two distinct active tiles of one type joined by a legal path.
    pub fn can_connect(&self, a: Position, b: Position) -> bool {
        if a == b {
            return false;
        }

        match (self.tile(a), self.tile(b)) {
            (Some(x), Some(y)) if x.tile_type() == y.tile_type() => self.connecting_path(a, b).is_some(),
            _ => false,
        }
    }

    /// The path [`pathfinder::search`] finds between `a` and `b`, uncached.
    pub fn connecting_path(&self, a: Position, b: Position) -> Option<Path> {
        pathfinder::search(self, a, b)
    }

    /// Positions holding an active tile, row-major.
    pub fn active_positions(&self) -> Vec<Position> {
        self.grid.active_positions()
    }

    /// Number of tiles still on the board.
    pub fn active_count(&self) -> usize {
        self.active_positions().len()
    }

    /// Every unordered pair of distinct active positions sharing a tile type, in row-major pair order.
    ///
    /// Whether they connect is not checked.
    pub fn same_type_pairs(&self) -> impl Iterator<Item=(Position, Position)> + '_ {
        self.active_positions()
            .into_iter()
            .tuple_combinations()
            .filter(|(a, b)| self.tile(*a).map(|t| t.tile_type()) == self.tile(*b).map(|t| t.tile_type()))
    }

    /// The first pair of [`same_type_pairs`](Self::same_type_pairs) that is connected by a legal path.
    pub fn available_move(&self) -> Option<(Position, Position)> {
        self.same_type_pairs().find(|(a, b)| self.connecting_path(*a, *b).is_some())
    }

    /// Whether at least one legal match exists.
    pub fn has_available_moves(&self) -> bool {
        self.available_move().is_some()
    }

    /// Whether every tile has been cleared.
    pub fn is_game_complete(&self) -> bool {
        self.grid.playable_positions().all(|position| self.tile(position).is_none())
    }

    /// Randomly redistribute the types of the remaining tiles over the cells they occupy.
    ///
    /// The set of occupied cells is unchanged. The result may still have no legal move;
    /// callers should check [`has_available_moves`](Self::has_available_moves) and deal again if so.
    pub fn shuffle(&mut self) {
        let positions = self.active_positions();
        let mut types = positions.iter()
            .filter_map(|position| self.tile(*position))
            .map(|tile| tile.tile_type())
            .collect_vec();
        types.shuffle(&mut self.rng);

        for (position, tile_type) in positions.iter().zip(types) {
            self.grid.set(*position, Some(Tile::new(tile_type)));
        }
        self.touch();

        debug!(tiles = positions.len(), "shuffled board");
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.rows().get() * (self.cols().get() + 1));

        for row in 1..=self.rows().get() {
            for col in 1..=self.cols().get() {
                out.push(self.tile(Position(row, col)).map_or('.', |tile| tile.glyph()));
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
