use std::collections::HashMap;

use itertools::Itertools;
use tracing::trace;
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::path::Path;
use crate::position::Position;

/// How far around each endpoint the two-bend search looks for bend points, in rows and columns.
pub const BEND_SEARCH_RADIUS: usize = 2;

/// Find a route between the tiles at `start` and `end` with at most two bends, without caching.
///
/// Both cells must hold active tiles of the same type and must differ.
/// Candidates are tried straight, then one bend, then two bends, and the first legal route wins.
/// Two-bend routes only consider bend points within [`BEND_SEARCH_RADIUS`] of either endpoint, so a legal route bending further out can be missed.
pub fn search(board: &Board, start: Position, end: Position) -> Option<Path> {
    if start == end {
        return None;
    }

    match (board.tile(start), board.tile(end)) {
        (Some(a), Some(b)) if a.tile_type() == b.tile_type() => {}
        _ => return None,
    }

    straight(board, start, end)
        .or_else(|| one_bend(board, start, end))
        .or_else(|| two_bends(board, start, end))
}

/// A clear straight leg from `from` to `to`: aligned, and every cell strictly between them passable.
fn straight(board: &Board, from: Position, to: Position) -> Option<Path> {
    let leg = Path::straight(from, to)?;
    leg.crossed().iter()
        .all(|position| board.is_empty(*position))
        .then_some(leg)
}

fn one_bend(board: &Board, start: Position, end: Position) -> Option<Path> {
    [Position(start.row(), end.col()), Position(end.row(), start.col())]
        .into_iter()
        .filter(|corner| board.is_empty(*corner))
        .find_map(|corner| {
            let first = straight(board, start, corner)?;
            let second = straight(board, corner, end)?;
            Some(Path::join([first, second]))
        })
}

/// Passable cells in the box of `BEND_SEARCH_RADIUS` around `center`, row-major.
fn passable_around(board: &Board, center: Position) -> impl Iterator<Item=Position> + '_ {
    let (rows, cols) = board.physical_dims();
    let row_range = center.row().saturating_sub(BEND_SEARCH_RADIUS)..=(center.row() + BEND_SEARCH_RADIUS).min(rows - 1);
    let col_range = center.col().saturating_sub(BEND_SEARCH_RADIUS)..=(center.col() + BEND_SEARCH_RADIUS).min(cols - 1);

    row_range.cartesian_product(col_range)
        .map(Position::from)
        .filter(|position| board.is_empty(*position))
}

fn two_bends(board: &Board, start: Position, end: Position) -> Option<Path> {
    let candidates = passable_around(board, start)
        .chain(passable_around(board, end))
        .unique()
        .collect_vec();

    for first_bend in &candidates {
        let Some(first) = straight(board, start, *first_bend) else {
            continue;
        };

        for second_bend in candidates.iter().filter(|c| *c != first_bend) {
            let Some(middle) = straight(board, *first_bend, *second_bend) else {
                continue;
            };
            let Some(last) = straight(board, *second_bend, end) else {
                continue;
            };

            return Some(Path::join([first, middle, last]));
        }
    }

    None
}

/// Memoizing front end to [`search`].
///
/// Found paths are cached per unordered pair of endpoints, so asking for `(a, b)` after `(b, a)` is a hit.
/// Failed searches are not cached.
/// The cache belongs to one board state: whenever it is handed a board whose [`stamp`](Board::stamp) differs from the one it was filled under, it empties itself before answering.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    cache: HashMap<UnorderedPair<Position>, Path>,
    stamp: Option<u64>,
}

impl PathFinder {
    /// An empty finder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`search`], answering from the cache when possible. The returned path always leaves from `start`.
    pub fn find_path(&mut self, board: &Board, start: Position, end: Position) -> Option<Path> {
        if start == end {
            return None;
        }

        self.sync(board);

        let key = UnorderedPair::from((start, end));
        if let Some(path) = self.cache.get(&key) {
            trace!(%start, %end, "path cache hit");
            return Some(if path.start() == start { path.clone() } else { path.reversed() });
        }

        trace!(%start, %end, "path cache miss");
        let path = search(board, start, end)?;
        self.cache.insert(key, path.clone());
        Some(path)
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every cached path.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn sync(&mut self, board: &Board) {
        if self.stamp != Some(board.stamp()) {
            if !self.cache.is_empty() {
                trace!(dropped = self.cache.len(), "board changed, clearing path cache");
            }
            self.cache.clear();
            self.stamp = Some(board.stamp());
        }
    }
}
