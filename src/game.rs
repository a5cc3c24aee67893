use tracing::debug;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::SelectError;
use crate::path::Path;
use crate::pathfinder::PathFinder;
use crate::position::Position;

/// Where the engine is in a move attempt.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    /// Nothing selected.
    #[default]
    Idle,
    /// One tile picked, waiting for its partner.
    FirstPicked(Position),
    /// A pair was just cleared along this path. The tiles are already gone; the path is kept for the presentation layer
    /// until it [`acknowledge`](Game::acknowledge)s it or selects again.
    AwaitingClear(Path),
}

/// What is left to do on the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoardStatus {
    /// At least one legal match remains.
    Continue,
    /// Every tile has been removed.
    Cleared,
    /// Tiles remain but none can be matched.
    Stuck,
}

/// Result of a selection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The tile became the first half of a candidate pair.
    Selected(Position),
    /// The selected tile was picked again and is no longer selected.
    Deselected,
    /// The two tiles differ in type or cannot be connected; the selection is dropped.
    NoMatch(Position, Position),
    /// Both tiles were removed. `path` is the route that joined them.
    Matched { path: Path, status: BoardStatus },
}

/// Move engine: tracks the selection, validates candidate pairs, removes matched tiles, and reports what the board looks like afterwards.
///
/// Owns the [`Board`] and a [`PathFinder`] for it. Nothing here sleeps or schedules;
/// how long a matched path stays on screen is up to the caller.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    finder: PathFinder,
    phase: Phase,
}

impl Game {
    /// Start a game on a fresh random deal for `config` that has at least one legal move.
    pub fn new(config: BoardConfig) -> Self {
        Self::dealt(Board::new(config))
    }

    /// Like [`new`](Self::new), with reproducible deals and shuffles.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::dealt(Board::with_seed(config, seed))
    }

    fn dealt(mut board: Board) -> Self {
        board.initialize();
        let mut game = Self::from_board(board);
        game.settle();
        game
    }

    /// Play on `board` exactly as given. No dealing or shuffling happens, even if the board is stuck.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            finder: PathFinder::new(),
            phase: Phase::Idle,
        }
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current selection state.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether the board is cleared, stuck, or still playable.
    pub fn status(&self) -> BoardStatus {
        if self.board.is_game_complete() {
            BoardStatus::Cleared
        } else if self.board.has_available_moves() {
            BoardStatus::Continue
        } else {
            BoardStatus::Stuck
        }
    }

    /// Click-style selection: picks a first tile, deselects it when picked again, or tries to match a second tile.
    pub fn select(&mut self, position: Position) -> Result<MoveOutcome, SelectError> {
        match self.phase {
            Phase::FirstPicked(first) if first == position => {
                self.phase = Phase::Idle;
                Ok(MoveOutcome::Deselected)
            }
            Phase::FirstPicked(_) => self.select_second(position),
            Phase::Idle | Phase::AwaitingClear(_) => {
                self.select_first(position)?;
                Ok(MoveOutcome::Selected(position))
            }
        }
    }

    /// Pick the first tile of a pair.
    ///
    /// Fails if `position` has no active tile or a first tile is already picked. Dismisses a path awaiting clear.
    pub fn select_first(&mut self, position: Position) -> Result<(), SelectError> {
        if let Phase::FirstPicked(first) = self.phase {
            return Err(SelectError::AlreadySelected(first));
        }
        if self.board.tile(position).is_none() {
            return Err(SelectError::NoTile(position));
        }

        self.phase = Phase::FirstPicked(position);
        Ok(())
    }

    /// Pick the second tile and evaluate the pair.
    ///
    /// Picking the first tile again deselects it. A failed match drops the selection;
    /// a successful one removes both tiles and reports the path along with the resulting [`BoardStatus`].
    pub fn select_second(&mut self, position: Position) -> Result<MoveOutcome, SelectError> {
        let Phase::FirstPicked(first) = self.phase else {
            return Err(SelectError::NothingSelected);
        };

        if first == position {
            self.phase = Phase::Idle;
            return Ok(MoveOutcome::Deselected);
        }
        if self.board.tile(position).is_none() {
            return Err(SelectError::NoTile(position));
        }

        let same_type = self.board.tile(first).map(|t| t.tile_type()) == self.board.tile(position).map(|t| t.tile_type());
        let path = if same_type { self.finder.find_path(&self.board, first, position) } else { None };

        let Some(path) = path else {
            debug!(%first, second = %position, "no match");
            self.phase = Phase::Idle;
            return Ok(MoveOutcome::NoMatch(first, position));
        };

        self.board.remove_tile(first);
        self.board.remove_tile(position);
        let status = self.status();
        debug!(%path, ?status, remaining = self.board.active_count(), "matched pair");

        self.phase = Phase::AwaitingClear(path.clone());
        Ok(MoveOutcome::Matched { path, status })
    }

    /// Drop a path awaiting clear, returning to [`Phase::Idle`]. Does nothing in any other phase.
    pub fn acknowledge(&mut self) {
        if let Phase::AwaitingClear(_) = self.phase {
            self.phase = Phase::Idle;
        }
    }

    /// The first connectable pair, scanning pairs of active tiles in row-major order. Clears any selection.
    pub fn hint(&mut self) -> Option<(Position, Position)> {
        self.phase = Phase::Idle;

        let board = &self.board;
        let finder = &mut self.finder;
        board.same_type_pairs()
            .find(|(a, b)| finder.find_path(board, *a, *b).is_some())
    }

    /// Shuffle the remaining tiles, dealing afresh if that leaves no legal move. Clears any selection.
    pub fn reshuffle(&mut self) -> BoardStatus {
        self.phase = Phase::Idle;
        self.board.shuffle();
        self.settle_after_shuffle()
    }

    /// Deal a new board with the same dimensions and types. Clears any selection.
    pub fn restart(&mut self) -> BoardStatus {
        self.phase = Phase::Idle;
        self.board.initialize();
        self.settle()
    }

    /// Make sure a fresh deal has a legal move: shuffle once, then deal again until one exists.
    fn settle(&mut self) -> BoardStatus {
        match self.status() {
            BoardStatus::Stuck => {
                debug!("dealt a stuck board, shuffling");
                self.board.shuffle();
                self.settle_after_shuffle()
            }
            status => status,
        }
    }

    fn settle_after_shuffle(&mut self) -> BoardStatus {
        let mut deals = 0usize;
        loop {
            match self.status() {
                BoardStatus::Stuck => {
                    deals += 1;
                    debug!(deals, "board still stuck, dealing again");
                    self.board.initialize();
                }
                status => return status,
            }
        }
    }
}
