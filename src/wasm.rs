use std::str::FromStr;

use itertools::Itertools;
use wasm_bindgen::prelude::*;

use crate::config::GameMode;
use crate::game::{BoardStatus, Game, MoveOutcome, Phase};
use crate::position::Position;

/// Outcome of a call into [`WasmGame`], flattened for JavaScript.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The click was refused, e.g. it hit an empty cell.
    Rejected,
    Selected,
    Deselected,
    NoMatch,
    /// A pair was removed and play continues.
    Matched,
    /// A pair was removed and the board is now empty.
    Cleared,
    /// A pair was removed and no legal move remains, or a new deal is stuck.
    Stuck,
    /// A new deal or shuffle has a legal move.
    Ready,
}

impl Outcome {
    fn after_match(status: BoardStatus) -> Self {
        match status {
            BoardStatus::Continue => Self::Matched,
            BoardStatus::Cleared => Self::Cleared,
            BoardStatus::Stuck => Self::Stuck,
        }
    }
}

impl From<BoardStatus> for Outcome {
    fn from(value: BoardStatus) -> Self {
        match value {
            BoardStatus::Continue => Self::Ready,
            BoardStatus::Cleared => Self::Cleared,
            BoardStatus::Stuck => Self::Stuck,
        }
    }
}

fn flatten<'a>(positions: impl IntoIterator<Item=&'a Position>) -> Vec<u32> {
    positions.into_iter()
        .flat_map(|position| [position.row() as u32, position.col() as u32])
        .collect_vec()
}

/// A [`Game`] exposed to a browser front end. Coordinates are padded board coordinates.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a game in the mode named `mode` (`easy`, `normal` or `hard`); unknown names fall back to the default mode.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str) -> WasmGame {
        Self { game: Game::new(GameMode::from_str(mode).unwrap_or_default().config()) }
    }

    /// Start a reproducible game.
    pub fn seeded(mode: &str, seed: u64) -> WasmGame {
        Self { game: Game::with_seed(GameMode::from_str(mode).unwrap_or_default().config(), seed) }
    }

    /// Handle a click on `(row, col)`.
    pub fn select(&mut self, row: usize, col: usize) -> Outcome {
        match self.game.select(Position(row, col)) {
            Err(_) => Outcome::Rejected,
            Ok(MoveOutcome::Selected(_)) => Outcome::Selected,
            Ok(MoveOutcome::Deselected) => Outcome::Deselected,
            Ok(MoveOutcome::NoMatch(..)) => Outcome::NoMatch,
            Ok(MoveOutcome::Matched { status, .. }) => Outcome::after_match(status),
        }
    }

    /// The path of the last match as `[row, col, row, col, ...]`, or empty if none is awaiting clear.
    pub fn last_path(&self) -> Vec<u32> {
        match self.game.phase() {
            Phase::AwaitingClear(path) => flatten(path.positions()),
            _ => Vec::new(),
        }
    }

    /// Stop showing the last match.
    pub fn acknowledge(&mut self) {
        self.game.acknowledge()
    }

    /// A matchable pair as `[row, col, row, col]`, or empty if there is none.
    pub fn hint(&mut self) -> Vec<u32> {
        self.game.hint()
            .map_or_else(Vec::new, |(a, b)| flatten(&[a, b]))
    }

    /// Shuffle the remaining tiles.
    pub fn reshuffle(&mut self) -> Outcome {
        self.game.reshuffle().into()
    }

    /// Deal a new board.
    pub fn restart(&mut self) -> Outcome {
        self.game.restart().into()
    }

    /// The board as text, one line per row.
    pub fn render(&self) -> String {
        self.game.board().to_string()
    }
}
