#![warn(missing_docs)]

//! # `lianliankan`
//!
//! Board model and path search for [Lianliankan](https://en.wikipedia.org/wiki/Shisen-Sho)-style tile matching puzzles,
//! where two tiles of the same picture can be removed if a line with at most two bends joins them without crossing another tile.
//! Start a [`Game`] from a [`GameMode`] preset or a [`BoardConfig`], then feed it selections; or drive a [`Board`] and [`PathFinder`] directly.
//! Explicit layouts can be set up with a [`BoardBuilder`](builder::BoardBuilder).
//!
//! Rendering, input, timers and the like belong to the host. Everything here is synchronous and performs no I/O.
//!
//! # Internals
//! A `rows x cols` board is stored padded by a ring of permanently empty cells, so lines may run around the outside of the tiles.
//! [`Position`]s are given in these padded coordinates: the playable area runs from `Position(1, 1)` to `Position(rows, cols)`.
//!
//! [`pathfinder::search`] tries, in order:
//! 1. a straight line along a shared row or column,
//! 2. one bend, turning at `(start.row, end.col)` or else `(end.row, start.col)`,
//! 3. two bends, turning only at empty cells within two rows and columns of either endpoint.
//!
//! The first legal line wins, so fewer bends are always preferred. The third step is deliberately local:
//! a legal two-bend line whose turns lie further out is not found.
//!
//! Deals always place every type an even number of times. A [`Game`] additionally makes sure a new deal has at least one legal move,
//! shuffling and then dealing again if it does not.

pub use board::Board;
pub use config::{BoardConfig, GameMode};
pub use error::{ConfigError, SelectError};
pub use game::{BoardStatus, Game, MoveOutcome, Phase};
pub use path::Path;
pub use pathfinder::PathFinder;
pub use position::{Coord, Dimension, Position};
pub use step::Step;
pub use tile::{Tile, TileType};

pub(crate) mod board;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod game;
pub(crate) mod grid;
pub(crate) mod path;
pub mod pathfinder;
pub(crate) mod position;
pub(crate) mod step;
pub(crate) mod tile;
pub mod builder;
#[cfg(feature = "wasm")]
pub mod wasm;
