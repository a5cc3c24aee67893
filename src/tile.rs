use std::num::NonZero;

/// Identifier of a tile picture. Types run from `1` up to the board's configured type count; `0` is reserved for "no tile".
pub type TileType = NonZero<usize>;

const GLYPHS: &[u8] = b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A tile sitting in a playable cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tile {
    tile_type: TileType,
    active: bool,
}

impl Tile {
    /// A fresh, active tile of `tile_type`.
    pub fn new(tile_type: TileType) -> Self {
        Self { tile_type, active: true }
    }

    /// The picture this tile shows.
    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    /// Whether the tile is still on the board.
    ///
    /// Removing a tile clears its cell outright, so every tile a board hands out is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn glyph(&self) -> char {
        glyph_of(self.tile_type)
    }
}

/// Text glyph for `tile_type`; types past the glyph table print as `?`.
pub(crate) fn glyph_of(tile_type: TileType) -> char {
    GLYPHS.get(tile_type.get() - 1).map_or('?', |g| *g as char)
}

/// Inverse of [`glyph_of`]. `None` for anything outside the glyph table, including `.`.
pub(crate) fn type_of_glyph(glyph: char) -> Option<TileType> {
    GLYPHS.iter()
        .position(|g| *g as char == glyph)
        .and_then(|index| NonZero::new(index + 1))
}
