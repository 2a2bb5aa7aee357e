//! Grid-backed [`Dungeon`] implementation.

use crate::env::{Dungeon, MapDimensions};
use crate::state::{Position, Tile, TileKind};

/// Errors raised while parsing an ASCII map.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapParseError {
    #[error("map is empty")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },
}

/// Dense tile grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    dimensions: MapDimensions,
    tiles: Vec<Tile>,
    depth: i32,
}

/// A parsed ASCII map plus the markers found on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiMap {
    pub map: TileMap,
    /// `@` and ASCII letters, in reading order. Their tiles are floor.
    pub markers: Vec<(char, Position)>,
}

impl TileMap {
    /// A map of `width` x `height` tiles of `kind`.
    pub fn filled(width: u32, height: u32, kind: TileKind) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            tiles: vec![Tile::new(kind); (width * height) as usize],
            depth: 1,
        }
    }

    /// Parses rows of tile glyphs. The first row is the northernmost (highest
    /// y), so the text reads the way the map renders.
    pub fn from_ascii(text: &str) -> Result<AsciiMap, MapParseError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map(|row| row.chars().count()).ok_or(MapParseError::Empty)?;
        let height = rows.len();

        let mut map = Self::filled(width as u32, height as u32, TileKind::Floor);
        let mut markers = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapParseError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            let y = (height - 1 - row) as i32;
            for (column, glyph) in line.chars().enumerate() {
                let position = Position::new(column as i32, y);
                let kind = match TileKind::from_glyph(glyph) {
                    Some(kind) => kind,
                    None if glyph == '@' || glyph.is_ascii_alphabetic() => {
                        markers.push((glyph, position));
                        TileKind::Floor
                    }
                    None => {
                        return Err(MapParseError::UnknownGlyph { glyph, row, column });
                    }
                };
                map.set_tile(position, kind);
            }
        }

        Ok(AsciiMap { map, markers })
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| (position.y as u32 * self.dimensions.width + position.x as u32) as usize)
    }

    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    fn get_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(|i| &mut self.tiles[i])
    }
}

impl Dungeon for TileMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<TileKind> {
        self.get(position).map(|tile| tile.kind)
    }

    fn set_tile(&mut self, position: Position, kind: TileKind) -> bool {
        match self.get_mut(position) {
            Some(tile) => {
                tile.kind = kind;
                true
            }
            None => false,
        }
    }

    fn mark_explored(&mut self, position: Position) {
        if let Some(tile) = self.get_mut(position) {
            tile.explored = true;
        }
    }

    fn mark_lit(&mut self, position: Position) {
        if let Some(tile) = self.get_mut(position) {
            tile.lit = true;
            tile.explored = true;
        }
    }

    fn depth(&self) -> i32 {
        self.depth
    }

    fn change_depth(&mut self, delta: i32) {
        self.depth += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_rows_read_north_to_south() {
        let parsed = TileMap::from_ascii(
            "
            ##+
            .@>
            ",
        )
        .unwrap();
        let map = parsed.map;
        assert_eq!(map.dimensions(), MapDimensions::new(3, 2));
        assert_eq!(map.tile(Position::new(0, 1)), Some(TileKind::Wall));
        assert_eq!(map.tile(Position::new(2, 1)), Some(TileKind::ClosedDoor));
        assert_eq!(map.tile(Position::new(2, 0)), Some(TileKind::StairsDown));
        assert_eq!(parsed.markers, vec![('@', Position::new(1, 0))]);
        assert_eq!(map.tile(Position::new(1, 0)), Some(TileKind::Floor));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = TileMap::from_ascii("...\n..").unwrap_err();
        assert_eq!(
            err,
            MapParseError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn line_of_sight_ignores_opaque_endpoints() {
        let mut map = TileMap::filled(10, 3, TileKind::Floor);
        map.set_tile(Position::new(5, 1), TileKind::Wall);
        assert!(map.has_line_of_sight(Position::new(1, 1), Position::new(5, 1)));
        assert!(!map.has_line_of_sight(Position::new(1, 1), Position::new(8, 1)));
        assert!(map.has_line_of_sight(Position::new(1, 1), Position::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_tiles_are_neither_passable_nor_transparent() {
        let map = TileMap::filled(2, 2, TileKind::Floor);
        assert!(!map.is_passable(Position::new(-1, 0)));
        assert!(!map.is_transparent(Position::new(0, 2)));
    }
}
