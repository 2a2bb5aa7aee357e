//! Dungeon tile kinds and per-tile runtime flags.

/// Canonical tile classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
    ClosedDoor,
    OpenDoor,
    StairsUp,
    StairsDown,
    /// Blocks walking, not sight.
    Water,
}

impl TileKind {
    pub const fn is_passable(self) -> bool {
        matches!(
            self,
            TileKind::Floor | TileKind::OpenDoor | TileKind::StairsUp | TileKind::StairsDown
        )
    }

    pub const fn is_transparent(self) -> bool {
        !matches!(self, TileKind::Wall | TileKind::ClosedDoor)
    }

    pub const fn glyph(self) -> char {
        match self {
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::ClosedDoor => '+',
            TileKind::OpenDoor => '\'',
            TileKind::StairsUp => '<',
            TileKind::StairsDown => '>',
            TileKind::Water => '~',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<TileKind> {
        Some(match glyph {
            '.' => TileKind::Floor,
            '#' => TileKind::Wall,
            '+' => TileKind::ClosedDoor,
            '\'' => TileKind::OpenDoor,
            '<' => TileKind::StairsUp,
            '>' => TileKind::StairsDown,
            '~' => TileKind::Water,
            _ => return None,
        })
    }
}

/// A tile plus its runtime flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    /// The player has seen this tile.
    pub explored: bool,
    /// Permanently lit (e.g. by a light spell).
    pub lit: bool,
}

impl Tile {
    pub const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            explored: false,
            lit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doors_block_sight_only_when_closed() {
        assert!(!TileKind::ClosedDoor.is_transparent());
        assert!(!TileKind::ClosedDoor.is_passable());
        assert!(TileKind::OpenDoor.is_transparent());
        assert!(TileKind::OpenDoor.is_passable());
    }

    #[test]
    fn water_is_see_through_but_impassable() {
        assert!(TileKind::Water.is_transparent());
        assert!(!TileKind::Water.is_passable());
    }

    #[test]
    fn glyphs_round_trip() {
        for kind in [
            TileKind::Floor,
            TileKind::Wall,
            TileKind::ClosedDoor,
            TileKind::OpenDoor,
            TileKind::StairsUp,
            TileKind::StairsDown,
            TileKind::Water,
        ] {
            assert_eq!(TileKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(TileKind::from_glyph('?'), None);
    }
}
