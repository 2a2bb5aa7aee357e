use crate::geometry::Line;
use crate::state::{Position, TileKind};

/// Tile query and mutation surface of the dungeon.
///
/// Only `dimensions`, `tile`, `set_tile`, the two marking hooks and the depth
/// pair are required; transparency, passability and line helpers derive from
/// them but may be overridden by a collaborator with a faster answer.
pub trait Dungeon {
    fn dimensions(&self) -> MapDimensions;

    /// Tile kind at `position`, or `None` outside the map.
    fn tile(&self, position: Position) -> Option<TileKind>;

    /// Replaces the tile at `position`. Returns false outside the map.
    fn set_tile(&mut self, position: Position, kind: TileKind) -> bool;

    /// Records that the player has seen `position`.
    fn mark_explored(&mut self, position: Position);

    /// Lights `position` permanently.
    fn mark_lit(&mut self, position: Position);

    /// Current dungeon depth.
    fn depth(&self) -> i32;

    /// Moves the level by `delta` floors. Generating the new level is the
    /// dungeon collaborator's business.
    fn change_depth(&mut self, delta: i32);

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    fn is_transparent(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_transparent)
    }

    fn is_passable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_passable)
    }

    /// Tiles from `from` (exclusive) toward `to`, continuing past `to`.
    fn line(&self, from: Position, to: Position) -> Line {
        Line::new(from, to)
    }

    /// True when every tile strictly between `from` and `to` is transparent.
    /// The endpoints themselves may be opaque: a wall is visible.
    fn has_line_of_sight(&self, from: Position, to: Position) -> bool {
        let steps = from.distance(to) as usize;
        self.line(from, to)
            .take(steps)
            .take_while(|&pos| pos != to)
            .all(|pos| self.is_transparent(pos))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}
