use crate::state::Position;

/// Filled discrete disc around `center`.
///
/// A tile belongs to the circle when its squared distance from the center is
/// at most `r² + r`. The extra `r` clips the corners less aggressively than a
/// plain `r²` test, so radius 1 covers the full 3x3 block and larger radii
/// look round rather than diamond-shaped. Radius 0 is the center tile alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    center: Position,
    radius: u32,
}

impl Circle {
    pub const fn new(center: Position, radius: u32) -> Self {
        Self { center, radius }
    }

    pub const fn center(&self) -> Position {
        self.center
    }

    pub const fn radius(&self) -> u32 {
        self.radius
    }

    const fn radius_squared(radius: u32) -> i64 {
        let r = radius as i64;
        r * r + r
    }

    fn distance_squared(&self, pos: Position) -> i64 {
        let (dx, dy) = self.center.delta_to(pos);
        let (dx, dy) = (i64::from(dx), i64::from(dy));
        dx * dx + dy * dy
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.distance_squared(pos) <= Self::radius_squared(self.radius)
    }

    /// True when `pos` lies on the outermost ring, i.e. inside this circle but
    /// outside the circle one radius smaller.
    pub fn is_edge(&self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }
        match self.radius {
            0 => true,
            r => self.distance_squared(pos) > Self::radius_squared(r - 1),
        }
    }

    /// Tiles of the filled disc in row-major order (south row first, west to
    /// east within a row).
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let r = self.radius as i32;
        let center = self.center;
        (-r..=r)
            .flat_map(move |dy| (-r..=r).map(move |dx| center.offset(dx, dy)))
            .filter(move |&pos| self.contains(pos))
    }
}
