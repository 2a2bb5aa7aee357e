use core::f64::consts::FRAC_PI_4;

/// Compass direction on the tile grid, or the absence of one.
///
/// Coordinate system: Y-axis increases upward (north), X-axis increases
/// rightward (east). Directions are listed counter-clockwise starting east so
/// the discriminant doubles as the octant index.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    #[default]
    None,
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// The eight real directions in octant order (east first, counter-clockwise).
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Returns the offset (dx, dy) for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::East => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::North => (0, 1),
            Direction::NorthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::South => (0, -1),
            Direction::SouthEast => (1, -1),
        }
    }

    /// Nearest of the eight directions to the vector `(dx, dy)`.
    ///
    /// The zero vector has no direction.
    pub fn towards(dx: i32, dy: i32) -> Direction {
        if dx == 0 && dy == 0 {
            return Direction::None;
        }
        let angle = f64::from(dy).atan2(f64::from(dx));
        let octant = (angle / FRAC_PI_4).round() as i32;
        Self::from_octant(octant)
    }

    /// Direction for an octant index (0 = east, counter-clockwise), wrapping.
    pub fn from_octant(octant: i32) -> Direction {
        Self::ALL[octant.rem_euclid(8) as usize]
    }

    fn octant(self) -> Option<i32> {
        Self::ALL.iter().position(|&d| d == self).map(|i| i as i32)
    }

    /// Rotates 45° counter-clockwise. `None` stays `None`.
    pub fn rotate_left(self) -> Direction {
        self.octant()
            .map_or(Direction::None, |o| Self::from_octant(o + 1))
    }

    /// Rotates 45° clockwise. `None` stays `None`.
    pub fn rotate_right(self) -> Direction {
        self.octant()
            .map_or(Direction::None, |o| Self::from_octant(o - 1))
    }

    pub fn reverse(self) -> Direction {
        self.octant()
            .map_or(Direction::None, |o| Self::from_octant(o + 4))
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn towards_rounds_to_nearest_octant() {
        assert_eq!(Direction::towards(0, 0), Direction::None);
        assert_eq!(Direction::towards(5, 0), Direction::East);
        assert_eq!(Direction::towards(5, 1), Direction::East);
        assert_eq!(Direction::towards(5, 3), Direction::NorthEast);
        assert_eq!(Direction::towards(-1, 4), Direction::North);
        assert_eq!(Direction::towards(-3, -3), Direction::SouthWest);
        assert_eq!(Direction::towards(-7, 1), Direction::West);
    }

    #[test]
    fn offsets_round_trip_through_towards() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            assert_eq!(Direction::towards(dx, dy), direction);
        }
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(Direction::East.rotate_right(), Direction::SouthEast);
        assert_eq!(Direction::SouthEast.rotate_left(), Direction::East);
        assert_eq!(Direction::North.reverse(), Direction::South);
        assert_eq!(Direction::None.rotate_left(), Direction::None);
    }
}
