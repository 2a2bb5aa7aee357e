use crate::state::Position;

/// Stepped line from `start` toward `end`, excluding `start`.
///
/// The iterator does not stop at `end`; it keeps walking the same slope so a
/// projectile can fly past its aim point. Callers bound it with `take`, map
/// bounds, or obstruction checks. A line whose endpoints coincide is empty.
#[derive(Clone, Debug)]
pub struct Line {
    current: Position,
    primary_step: (i32, i32),
    secondary_step: (i32, i32),
    primary: i32,
    secondary: i32,
    error: i32,
}

impl Line {
    pub fn new(start: Position, end: Position) -> Self {
        let (dx, dy) = start.delta_to(end);
        let (sx, sy) = (dx.signum(), dy.signum());

        let (primary_step, secondary_step, primary, secondary) = if dx.abs() >= dy.abs() {
            ((sx, 0), (0, sy), dx.abs(), dy.abs())
        } else {
            ((0, sy), (sx, 0), dy.abs(), dx.abs())
        };

        Self {
            current: start,
            primary_step,
            secondary_step,
            primary,
            secondary,
            error: 0,
        }
    }
}

impl Iterator for Line {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.primary == 0 {
            return None;
        }

        self.current = self.current.offset(self.primary_step.0, self.primary_step.1);
        self.error += self.secondary;
        if self.error * 2 >= self.primary {
            self.current = self
                .current
                .offset(self.secondary_step.0, self.secondary_step.1);
            self.error -= self.primary;
        }

        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(start: Position, end: Position, n: usize) -> Vec<Position> {
        Line::new(start, end).take(n).collect()
    }

    #[test]
    fn horizontal_line_excludes_start() {
        assert_eq!(
            points(Position::new(0, 0), Position::new(3, 0), 3),
            vec![Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
        );
    }

    #[test]
    fn shallow_slope_reaches_target() {
        let path = points(Position::new(0, 0), Position::new(4, 2), 4);
        assert_eq!(path.last(), Some(&Position::new(4, 2)));
        for pair in path.windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1);
        }
    }

    #[test]
    fn continues_past_target() {
        let path = points(Position::new(0, 0), Position::new(1, 1), 3);
        assert_eq!(path[2], Position::new(3, 3));
    }

    #[test]
    fn degenerate_line_is_empty() {
        assert_eq!(Line::new(Position::new(2, 2), Position::new(2, 2)).next(), None);
    }
}
