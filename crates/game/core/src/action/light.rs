use crate::geometry::Direction;
use crate::state::{EntityId, Position};

use super::{Action, ActionContext, Ball, BallHook, Effect, EffectKind, TraversalError};

/// Lights every tile of a ball that `viewer` can currently see.
#[derive(Clone, Debug)]
pub struct Illuminate {
    viewer: EntityId,
}

impl Illuminate {
    pub fn new(viewer: EntityId) -> Self {
        Self { viewer }
    }

    /// Light ball around `center`, seen from `viewer`.
    pub fn action(viewer: EntityId, center: Position, radius: i32) -> Result<Action, TraversalError> {
        let ball = Ball::try_new(Some(viewer), center, radius, Self::new(viewer))?;
        Ok(Action::enumerate(ball))
    }
}

impl BallHook for Illuminate {
    fn admits(&self, ctx: &ActionContext<'_, '_>, position: Position) -> bool {
        ctx.world
            .roster
            .position(self.viewer)
            .is_some_and(|from| ctx.world.dungeon.has_line_of_sight(from, position))
    }

    fn visits_interior(&self) -> bool {
        false
    }

    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        _direction: Direction,
        _leading_edge: bool,
    ) {
        ctx.world.dungeon.mark_lit(position);
        ctx.add_effect(Effect::at(position, EffectKind::Light));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn lights_visible_tiles_once() {
        let mut state = state_from(&[".....", ".....", "..@..", ".....", "....."]);
        let mut action = Illuminate::action(EntityId::PLAYER, at(2, 2), 2).expect("valid radius");
        let run = run(&mut state, &mut action, 10);

        assert_eq!(run.results.len(), 4);
        let mut lit: Vec<_> = run.effects.iter().map(|e| e.position).collect();
        let total = lit.len();
        lit.sort_by_key(|p| (p.x, p.y));
        lit.dedup();
        assert_eq!(lit.len(), total);
        assert!(state.map.get(at(0, 2)).is_some_and(|tile| tile.lit));
    }

    #[test]
    fn walls_shadow_tiles_behind_them() {
        let mut state = state_from(&["@#.."]);
        let mut action = Illuminate::action(EntityId::PLAYER, at(0, 0), 3).expect("valid radius");
        let _ = run(&mut state, &mut action, 10);

        assert!(state.map.get(at(1, 0)).is_some_and(|tile| tile.lit));
        assert!(state.map.get(at(2, 0)).is_some_and(|tile| !tile.lit));
    }
}
