use std::fmt;

use crate::action::{ActionContext, ActionResult, Traversal, TraversalError};
use crate::geometry::{Circle, Direction};
use crate::state::{EntityId, Position};

/// Per-tile behaviour of a [`Ball`].
pub trait BallHook: fmt::Debug {
    /// Whether the ball reaches `position` at all. Out-of-bounds tiles are
    /// rejected before this is asked.
    fn admits(&self, ctx: &ActionContext<'_, '_>, position: Position) -> bool {
        ctx.world.dungeon.is_transparent(position)
    }

    /// Whether tiles inside the current ring are revisited each radius.
    fn visits_interior(&self) -> bool {
        true
    }

    /// Called for each admitted tile. `direction` points from the center to
    /// the tile; `leading_edge` is true on the outermost ring.
    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
        leading_edge: bool,
    );
}

/// Expanding filled disc, one radius per step from 0 to `radius`.
#[derive(Debug)]
pub struct Ball<H> {
    actor: Option<EntityId>,
    center: Position,
    radius: u32,
    hook: H,
}

#[derive(Debug)]
pub struct BallCursor {
    next_radius: u32,
}

impl<H: BallHook> Ball<H> {
    pub fn try_new(
        actor: Option<EntityId>,
        center: Position,
        radius: i32,
        hook: H,
    ) -> Result<Self, TraversalError> {
        let radius =
            u32::try_from(radius).map_err(|_| TraversalError::NegativeRadius { radius })?;
        Ok(Self {
            actor,
            center,
            radius,
            hook,
        })
    }

    /// # Panics
    ///
    /// If `radius` is negative.
    pub fn new(actor: Option<EntityId>, center: Position, radius: i32, hook: H) -> Self {
        match Self::try_new(actor, center, radius, hook) {
            Ok(ball) => ball,
            Err(error) => panic!("invalid ball: {error}"),
        }
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }
}

impl<H: BallHook> Traversal for Ball<H> {
    type Cursor = BallCursor;

    fn actor(&self) -> Option<EntityId> {
        self.actor
    }

    fn start(&mut self, _ctx: &mut ActionContext<'_, '_>) -> BallCursor {
        BallCursor { next_radius: 0 }
    }

    fn advance(
        &mut self,
        cursor: &mut BallCursor,
        ctx: &mut ActionContext<'_, '_>,
    ) -> Option<ActionResult> {
        if cursor.next_radius > self.radius {
            return None;
        }

        let circle = Circle::new(self.center, cursor.next_radius);
        for position in circle.iter() {
            if !ctx.world.dungeon.contains(position) || !self.hook.admits(ctx, position) {
                continue;
            }
            let leading_edge = circle.is_edge(position);
            if !leading_edge && !self.hook.visits_interior() {
                continue;
            }
            let direction = self.center.direction_to(position);
            self.hook.on_tile(ctx, position, direction, leading_edge);
        }

        cursor.next_radius += 1;
        Some(ActionResult::not_done())
    }
}
