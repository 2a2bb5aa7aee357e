use std::fmt;

use crate::action::{ActionContext, ActionResult, Traversal, TraversalError};
use crate::geometry::{Direction, Line};
use crate::state::{EntityId, Position};

/// Whether a bolt keeps flying after a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Halt,
}

/// Per-tile behaviour of a [`Bolt`].
pub trait BoltHook: fmt::Debug {
    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
    ) -> Propagation;
}

/// Straight-line projectile from `origin` toward `target`, one tile per step.
///
/// The origin tile is never visited. The path continues past the target up
/// to `range` tiles and ends early at the map edge or when the hook halts.
#[derive(Debug)]
pub struct Bolt<H> {
    actor: Option<EntityId>,
    origin: Position,
    target: Position,
    range: u32,
    hook: H,
}

#[derive(Debug)]
pub struct BoltCursor {
    path: Line,
    previous: Position,
    travelled: u32,
}

impl<H: BoltHook> Bolt<H> {
    /// Bolt aimed at `target`, with range equal to the distance to it.
    pub fn try_new(
        actor: Option<EntityId>,
        origin: Position,
        target: Position,
        hook: H,
    ) -> Result<Self, TraversalError> {
        if origin == target {
            return Err(TraversalError::TargetIsOrigin { position: origin });
        }
        Ok(Self {
            actor,
            origin,
            target,
            range: origin.distance(target),
            hook,
        })
    }

    /// Bolt fired in `direction` for `range` tiles.
    pub fn try_toward(
        actor: Option<EntityId>,
        origin: Position,
        direction: Direction,
        range: u32,
        hook: H,
    ) -> Result<Self, TraversalError> {
        if direction.is_none() {
            return Err(TraversalError::MissingDirection);
        }
        if range == 0 {
            return Err(TraversalError::ZeroRange);
        }
        Ok(Self {
            actor,
            origin,
            target: origin.step(direction),
            range,
            hook,
        })
    }

    /// # Panics
    ///
    /// If `target` equals `origin`.
    pub fn new(actor: Option<EntityId>, origin: Position, target: Position, hook: H) -> Self {
        match Self::try_new(actor, origin, target, hook) {
            Ok(bolt) => bolt,
            Err(error) => panic!("invalid bolt: {error}"),
        }
    }

    /// Flies `range` tiles instead of stopping at the target.
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range.max(1);
        self
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }
}

impl<H: BoltHook> Traversal for Bolt<H> {
    type Cursor = BoltCursor;

    fn actor(&self) -> Option<EntityId> {
        self.actor
    }

    fn start(&mut self, ctx: &mut ActionContext<'_, '_>) -> BoltCursor {
        BoltCursor {
            path: ctx.world.dungeon.line(self.origin, self.target),
            previous: self.origin,
            travelled: 0,
        }
    }

    fn advance(
        &mut self,
        cursor: &mut BoltCursor,
        ctx: &mut ActionContext<'_, '_>,
    ) -> Option<ActionResult> {
        if cursor.travelled >= self.range {
            return None;
        }
        let position = cursor.path.next()?;
        if !ctx.world.dungeon.contains(position) {
            return None;
        }

        let direction = cursor.previous.direction_to(position);
        cursor.previous = position;
        cursor.travelled += 1;

        match self.hook.on_tile(ctx, position, direction) {
            Propagation::Continue => Some(ActionResult::not_done()),
            Propagation::Halt => Some(ActionResult::done()),
        }
    }
}
