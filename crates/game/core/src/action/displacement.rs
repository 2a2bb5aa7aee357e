use crate::combat::Element;
use crate::env::LogKind;
use crate::geometry::Direction;
use crate::state::{EntityId, Position};

use super::{ActionContext, ActionResult, Effect, EffectKind, Perform};

/// True when `id` may stand on `position` right now.
fn is_free_for(ctx: &ActionContext<'_, '_>, id: EntityId, position: Position) -> bool {
    ctx.world
        .dungeon
        .tile(position)
        .is_some_and(|kind| ctx.world.roster.can_enter(id, kind))
        && ctx.world.roster.entity_at(position).is_none()
}

/// Shoves `target` one tile in `direction`.
#[derive(Clone, Debug)]
pub struct PushBackAction {
    pusher: Option<EntityId>,
    target: EntityId,
    direction: Direction,
}

impl PushBackAction {
    pub fn new(pusher: Option<EntityId>, target: EntityId, direction: Direction) -> Self {
        Self {
            pusher,
            target,
            direction,
        }
    }
}

impl Perform for PushBackAction {
    fn actor(&self) -> Option<EntityId> {
        self.pusher
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let Some(origin) = ctx.world.roster.position(self.target) else {
            return ActionResult::fail();
        };
        if self.direction.is_none() {
            return ActionResult::done();
        }

        let subject = ctx.noun(self.target);
        let destination = origin.step(self.direction);
        if !is_free_for(ctx, self.target, destination) {
            return ctx.fail(&subject, "{subject} [don't|doesn't] budge.", None);
        }

        ctx.world.roster.set_position(self.target, destination);
        ctx.add_effect(Effect::new(
            destination,
            self.direction,
            EffectKind::Knockback,
            Element::default(),
        ));
        ctx.log(LogKind::Bad, &subject, "{subject} [are|is] knocked back.", None);
        ActionResult::done()
    }
}

/// Moves `target` to a random free tile near its position.
#[derive(Clone, Debug)]
pub struct TeleportAction {
    target: EntityId,
}

impl TeleportAction {
    pub fn new(target: EntityId) -> Self {
        Self { target }
    }

    fn pick_destination(&self, ctx: &mut ActionContext<'_, '_>, origin: Position) -> Option<Position> {
        // Offsets past the longest map side can never land in bounds.
        let dimensions = ctx.world.dungeon.dimensions();
        let range = ctx
            .world
            .config
            .teleport_range
            .min(dimensions.width.max(dimensions.height));
        let range = i32::try_from(range).unwrap_or(i32::MAX);
        for _ in 0..ctx.world.config.teleport_attempts {
            let dx = ctx.world.rng.range(-range, range);
            let dy = ctx.world.rng.range(-range, range);
            let candidate = origin.offset(dx, dy);
            if candidate != origin && is_free_for(ctx, self.target, candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

impl Perform for TeleportAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.target)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let subject = ctx.noun(self.target);
        let Some(origin) = ctx.world.roster.position(self.target) else {
            return ActionResult::fail();
        };
        let Some(destination) = self.pick_destination(ctx, origin) else {
            tracing::debug!(target = %self.target, %origin, "no teleport destination");
            return ctx.fail(&subject, "{subject} fail[s] to create the portal.", None);
        };

        ctx.world.roster.set_position(self.target, destination);
        ctx.add_effect(Effect::at(origin, EffectKind::Teleport));
        ctx.add_effect(Effect::at(destination, EffectKind::Teleport));
        ctx.log(LogKind::Message, &subject, "{subject} teleport[s] away.", None);
        ActionResult::done()
    }
}
