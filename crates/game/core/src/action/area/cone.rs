use std::collections::HashSet;
use std::f64::consts::PI;
use std::fmt;

use crate::action::{ActionContext, ActionResult, Traversal, TraversalError};
use crate::config::GameConfig;
use crate::geometry::Direction;
use crate::state::{EntityId, Position};

/// Per-tile behaviour of a [`Cone`].
pub trait ConeHook: fmt::Debug {
    /// `leading_edge` is true the first time a tile is reached and false when
    /// it is revisited on later radii.
    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
        leading_edge: bool,
    );
}

/// Number of rays cast for a cone of `radius`.
pub fn ray_count(radius: u32) -> usize {
    let circumference = 2.0 * PI * f64::from(radius);
    ((circumference / GameConfig::CONE_RAY_DIVISOR).ceil() as usize).max(1)
}

/// Ray bearings in radians, spread evenly over the cone's arc with both
/// endpoints included. A single ray points straight at the target.
pub fn ray_angles(origin: Position, target: Position, radius: u32) -> Vec<f64> {
    let (dx, dy) = origin.delta_to(target);
    let center = f64::from(dy).atan2(f64::from(dx));
    let spread = GameConfig::CONE_SPREAD_DEGREES.to_radians();
    let count = ray_count(radius);
    if count == 1 {
        return vec![center];
    }
    let first = center - spread / 2.0;
    let step = spread / (count - 1) as f64;
    (0..count).map(|i| first + step * i as f64).collect()
}

/// Widening wedge from `origin` toward `target`, one radius per step.
///
/// Rays advance outward together. A ray that leaves the map or meets an
/// opaque tile is dropped for good. Tiles already reached are revisited as
/// trailing tiles at the start of every later radius.
#[derive(Debug)]
pub struct Cone<H> {
    actor: Option<EntityId>,
    origin: Position,
    target: Position,
    radius: u32,
    hook: H,
}

#[derive(Debug)]
pub struct ConeCursor {
    rays: Vec<Option<f64>>,
    next_radius: u32,
    visited: HashSet<Position>,
    reached: Vec<Position>,
}

impl<H: ConeHook> Cone<H> {
    pub fn try_new(
        actor: Option<EntityId>,
        origin: Position,
        target: Position,
        radius: i32,
        hook: H,
    ) -> Result<Self, TraversalError> {
        if radius < 0 {
            return Err(TraversalError::NegativeRadius { radius });
        }
        if radius == 0 {
            return Err(TraversalError::ZeroRadius);
        }
        if origin == target {
            return Err(TraversalError::TargetIsOrigin { position: origin });
        }
        Ok(Self {
            actor,
            origin,
            target,
            radius: radius as u32,
            hook,
        })
    }

    /// # Panics
    ///
    /// If `radius` is not positive or `target` equals `origin`.
    pub fn new(
        actor: Option<EntityId>,
        origin: Position,
        target: Position,
        radius: i32,
        hook: H,
    ) -> Self {
        match Self::try_new(actor, origin, target, radius, hook) {
            Ok(cone) => cone,
            Err(error) => panic!("invalid cone: {error}"),
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }
}

impl<H: ConeHook> Traversal for Cone<H> {
    type Cursor = ConeCursor;

    fn actor(&self) -> Option<EntityId> {
        self.actor
    }

    fn start(&mut self, _ctx: &mut ActionContext<'_, '_>) -> ConeCursor {
        ConeCursor {
            rays: ray_angles(self.origin, self.target, self.radius)
                .into_iter()
                .map(Some)
                .collect(),
            next_radius: 1,
            visited: HashSet::new(),
            reached: Vec::new(),
        }
    }

    fn advance(
        &mut self,
        cursor: &mut ConeCursor,
        ctx: &mut ActionContext<'_, '_>,
    ) -> Option<ActionResult> {
        if cursor.next_radius > self.radius {
            return None;
        }
        let radius = f64::from(cursor.next_radius);

        for &position in &cursor.reached {
            let direction = self.origin.direction_to(position);
            self.hook.on_tile(ctx, position, direction, false);
        }

        for ray in cursor.rays.iter_mut() {
            let Some(angle) = *ray else { continue };
            let position = self.origin.offset(
                (angle.cos() * radius).round() as i32,
                (angle.sin() * radius).round() as i32,
            );
            if cursor.visited.contains(&position) {
                continue;
            }
            if !ctx.world.dungeon.contains(position) || !ctx.world.dungeon.is_transparent(position)
            {
                tracing::trace!(%position, angle, "cone ray blocked");
                *ray = None;
                continue;
            }

            let direction = self.origin.direction_to(position);
            self.hook.on_tile(ctx, position, direction, true);
            cursor.visited.insert(position);
            cursor.reached.push(position);
        }

        cursor.next_radius += 1;
        Some(ActionResult::not_done())
    }
}
