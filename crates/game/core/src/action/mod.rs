//! Action protocol.
//!
//! # Module Structure
//!
//! - `result`: [`ActionResult`] and its flag set
//! - `effect`: rendering events emitted while an action runs
//! - `context`: [`ActionContext`], the per-call binding of side channels
//! - `narration`: message templates (`{subject}`, `[s]`, `[are|is]`)
//! - `enumerable`: [`Enumerable`], the suspend/resume adapter for traversals
//! - `area`: ball, bolt and cone traversals
//! - `element`, `light`: concrete area-effect hooks
//! - `movement`, `combat`, `interact`, `displacement`, `status`, `delegate`:
//!   single-step actions
//!
//! An [`Action`] is processed one step at a time by the turn loop. Each call
//! binds a fresh [`ActionContext`] holding the world, the tick's effect buffer
//! and the follow-up queue; when `process` returns the binding is gone, so an
//! action cannot touch either side channel outside processing.

pub mod area;
mod combat;
mod context;
mod delegate;
mod displacement;
mod effect;
pub mod element;
mod enumerable;
mod error;
mod interact;
mod light;
mod movement;
mod narration;
mod result;
mod status;

pub use area::{Ball, BallHook, Bolt, BoltHook, Cone, ConeHook, Propagation};
pub use combat::AttackAction;
pub use context::ActionContext;
pub use delegate::OneShotAction;
pub use displacement::{PushBackAction, TeleportAction};
pub use effect::{Effect, EffectKind};
pub use element::{Blast, ElementBeam, ElementBolt, ElementBurst, ElementCone};
pub use enumerable::{Enumerable, Traversal};
pub use error::TraversalError;
pub use interact::{CloseDoorAction, OpenDoorAction, Stairs, TakeStairsAction};
pub use light::Illuminate;
pub use movement::WalkAction;
pub use narration::format_message;
pub use result::{ActionResult, ResultFlags};
pub use status::{CompleteConditionAction, ConditionAction};

use std::collections::VecDeque;
use std::fmt;

use crate::env::{Roster, World};
use crate::state::EntityId;

/// Behaviour of one concrete action.
///
/// Implementors only see the world through the [`ActionContext`] handed to
/// `perform`; bookkeeping (energy, binding) lives in [`Action`].
pub trait Perform: fmt::Debug {
    /// Entity performing the action. `None` for world-originated actions.
    fn actor(&self) -> Option<EntityId>;

    /// Runs one step.
    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A unit of game behaviour queued on the turn loop.
#[derive(Debug)]
pub struct Action {
    behavior: Box<dyn Perform>,
    consumes_energy: bool,
    energy_spent: bool,
}

impl Action {
    pub fn new(behavior: impl Perform + 'static) -> Self {
        Self {
            behavior: Box::new(behavior),
            consumes_energy: false,
            energy_spent: false,
        }
    }

    /// Wraps a traversal so each `process` call runs one step of it.
    pub fn enumerate<T: Traversal + 'static>(traversal: T) -> Self {
        Self::new(Enumerable::new(traversal))
    }

    pub fn actor(&self) -> Option<EntityId> {
        self.behavior.actor()
    }

    pub fn name(&self) -> &'static str {
        self.behavior.name()
    }

    /// Marks this action as the actor's turn: success spends its energy.
    pub fn mark_energy_consuming(&mut self) {
        self.consumes_energy = true;
    }

    pub fn consumes_energy(&self) -> bool {
        self.consumes_energy
    }

    /// Runs one step with `effects` and `follow_ups` bound for this call only.
    pub fn process(
        &mut self,
        world: &mut World<'_>,
        effects: &mut Vec<Effect>,
        follow_ups: &mut VecDeque<Action>,
    ) -> ActionResult {
        let mut ctx = ActionContext::bind(world, effects, follow_ups);
        self.behavior.perform(&mut ctx)
    }

    /// Success hook. Spends the actor's energy once if the action consumes
    /// energy; later calls are no-ops. Returns whether energy was spent now.
    pub fn after_success(&mut self, roster: &mut dyn Roster) -> bool {
        if !self.consumes_energy || self.energy_spent {
            return false;
        }
        let Some(actor) = self.actor() else {
            return false;
        };
        self.energy_spent = roster.spend_energy(actor);
        self.energy_spent
    }
}

impl<P: Perform + 'static> From<P> for Action {
    fn from(behavior: P) -> Self {
        Action::new(behavior)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::state::{Actor, EntitiesState, EntityId, GameState, Position, TileMap};

    use super::*;

    /// Parses `rows` and spawns the player on `@` and monsters on letters.
    pub fn state_from(rows: &[&str]) -> GameState {
        let parsed = TileMap::from_ascii(&rows.join("\n")).expect("valid test map");
        let mut entities = EntitiesState::new();
        let mut next_id = 1;
        for (marker, position) in parsed.markers {
            if marker == '@' {
                entities.insert(Actor::new(EntityId::PLAYER, "you", position));
            } else {
                entities.insert(Actor::new(EntityId(next_id), "goblin", position));
                next_id += 1;
            }
        }
        GameState::new(parsed.map, entities)
    }

    pub struct Run {
        pub results: Vec<ActionResult>,
        pub effects: Vec<Effect>,
        pub follow_ups: VecDeque<Action>,
    }

    /// Processes `action` until done or `limit` calls have been made.
    pub fn run(state: &mut GameState, action: &mut Action, limit: usize) -> Run {
        let mut run = Run {
            results: Vec::new(),
            effects: Vec::new(),
            follow_ups: VecDeque::new(),
        };
        for _ in 0..limit {
            let mut world = state.world();
            let result = action.process(&mut world, &mut run.effects, &mut run.follow_ups);
            let finished = result.is_done() || result.has_alternate();
            run.results.push(result);
            if finished {
                break;
            }
        }
        run
    }

    pub fn at(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }
}
