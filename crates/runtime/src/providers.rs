//! Sources of entity intent.
//!
//! The loop asks an [`ActionProvider`] for an action whenever an entity has
//! enough energy to act. Implementations can wrap player input, scripted
//! fixtures, or simple AI.
use std::collections::{HashMap, VecDeque};

use turn_core::{Action, Direction, EntityId, WalkAction, World};

/// Trait for providing actions for entities that are ready to act.
pub trait ActionProvider {
    /// Returns the action `entity` takes now, or `None` to skip it for this
    /// step (it keeps its energy and is asked again next step).
    fn provide_action(&mut self, entity: EntityId, world: &World<'_>) -> Option<Action>;
}

/// Always rests. Useful as a fallback for entities without a brain.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestProvider;

impl ActionProvider for RestProvider {
    fn provide_action(&mut self, entity: EntityId, _world: &World<'_>) -> Option<Action> {
        Some(Action::new(WalkAction::rest(entity)))
    }
}

/// Hands out pre-recorded actions per entity, then defers to `fallback`.
#[derive(Debug, Default)]
pub struct ScriptedProvider<F = RestProvider> {
    scripts: HashMap<EntityId, VecDeque<Action>>,
    fallback: F,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: ActionProvider> ScriptedProvider<F> {
    pub fn with_fallback(fallback: F) -> Self {
        Self {
            scripts: HashMap::new(),
            fallback,
        }
    }

    /// Appends `action` to the script of its actor.
    ///
    /// # Panics
    ///
    /// If the action has no actor.
    pub fn push(&mut self, action: Action) {
        let Some(actor) = action.actor() else {
            panic!("scripted action {} has no actor", action.name());
        };
        self.scripts.entry(actor).or_default().push_back(action);
    }

    pub fn remaining(&self, entity: EntityId) -> usize {
        self.scripts.get(&entity).map_or(0, VecDeque::len)
    }
}

impl<F: ActionProvider> ActionProvider for ScriptedProvider<F> {
    fn provide_action(&mut self, entity: EntityId, world: &World<'_>) -> Option<Action> {
        match self.scripts.get_mut(&entity).and_then(VecDeque::pop_front) {
            Some(action) => Some(action),
            None => self.fallback.provide_action(entity, world),
        }
    }
}

/// Walks every non-player entity straight at the player; the player rests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaseProvider;

impl ActionProvider for ChaseProvider {
    fn provide_action(&mut self, entity: EntityId, world: &World<'_>) -> Option<Action> {
        if entity.is_player() {
            return Some(Action::new(WalkAction::rest(entity)));
        }
        let direction = match (
            world.roster.position(entity),
            world.roster.position(EntityId::PLAYER),
        ) {
            (Some(from), Some(to)) => from.direction_to(to),
            _ => Direction::None,
        };
        Some(Action::new(WalkAction::new(entity, direction)))
    }
}
