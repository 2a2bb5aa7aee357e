use crate::geometry::Direction;
use crate::state::{EntityId, TileKind};

use super::{ActionContext, ActionResult, AttackAction, OpenDoorAction, Perform};

/// One step in a direction. [`Direction::None`] rests in place.
///
/// Walking into an entity becomes an attack, and into a closed door becomes
/// opening it; both substitutions cost no extra turn.
#[derive(Clone, Debug)]
pub struct WalkAction {
    actor: EntityId,
    direction: Direction,
}

impl WalkAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    pub fn rest(actor: EntityId) -> Self {
        Self::new(actor, Direction::None)
    }
}

impl Perform for WalkAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let Some(origin) = ctx.world.roster.position(self.actor) else {
            tracing::debug!(actor = %self.actor, "walker is gone");
            return ActionResult::fail();
        };
        if self.direction.is_none() {
            return ActionResult::done();
        }

        let destination = origin.step(self.direction);
        if ctx
            .world
            .roster
            .entity_at(destination)
            .is_some_and(|occupant| occupant != self.actor)
        {
            return ActionResult::alternate(AttackAction::new(self.actor, destination));
        }

        let subject = ctx.noun(self.actor);
        match ctx.world.dungeon.tile(destination) {
            Some(TileKind::ClosedDoor) => {
                ActionResult::alternate(OpenDoorAction::new(self.actor, destination))
            }
            Some(kind) if ctx.world.roster.can_enter(self.actor, kind) => {
                ctx.world.roster.set_position(self.actor, destination);
                if self.actor.is_player() {
                    ctx.world.dungeon.mark_explored(destination);
                }
                ActionResult::done()
            }
            _ => ctx.fail(&subject, "{subject} can't walk there.", None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::Action;
    use super::*;

    #[test]
    fn steps_onto_floor() {
        let mut state = state_from(&["@.."]);
        let mut action = Action::new(WalkAction::new(EntityId::PLAYER, Direction::East));
        let run = run(&mut state, &mut action, 1);

        assert!(run.results[0].succeeded());
        assert_eq!(state.entities.actor(EntityId::PLAYER).map(|a| a.position), Some(at(1, 0)));
    }

    #[test]
    fn resting_is_immediately_done() {
        let mut state = state_from(&["@.."]);
        let mut action = Action::new(WalkAction::rest(EntityId::PLAYER));
        let run = run(&mut state, &mut action, 1);
        assert!(run.results[0].succeeded());
        assert_eq!(state.entities.actor(EntityId::PLAYER).map(|a| a.position), Some(at(0, 0)));
    }

    #[test]
    fn walls_fail_with_one_message() {
        let mut state = state_from(&["@#"]);
        let mut action = Action::new(WalkAction::new(EntityId::PLAYER, Direction::East));
        let run = run(&mut state, &mut action, 1);

        assert!(run.results[0].is_failed());
        assert_eq!(state.log.len(), 1);
        assert_eq!(state.log.entries()[0].text, "You can't walk there.");
    }

    #[test]
    fn map_edge_fails() {
        let mut state = state_from(&["@"]);
        let mut action = Action::new(WalkAction::new(EntityId::PLAYER, Direction::West));
        let run = run(&mut state, &mut action, 1);
        assert!(run.results[0].is_failed());
    }

    #[test]
    fn occupied_tile_becomes_attack() {
        let mut state = state_from(&["@g"]);
        let mut action = Action::new(WalkAction::new(EntityId::PLAYER, Direction::East));
        let mut run = run(&mut state, &mut action, 1);

        let result = run.results.remove(0);
        assert!(!result.succeeded());
        let alternate = result.into_alternate().expect("attack alternate");
        assert!(alternate.name().ends_with("AttackAction"));
        assert_eq!(state.entities.actor(EntityId::PLAYER).map(|a| a.position), Some(at(0, 0)));
    }

    #[test]
    fn closed_door_becomes_open() {
        let mut state = state_from(&["@+"]);
        let mut action = Action::new(WalkAction::new(EntityId::PLAYER, Direction::East));
        let mut run = run(&mut state, &mut action, 1);

        let alternate = run.results.remove(0).into_alternate().expect("door alternate");
        assert!(alternate.name().ends_with("OpenDoorAction"));
    }
}
