use crate::env::LogKind;
use crate::state::{EntityId, Position, TileKind};

use super::{ActionContext, ActionResult, Perform};

#[derive(Clone, Debug)]
pub struct OpenDoorAction {
    actor: EntityId,
    door: Position,
}

impl OpenDoorAction {
    pub fn new(actor: EntityId, door: Position) -> Self {
        Self { actor, door }
    }
}

impl Perform for OpenDoorAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let subject = ctx.noun(self.actor);
        match ctx.world.dungeon.tile(self.door) {
            Some(TileKind::ClosedDoor) => {
                ctx.world.dungeon.set_tile(self.door, TileKind::OpenDoor);
                ctx.log(LogKind::Message, &subject, "{subject} open[s] the door.", None);
                ActionResult::done()
            }
            Some(TileKind::OpenDoor) => ctx.fail(&subject, "The door is already open.", None),
            _ => ctx.fail(&subject, "There is no door there.", None),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CloseDoorAction {
    actor: EntityId,
    door: Position,
}

impl CloseDoorAction {
    pub fn new(actor: EntityId, door: Position) -> Self {
        Self { actor, door }
    }
}

impl Perform for CloseDoorAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let subject = ctx.noun(self.actor);
        match ctx.world.dungeon.tile(self.door) {
            Some(TileKind::OpenDoor) if ctx.world.roster.entity_at(self.door).is_some() => {
                ctx.fail(&subject, "Something is in the way.", None)
            }
            Some(TileKind::OpenDoor) => {
                ctx.world.dungeon.set_tile(self.door, TileKind::ClosedDoor);
                ctx.log(LogKind::Message, &subject, "{subject} close[s] the door.", None);
                ActionResult::done()
            }
            Some(TileKind::ClosedDoor) => ctx.fail(&subject, "The door is already closed.", None),
            _ => ctx.fail(&subject, "There is no door there.", None),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stairs {
    Up,
    Down,
}

impl Stairs {
    fn tile(self) -> TileKind {
        match self {
            Stairs::Up => TileKind::StairsUp,
            Stairs::Down => TileKind::StairsDown,
        }
    }

    fn depth_change(self) -> i32 {
        match self {
            Stairs::Up => -1,
            Stairs::Down => 1,
        }
    }
}

/// Uses the staircase under the actor. Pauses so the new level is shown.
#[derive(Clone, Debug)]
pub struct TakeStairsAction {
    actor: EntityId,
    stairs: Stairs,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId, stairs: Stairs) -> Self {
        Self { actor, stairs }
    }
}

impl Perform for TakeStairsAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let subject = ctx.noun(self.actor);
        let here = ctx
            .world
            .roster
            .position(self.actor)
            .and_then(|position| ctx.world.dungeon.tile(position));

        if here != Some(self.stairs.tile()) {
            let template = match self.stairs {
                Stairs::Up => "{subject} can't go up here.",
                Stairs::Down => "{subject} can't go down here.",
            };
            return ctx.fail(&subject, template, None);
        }

        ctx.world.dungeon.change_depth(self.stairs.depth_change());
        let template = match self.stairs {
            Stairs::Up => "{subject} climb[s] the stairs.",
            Stairs::Down => "{subject} descend[s] the stairs.",
        };
        ctx.log(LogKind::Emphasize, &subject, template, None);
        ActionResult::done_and_pause()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::Action;
    use super::*;
    use crate::env::Dungeon;

    #[test]
    fn opens_closed_door() {
        let mut state = state_from(&["@+"]);
        let mut action = Action::new(OpenDoorAction::new(EntityId::PLAYER, at(1, 0)));
        let run = run(&mut state, &mut action, 1);

        assert!(run.results[0].succeeded());
        assert_eq!(state.map.tile(at(1, 0)), Some(TileKind::OpenDoor));
        assert_eq!(state.log.entries()[0].text, "You open the door.");
    }

    #[test]
    fn closing_closed_door_fails_with_one_message() {
        let mut state = state_from(&["@+"]);
        let mut action = Action::new(CloseDoorAction::new(EntityId::PLAYER, at(1, 0)));
        let run = run(&mut state, &mut action, 1);

        assert!(run.results[0].is_failed());
        assert_eq!(state.log.len(), 1);
        assert_eq!(state.log.entries()[0].kind, LogKind::Fail);
        assert_eq!(state.map.tile(at(1, 0)), Some(TileKind::ClosedDoor));
    }

    #[test]
    fn occupied_doorway_cannot_close() {
        let mut state = state_from(&["@'g"]);
        if let Some(goblin) = state.entities.actor_mut(EntityId(1)) {
            goblin.position = at(1, 0);
        }
        let mut action = Action::new(CloseDoorAction::new(EntityId::PLAYER, at(1, 0)));
        let run = run(&mut state, &mut action, 1);

        assert!(run.results[0].is_failed());
        assert_eq!(state.map.tile(at(1, 0)), Some(TileKind::OpenDoor));
    }

    #[test]
    fn stairs_change_depth_and_pause() {
        let mut state = state_from(&[">."]);
        state
            .entities
            .insert(crate::state::Actor::new(EntityId::PLAYER, "you", at(0, 0)));

        let mut action = Action::new(TakeStairsAction::new(EntityId::PLAYER, Stairs::Down));
        let run = run(&mut state, &mut action, 1);

        assert!(run.results[0].succeeded());
        assert!(run.results[0].needs_pause());
        assert_eq!(state.map.depth(), 2);
    }

    #[test]
    fn wrong_stairs_fail() {
        let mut state = state_from(&["@>"]);
        let mut action = Action::new(TakeStairsAction::new(EntityId::PLAYER, Stairs::Up));
        let run = run(&mut state, &mut action, 1);
        assert!(run.results[0].is_failed());
        assert_eq!(state.map.depth(), 1);
    }
}
