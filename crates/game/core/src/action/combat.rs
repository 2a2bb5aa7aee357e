use crate::env::LogKind;
use crate::state::{EntityId, Position};

use super::{ActionContext, ActionResult, Effect, EffectKind, Perform};

/// Melee attack against whoever stands on `target`.
#[derive(Clone, Debug)]
pub struct AttackAction {
    actor: EntityId,
    target: Position,
}

impl AttackAction {
    pub fn new(actor: EntityId, target: Position) -> Self {
        Self { actor, target }
    }
}

impl Perform for AttackAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.actor)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let subject = ctx.noun(self.actor);
        let Some(origin) = ctx.world.roster.position(self.actor) else {
            tracing::debug!(actor = %self.actor, "attacker is gone");
            return ActionResult::fail();
        };
        let Some(defender) = ctx.world.roster.entity_at(self.target) else {
            return ctx.fail(&subject, "{subject} swing[s] at empty air.", None);
        };

        let direction = origin.direction_to(self.target);
        let Some(hit) = ctx.world.roster.melee_hit(self.actor, direction) else {
            return ctx.fail(&subject, "{subject} can't attack.", None);
        };
        let Some(outcome) = ctx.world.roster.take_hit(defender, &hit) else {
            return ctx.fail(&subject, "{subject} miss[es].", None);
        };

        ctx.add_effect(Effect::new(self.target, direction, EffectKind::Hit, hit.element));
        let object = ctx.noun(defender);
        let template = if outcome.killed {
            "{subject} kill[s] {object}.".to_string()
        } else {
            format!("{{subject}} {} {{object}}.", hit.verb)
        };
        ctx.log(LogKind::Good, &subject, &template, Some(&object));
        ActionResult::done()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::Action;
    use super::*;
    use crate::combat::{Attack, Element};

    #[test]
    fn hits_defender_once() {
        let mut state = state_from(&["@g"]);
        let mut action = Action::new(AttackAction::new(EntityId::PLAYER, at(1, 0)));
        let run = run(&mut state, &mut action, 1);

        assert!(run.results[0].succeeded());
        assert_eq!(state.entities.actor(EntityId(1)).map(|a| a.health.current), Some(9));
        assert_eq!(run.effects.len(), 1);
        assert_eq!(run.effects[0].kind, EffectKind::Hit);
        assert_eq!(state.log.entries()[0].text, "You hit the goblin.");
        assert_eq!(state.log.entries()[0].kind, LogKind::Good);
    }

    #[test]
    fn monster_attacks_read_bad_for_player() {
        let mut state = state_from(&["@g"]);
        let mut action = Action::new(AttackAction::new(EntityId(1), at(0, 0)));
        let _ = run(&mut state, &mut action, 1);

        let entry = &state.log.entries()[0];
        assert_eq!(entry.text, "The goblin hits you.");
        assert_eq!(entry.kind, LogKind::Bad);
    }

    #[test]
    fn killing_blow() {
        let mut state = state_from(&["@g"]);
        if let Some(player) = state.entities.actor_mut(EntityId::PLAYER) {
            player.attack = Attack::new("slash[es]", 20, Element::Anima);
        }
        let mut action = Action::new(AttackAction::new(EntityId::PLAYER, at(1, 0)));
        let _ = run(&mut state, &mut action, 1);
        assert_eq!(state.log.entries()[0].text, "You kill the goblin.");
    }

    #[test]
    fn empty_tile_fails() {
        let mut state = state_from(&["@."]);
        let mut action = Action::new(AttackAction::new(EntityId::PLAYER, at(1, 0)));
        let run = run(&mut state, &mut action, 1);
        assert!(run.results[0].is_failed());
        assert!(run.effects.is_empty());
    }
}
