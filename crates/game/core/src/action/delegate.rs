use std::fmt;

use crate::state::EntityId;

use super::{ActionContext, ActionResult, Perform};

type Callback = Box<dyn FnOnce(&mut ActionContext<'_, '_>) -> ActionResult>;

/// Runs a closure once. Later calls report done without running it again.
pub struct OneShotAction {
    actor: Option<EntityId>,
    callback: Option<Callback>,
}

impl OneShotAction {
    pub fn new(
        actor: Option<EntityId>,
        callback: impl FnOnce(&mut ActionContext<'_, '_>) -> ActionResult + 'static,
    ) -> Self {
        Self {
            actor,
            callback: Some(Box::new(callback)),
        }
    }
}

impl fmt::Debug for OneShotAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneShotAction")
            .field("actor", &self.actor)
            .field("spent", &self.callback.is_none())
            .finish()
    }
}

impl Perform for OneShotAction {
    fn actor(&self) -> Option<EntityId> {
        self.actor
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        match self.callback.take() {
            Some(callback) => callback(ctx),
            None => ActionResult::done(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{Action, Effect, EffectKind};
    use super::*;

    #[test]
    fn runs_callback_exactly_once() {
        let mut state = state_from(&["@."]);
        let mut action = Action::new(OneShotAction::new(None, |ctx| {
            ctx.add_effect(Effect::at(at(1, 0), EffectKind::Light));
            ActionResult::done_and_pause()
        }));

        let first = run(&mut state, &mut action, 1);
        assert!(first.results[0].needs_pause());
        assert_eq!(first.effects.len(), 1);

        let second = run(&mut state, &mut action, 1);
        assert!(second.results[0].succeeded());
        assert!(second.effects.is_empty());
    }

    #[test]
    fn follow_ups_reach_the_queue() {
        let mut state = state_from(&["@."]);
        let mut action = Action::new(OneShotAction::new(Some(EntityId::PLAYER), |ctx| {
            ctx.add_action(OneShotAction::new(None, |_| ActionResult::done()));
            ActionResult::done()
        }));
        let run = run(&mut state, &mut action, 1);
        assert_eq!(run.follow_ups.len(), 1);
    }
}
