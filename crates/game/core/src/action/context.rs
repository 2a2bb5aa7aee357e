use std::collections::VecDeque;

use crate::env::{LogKind, Noun, World};
use crate::state::EntityId;

use super::narration::format_message;
use super::{Action, ActionResult, Effect};

/// Side channels bound to an action for the duration of one `process` call.
///
/// Built only by [`Action::process`]. Holding `&mut` borrows of the tick's
/// buffers means the binding cannot outlive the call.
pub struct ActionContext<'c, 'w> {
    pub world: &'c mut World<'w>,
    effects: &'c mut Vec<Effect>,
    follow_ups: &'c mut VecDeque<Action>,
}

impl<'c, 'w> ActionContext<'c, 'w> {
    pub(super) fn bind(
        world: &'c mut World<'w>,
        effects: &'c mut Vec<Effect>,
        follow_ups: &'c mut VecDeque<Action>,
    ) -> Self {
        Self {
            world,
            effects,
            follow_ups,
        }
    }

    pub fn add_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Queues `action` to run after the current one, in insertion order.
    pub fn add_action(&mut self, action: impl Into<Action>) {
        self.follow_ups.push_back(action.into());
    }

    pub fn noun(&self, id: EntityId) -> Noun {
        self.world.roster.noun(id)
    }

    /// Writes a message framed from `subject`'s point of view.
    ///
    /// Good and bad outcomes are reported from the player's perspective, so
    /// they swap when the subject is anyone else. Failures of other entities
    /// are not the player's concern and only reach the trace log.
    pub fn log(&mut self, kind: LogKind, subject: &Noun, template: &str, object: Option<&Noun>) {
        let text = format_message(template, subject, object);
        if subject.is_player() {
            self.world.log.write(kind, text);
            return;
        }
        if kind.is_informational_failure() {
            tracing::debug!(kind = %kind, subject = subject.text(), "{text}");
            return;
        }
        self.world.log.write(kind.swapped(), text);
    }

    /// Logs a failure and returns the matching result.
    pub fn fail(&mut self, subject: &Noun, template: &str, object: Option<&Noun>) -> ActionResult {
        self.log(LogKind::Fail, subject, template, object);
        ActionResult::fail()
    }
}
