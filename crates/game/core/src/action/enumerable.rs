//! Suspend/resume adapter for multi-step actions.
//!
//! A [`Traversal`] describes a lazy sequence of steps. [`Enumerable`] turns it
//! into a [`Perform`] implementation: the cursor is created on the first
//! `process` call, each later call advances it by exactly one step, and once
//! the sequence ends every call reports done.

use std::fmt;

use crate::state::EntityId;

use super::{ActionContext, ActionResult, Perform};

/// A resumable step sequence.
pub trait Traversal: fmt::Debug {
    /// Where the sequence left off between calls.
    type Cursor: fmt::Debug;

    fn actor(&self) -> Option<EntityId>;

    /// Creates the cursor. Runs on the first `process` call, not at
    /// construction, so it observes the world as of the first step.
    fn start(&mut self, ctx: &mut ActionContext<'_, '_>) -> Self::Cursor;

    /// Advances one step. `None` means the sequence is exhausted.
    fn advance(
        &mut self,
        cursor: &mut Self::Cursor,
        ctx: &mut ActionContext<'_, '_>,
    ) -> Option<ActionResult>;
}

pub struct Enumerable<T: Traversal> {
    traversal: T,
    cursor: Option<T::Cursor>,
    exhausted: bool,
}

impl<T: Traversal> Enumerable<T> {
    pub fn new(traversal: T) -> Self {
        Self {
            traversal,
            cursor: None,
            exhausted: false,
        }
    }

    pub fn traversal(&self) -> &T {
        &self.traversal
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T: Traversal> fmt::Debug for Enumerable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumerable")
            .field("traversal", &self.traversal)
            .field("cursor", &self.cursor)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl<T: Traversal> Perform for Enumerable<T> {
    fn actor(&self) -> Option<EntityId> {
        self.traversal.actor()
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        if self.exhausted {
            return ActionResult::done();
        }

        let cursor = self
            .cursor
            .get_or_insert_with(|| self.traversal.start(ctx));

        match self.traversal.advance(cursor, ctx) {
            Some(result) => {
                if result.is_done() {
                    self.exhausted = true;
                }
                result
            }
            None => {
                self.exhausted = true;
                self.cursor = None;
                ActionResult::done()
            }
        }
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{Action, Effect, EffectKind};
    use super::*;
    use crate::state::Position;

    /// Emits one effect per step for `steps` steps.
    #[derive(Debug)]
    struct Countdown {
        steps: u32,
        starts: u32,
    }

    impl Traversal for Countdown {
        type Cursor = u32;

        fn actor(&self) -> Option<EntityId> {
            None
        }

        fn start(&mut self, _ctx: &mut ActionContext<'_, '_>) -> u32 {
            self.starts += 1;
            0
        }

        fn advance(&mut self, cursor: &mut u32, ctx: &mut ActionContext<'_, '_>) -> Option<ActionResult> {
            if *cursor == self.steps {
                return None;
            }
            ctx.add_effect(Effect::at(Position::new(*cursor as i32, 0), EffectKind::Light));
            *cursor += 1;
            Some(ActionResult::not_done())
        }
    }

    #[test]
    fn yields_once_per_step_then_done() {
        let mut state = state_from(&["...."]);
        let mut action = Action::enumerate(Countdown { steps: 3, starts: 0 });
        let run = run(&mut state, &mut action, 10);

        let done: Vec<bool> = run.results.iter().map(ActionResult::is_done).collect();
        assert_eq!(done, vec![false, false, false, true]);
        assert_eq!(run.effects.len(), 3);
    }

    #[test]
    fn stays_done_after_exhaustion() {
        let mut state = state_from(&["...."]);
        let mut action = Action::new(Enumerable::new(Countdown { steps: 1, starts: 0 }));
        let first = run(&mut state, &mut action, 10);
        assert_eq!(first.results.len(), 2);

        let again = run(&mut state, &mut action, 3);
        assert_eq!(again.results.len(), 1);
        assert!(again.results[0].succeeded());
        assert!(again.effects.is_empty());
    }

    #[test]
    fn cursor_is_created_lazily_once() {
        let mut state = state_from(&["...."]);
        let mut enumerable = Enumerable::new(Countdown { steps: 2, starts: 0 });
        assert_eq!(enumerable.traversal().starts, 0);

        let mut effects = Vec::new();
        let mut follow_ups = std::collections::VecDeque::new();
        for _ in 0..3 {
            let mut world = state.world();
            let mut ctx = ActionContext::bind(&mut world, &mut effects, &mut follow_ups);
            let _ = enumerable.perform(&mut ctx);
        }
        assert_eq!(enumerable.traversal().starts, 1);
        assert!(enumerable.is_exhausted());
    }
}
