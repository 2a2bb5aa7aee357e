//! Condition actions.
//!
//! Applying a condition and ending it are separate actions. The runtime
//! queues a [`CompleteConditionAction`] when a counter runs out, so the end of
//! a condition is narrated exactly once. Both always report done: a condition
//! that could not take hold is narrated, not failed.

use crate::env::LogKind;
use crate::state::{ConditionChange, ConditionKind, EntityId};

use super::{ActionContext, ActionResult, Perform};

struct Wording {
    started: &'static str,
    extended: &'static str,
    completed: &'static str,
    /// How the condition reads for its bearer.
    kind: LogKind,
}

fn wording(kind: ConditionKind) -> Wording {
    match kind {
        ConditionKind::Frozen => Wording {
            started: "{subject} [are|is] frozen!",
            extended: "{subject} feel[s] colder.",
            completed: "{subject} thaw[s] out.",
            kind: LogKind::Bad,
        },
        ConditionKind::Hasted => Wording {
            started: "{subject} start[s] moving faster.",
            extended: "{subject} feel[s] even faster.",
            completed: "{subject} slow[s] back down.",
            kind: LogKind::Good,
        },
        ConditionKind::Poisoned => Wording {
            started: "{subject} [are|is] poisoned!",
            extended: "{subject} feel[s] more poisoned!",
            completed: "{subject} [are|is] no longer poisoned.",
            kind: LogKind::Bad,
        },
        ConditionKind::Slowed => Wording {
            started: "{subject} start[s] moving slower.",
            extended: "{subject} feel[s] even slower.",
            completed: "{subject} speed[s] back up.",
            kind: LogKind::Bad,
        },
        ConditionKind::Diseased => Wording {
            started: "{subject} [are|is] diseased!",
            extended: "{subject} feel[s] sicker.",
            completed: "{subject} [are|is] cured of {possessive} disease.",
            kind: LogKind::Bad,
        },
    }
}

/// Starts or extends a condition on `target`.
#[derive(Clone, Debug)]
pub struct ConditionAction {
    target: EntityId,
    kind: ConditionKind,
    turns: u32,
    magnitude: i32,
}

impl ConditionAction {
    pub fn new(target: EntityId, kind: ConditionKind, turns: u32, magnitude: i32) -> Self {
        Self {
            target,
            kind,
            turns,
            magnitude,
        }
    }

    pub fn freeze(target: EntityId, turns: u32, magnitude: i32) -> Self {
        Self::new(target, ConditionKind::Frozen, turns, magnitude)
    }

    pub fn haste(target: EntityId, turns: u32, magnitude: i32) -> Self {
        Self::new(target, ConditionKind::Hasted, turns, magnitude)
    }

    pub fn poison(target: EntityId, turns: u32, damage: i32) -> Self {
        Self::new(target, ConditionKind::Poisoned, turns, damage)
    }

    pub fn slow(target: EntityId, turns: u32, magnitude: i32) -> Self {
        Self::new(target, ConditionKind::Slowed, turns, magnitude)
    }

    pub fn disease(target: EntityId, turns: u32, penalty: i32) -> Self {
        Self::new(target, ConditionKind::Diseased, turns, penalty)
    }
}

impl Perform for ConditionAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.target)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let Some(conditions) = ctx.world.roster.conditions_mut(self.target) else {
            return ActionResult::done();
        };
        let change = conditions.apply(self.kind, self.turns, self.magnitude);

        let subject = ctx.noun(self.target);
        let wording = wording(self.kind);
        match change {
            ConditionChange::Started => ctx.log(wording.kind, &subject, wording.started, None),
            ConditionChange::Extended => ctx.log(wording.kind, &subject, wording.extended, None),
            ConditionChange::Rejected => ctx.log(
                LogKind::DidNotWork,
                &subject,
                "{subject} [are|is] unaffected.",
                None,
            ),
        }
        ActionResult::done()
    }
}

/// Ends a condition on `target`.
#[derive(Clone, Debug)]
pub struct CompleteConditionAction {
    target: EntityId,
    kind: ConditionKind,
}

impl CompleteConditionAction {
    pub fn new(target: EntityId, kind: ConditionKind) -> Self {
        Self { target, kind }
    }
}

impl Perform for CompleteConditionAction {
    fn actor(&self) -> Option<EntityId> {
        Some(self.target)
    }

    fn perform(&mut self, ctx: &mut ActionContext<'_, '_>) -> ActionResult {
        let removed = ctx
            .world
            .roster
            .conditions_mut(self.target)
            .and_then(|conditions| conditions.remove(self.kind));

        if removed.is_some() {
            let subject = ctx.noun(self.target);
            let wording = wording(self.kind);
            ctx.log(wording.kind.swapped(), &subject, wording.completed, None);
        }
        ActionResult::done()
    }
}
