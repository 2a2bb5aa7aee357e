//! The turn loop.
use std::collections::VecDeque;

use tracing::{debug, trace};
use turn_core::{
    Action, ActionResult, CompleteConditionAction, ConditionKind, Effect, Element, EntityId, Hit,
    LogKind, OneShotAction, World,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::providers::ActionProvider;

/// What one tick did.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Name of the action that finally ran, after alternates. `None` when the
    /// queue was empty.
    pub action: Option<&'static str>,
    pub effects: Vec<Effect>,
    /// Alternates substituted before the action that ran.
    pub alternates: usize,
    pub done: bool,
    pub succeeded: bool,
    pub failed: bool,
    pub needs_pause: bool,
    pub needs_cancel_check: bool,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.action.is_none()
    }
}

/// What a [`TurnLoop::drain`] did.
#[derive(Debug, Default)]
pub struct DrainReport {
    pub ticks: usize,
    pub effects: Vec<Effect>,
    pub failures: usize,
    /// The drain stopped early because an action asked for a pause.
    pub paused: bool,
}

/// Queue of pending actions and the rules for running them.
#[derive(Debug)]
pub struct TurnLoop {
    pending: VecDeque<Action>,
    config: RuntimeConfig,
}

impl TurnLoop {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            pending: VecDeque::new(),
            config,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Queues an entity's turn. Success spends its energy.
    pub fn submit(&mut self, mut action: Action) {
        action.mark_energy_consuming();
        self.pending.push_back(action);
    }

    /// Queues a free action (reactions, upkeep).
    pub fn enqueue(&mut self, action: impl Into<Action>) {
        self.pending.push_back(action.into());
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Runs one `process` call of the action at the front of the queue.
    pub fn tick(&mut self, world: &mut World<'_>) -> Result<TickReport> {
        let Some(mut action) = self.pending.pop_front() else {
            return Ok(TickReport::default());
        };

        let mut effects = Vec::new();
        let mut follow_ups = VecDeque::new();
        let mut alternates = 0;

        let result = loop {
            let result = action.process(world, &mut effects, &mut follow_ups);
            let mut alternate = match result.into_alternate() {
                Ok(alternate) => alternate,
                Err(result) => break result,
            };

            alternates += 1;
            if alternates > self.config.max_alternate_chain {
                return Err(RuntimeError::AlternateLoop {
                    action: action.name(),
                    limit: self.config.max_alternate_chain,
                });
            }
            if action.consumes_energy() {
                alternate.mark_energy_consuming();
            }
            debug!(from = action.name(), to = alternate.name(), "action substituted");
            action = alternate;
        };

        let report = self.report(&action, &result, effects, alternates);
        if result.succeeded() && action.after_success(world.roster) {
            trace!(action = action.name(), actor = ?action.actor(), "energy spent");
        }
        if result.is_failed() {
            debug!(
                action = action.name(),
                actor = ?action.actor(),
                flags = ?result.flags(),
                "action failed"
            );
        }
        if !result.is_done() {
            self.pending.push_front(action);
        }
        self.pending.extend(follow_ups);

        Ok(report)
    }

    fn report(
        &self,
        action: &Action,
        result: &ActionResult,
        effects: Vec<Effect>,
        alternates: usize,
    ) -> TickReport {
        TickReport {
            action: Some(action.name()),
            effects,
            alternates,
            done: result.is_done(),
            succeeded: result.succeeded(),
            failed: result.is_failed(),
            needs_pause: result.needs_pause(),
            needs_cancel_check: result.needs_cancel_check(),
        }
    }

    /// Ticks until the queue is empty or an action asks for a pause.
    pub fn drain(&mut self, world: &mut World<'_>) -> Result<DrainReport> {
        let mut report = DrainReport::default();
        while !self.is_idle() {
            if report.ticks == self.config.max_ticks_per_drain {
                return Err(RuntimeError::TickBudgetExhausted {
                    ticks: report.ticks,
                });
            }
            let tick = self.tick(world)?;
            report.ticks += 1;
            report.failures += usize::from(tick.failed);
            report.effects.extend(tick.effects);
            if tick.needs_pause {
                report.paused = true;
                break;
            }
        }
        Ok(report)
    }

    /// Advances game time by one step.
    ///
    /// Every entity runs condition upkeep and gains energy. Expired
    /// conditions queue their completion actions and poison queues its
    /// damage. Entities that can then act, and have no turn already queued,
    /// are asked for an action. Returns how many turns were submitted.
    pub fn advance(
        &mut self,
        world: &mut World<'_>,
        provider: &mut dyn ActionProvider,
    ) -> Result<usize> {
        let mut submitted = 0;

        for id in world.roster.ids() {
            self.upkeep(world, id);
            world.roster.gain_energy(id);

            if !world.roster.can_take_turn(id) || self.has_turn_queued(id) {
                continue;
            }
            let Some(action) = provider.provide_action(id, world) else {
                continue;
            };
            if action.actor() != Some(id) {
                return Err(RuntimeError::ActorMismatch {
                    expected: id,
                    provided: action.actor(),
                });
            }
            trace!(actor = %id, action = action.name(), "turn submitted");
            self.submit(action);
            submitted += 1;
        }

        Ok(submitted)
    }

    fn has_turn_queued(&self, id: EntityId) -> bool {
        self.pending
            .iter()
            .any(|action| action.consumes_energy() && action.actor() == Some(id))
    }

    fn upkeep(&mut self, world: &mut World<'_>, id: EntityId) {
        let Some(conditions) = world.roster.conditions_mut(id) else {
            return;
        };
        let poison = conditions
            .is_active(ConditionKind::Poisoned)
            .then(|| conditions.magnitude(ConditionKind::Poisoned))
            .filter(|&damage| damage > 0);
        let expired = conditions.tick();

        if let Some(damage) = poison {
            self.enqueue(poison_tick(id, damage as u32));
        }
        for kind in expired {
            debug!(actor = %id, condition = %kind, "condition expired");
            self.enqueue(CompleteConditionAction::new(id, kind));
        }
    }
}

impl Default for TurnLoop {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

fn poison_tick(id: EntityId, damage: u32) -> OneShotAction {
    OneShotAction::new(Some(id), move |ctx| {
        let hit = Hit::environmental(damage, Element::Poison);
        if let Some(outcome) = ctx.world.roster.take_hit(id, &hit) {
            let subject = ctx.noun(id);
            let template = if outcome.killed {
                "{subject} succumb[s] to the poison."
            } else {
                "{subject} [are|is] hurt by the poison."
            };
            ctx.log(LogKind::Bad, &subject, template, None);
        }
        ActionResult::done()
    })
}
