//! Elemental area attacks: balls, bolts, beams and cones.

use crate::combat::{Attack, Element};
use crate::env::{LogKind, Noun};
use crate::geometry::Direction;
use crate::state::{EntityId, Position};

use super::{
    Action, ActionContext, Ball, BallHook, Bolt, BoltHook, Cone, ConeHook, Effect, EffectKind,
    Propagation, TraversalError,
};

/// What an elemental attack is and who cast it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blast {
    pub caster: Option<EntityId>,
    /// Narrated name, e.g. `"the fireball"`.
    pub name: String,
    pub attack: Attack,
}

impl Blast {
    pub fn new(
        caster: Option<EntityId>,
        name: impl Into<String>,
        damage: u32,
        element: Element,
    ) -> Self {
        Self {
            caster,
            name: name.into(),
            attack: Attack::new("hit[s]", damage, element),
        }
    }

    pub fn element(&self) -> Element {
        self.attack.element
    }

    pub fn ball(self, center: Position, radius: i32) -> Result<Action, TraversalError> {
        let caster = self.caster;
        let ball = Ball::try_new(caster, center, radius, ElementBurst::new(self))?;
        Ok(Action::enumerate(ball))
    }

    pub fn bolt(self, origin: Position, target: Position) -> Result<Action, TraversalError> {
        let caster = self.caster;
        let bolt = Bolt::try_new(caster, origin, target, ElementBolt::new(self))?;
        Ok(Action::enumerate(bolt))
    }

    pub fn beam(
        self,
        origin: Position,
        target: Position,
        range: u32,
    ) -> Result<Action, TraversalError> {
        let caster = self.caster;
        let beam = Bolt::try_new(caster, origin, target, ElementBeam::new(self))?;
        Ok(Action::enumerate(beam.with_range(range)))
    }

    pub fn cone(
        self,
        origin: Position,
        target: Position,
        radius: i32,
    ) -> Result<Action, TraversalError> {
        let caster = self.caster;
        let cone = Cone::try_new(caster, origin, target, radius, ElementCone::new(self))?;
        Ok(Action::enumerate(cone))
    }

    fn effect(&self, position: Position, direction: Direction, kind: EffectKind) -> Effect {
        Effect::new(position, direction, kind, self.attack.element)
    }

    /// Hits whoever stands on `position`. Returns the entity hit.
    fn strike(
        &self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
    ) -> Option<EntityId> {
        let defender = ctx.world.roster.entity_at(position)?;
        let hit = self.attack.hit(self.caster, direction);
        let outcome = ctx.world.roster.take_hit(defender, &hit)?;

        let subject = ctx.noun(defender);
        let object = Noun::thing(self.name.clone());
        let template = if outcome.killed {
            "{subject} [are|is] killed by {object}."
        } else {
            "{subject} [are|is] hit by {object}."
        };
        ctx.log(LogKind::Bad, &subject, template, Some(&object));
        Some(defender)
    }

    fn is_caster(&self, id: EntityId) -> bool {
        self.caster == Some(id)
    }
}

/// Ball hook: the leading ring hits, the interior trails.
#[derive(Clone, Debug)]
pub struct ElementBurst {
    blast: Blast,
}

impl ElementBurst {
    pub fn new(blast: Blast) -> Self {
        Self { blast }
    }
}

impl BallHook for ElementBurst {
    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
        leading_edge: bool,
    ) {
        if leading_edge {
            ctx.add_effect(self.blast.effect(position, direction, EffectKind::Ball));
            self.blast.strike(ctx, position, direction);
        } else {
            ctx.add_effect(self.blast.effect(position, direction, EffectKind::BallTrail));
        }
    }
}

/// Bolt hook: stops at the first entity hit or the first obstacle.
#[derive(Clone, Debug)]
pub struct ElementBolt {
    blast: Blast,
}

impl ElementBolt {
    pub fn new(blast: Blast) -> Self {
        Self { blast }
    }
}

impl BoltHook for ElementBolt {
    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
    ) -> Propagation {
        if !ctx.world.dungeon.is_passable(position) || !ctx.world.dungeon.is_transparent(position)
        {
            return Propagation::Halt;
        }
        ctx.add_effect(self.blast.effect(position, direction, EffectKind::Bolt));

        match ctx.world.roster.entity_at(position) {
            Some(id) if !self.blast.is_caster(id) => {
                self.blast.strike(ctx, position, direction);
                Propagation::Halt
            }
            _ => Propagation::Continue,
        }
    }
}

/// Beam hook: passes through entities, hitting each, until an obstacle.
#[derive(Clone, Debug)]
pub struct ElementBeam {
    blast: Blast,
}

impl ElementBeam {
    pub fn new(blast: Blast) -> Self {
        Self { blast }
    }
}

impl BoltHook for ElementBeam {
    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
    ) -> Propagation {
        if !ctx.world.dungeon.is_passable(position) || !ctx.world.dungeon.is_transparent(position)
        {
            return Propagation::Halt;
        }
        ctx.add_effect(self.blast.effect(position, direction, EffectKind::Beam));
        if ctx
            .world
            .roster
            .entity_at(position)
            .is_some_and(|id| !self.blast.is_caster(id))
        {
            self.blast.strike(ctx, position, direction);
        }
        Propagation::Continue
    }
}

/// Cone hook: newly reached tiles hit, revisited tiles trail.
#[derive(Clone, Debug)]
pub struct ElementCone {
    blast: Blast,
}

impl ElementCone {
    pub fn new(blast: Blast) -> Self {
        Self { blast }
    }
}

impl ConeHook for ElementCone {
    fn on_tile(
        &mut self,
        ctx: &mut ActionContext<'_, '_>,
        position: Position,
        direction: Direction,
        leading_edge: bool,
    ) {
        if leading_edge {
            ctx.add_effect(self.blast.effect(position, direction, EffectKind::Cone));
            self.blast.strike(ctx, position, direction);
        } else {
            ctx.add_effect(self.blast.effect(position, direction, EffectKind::ConeTrail));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::state::GameState;

    fn fire(damage: u32) -> Blast {
        Blast::new(Some(EntityId::PLAYER), "the fireball", damage, Element::Fire)
    }

    fn health(state: &GameState, id: EntityId) -> u32 {
        state.entities.actor(id).expect("actor").health.current
    }

    fn count(effects: &[Effect], kind: EffectKind) -> usize {
        effects.iter().filter(|e| e.kind == kind).count()
    }

    #[test]
    fn ball_hits_ring_occupant_once() {
        let mut state = state_from(&[".....", ".....", "...g.", ".....", "@...."]);
        let mut action = fire(3).ball(at(2, 2), 1).expect("valid ball");
        let run = run(&mut state, &mut action, 10);

        let done: Vec<bool> = run.results.iter().map(|r| r.is_done()).collect();
        assert_eq!(done, vec![false, false, true]);
        assert_eq!(health(&state, EntityId(1)), 7);
        assert_eq!(health(&state, EntityId::PLAYER), 10);
        assert_eq!(count(&run.effects, EffectKind::Ball), 9);
        assert_eq!(count(&run.effects, EffectKind::BallTrail), 1);
        assert!(run.effects.iter().all(|e| e.element == Element::Fire));

        let entries = state.log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "The goblin is hit by the fireball.");
        assert_eq!(entries[0].kind, LogKind::Good);
    }

    #[test]
    fn bolt_stops_at_first_entity() {
        let mut state = state_from(&["@.g.g."]);
        let mut action = fire(2).bolt(at(0, 0), at(5, 0)).expect("valid bolt");
        let run = run(&mut state, &mut action, 10);

        assert_eq!(run.results.len(), 2);
        assert!(run.results[1].succeeded());
        assert_eq!(health(&state, EntityId(1)), 8);
        assert_eq!(health(&state, EntityId(2)), 10);
        assert_eq!(count(&run.effects, EffectKind::Bolt), 2);
    }

    #[test]
    fn bolt_halts_at_wall_without_effect() {
        let mut state = state_from(&["@.#g"]);
        let mut action = fire(2).bolt(at(0, 0), at(3, 0)).expect("valid bolt");
        let run = run(&mut state, &mut action, 10);

        let done: Vec<bool> = run.results.iter().map(|r| r.is_done()).collect();
        assert_eq!(done, vec![false, true]);
        assert_eq!(run.effects.len(), 1);
        assert_eq!(run.effects[0].position, at(1, 0));
        assert_eq!(health(&state, EntityId(1)), 10);
    }

    #[test]
    fn beam_passes_through_entities() {
        let mut state = state_from(&["@.g.g."]);
        let mut action = fire(2).beam(at(0, 0), at(1, 0), 10).expect("valid beam");
        let run = run(&mut state, &mut action, 20);

        assert_eq!(health(&state, EntityId(1)), 8);
        assert_eq!(health(&state, EntityId(2)), 8);
        assert_eq!(count(&run.effects, EffectKind::Beam), 5);
    }

    #[test]
    fn cone_hits_once_and_trails_afterwards() {
        let mut state = state_from(&["@.g....."]);
        let mut action = fire(4).cone(at(0, 0), at(7, 0), 3).expect("valid cone");
        let run = run(&mut state, &mut action, 10);

        assert_eq!(run.results.len(), 4);
        assert_eq!(health(&state, EntityId(1)), 6);
        assert_eq!(count(&run.effects, EffectKind::Cone), 3);
        assert_eq!(count(&run.effects, EffectKind::ConeTrail), 3);
    }

    #[test]
    fn killing_blow_is_narrated() {
        let mut state = state_from(&["@g"]);
        let mut action = fire(50).bolt(at(0, 0), at(1, 0)).expect("valid bolt");
        let _ = run(&mut state, &mut action, 10);
        assert_eq!(
            state.log.last().map(|e| e.text.as_str()),
            Some("The goblin is killed by the fireball.")
        );
    }
}
