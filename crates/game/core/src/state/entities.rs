//! Vector-backed [`Roster`] implementation.

use crate::combat::{Hit, HitOutcome, resolve_hit};
use crate::env::{Noun, Roster};
use crate::geometry::Direction;
use crate::state::{Actor, Conditions, EntityId, Position};

/// Every actor in the level. Dead actors stay in the list but are invisible
/// to position lookups and id enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    actors: Vec<Actor>,
}

impl EntitiesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor, replacing any existing actor with the same id.
    pub fn insert(&mut self, actor: Actor) {
        match self.actors.iter_mut().find(|a| a.id == actor.id) {
            Some(existing) => *existing = actor,
            None => self.actors.push(actor),
        }
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    fn living(&self, id: EntityId) -> Option<&Actor> {
        self.actor(id).filter(|a| a.is_alive())
    }

    fn living_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actor_mut(id).filter(|a| a.is_alive())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }
}

impl Roster for EntitiesState {
    fn ids(&self) -> Vec<EntityId> {
        self.actors
            .iter()
            .filter(|a| a.is_alive())
            .map(|a| a.id)
            .collect()
    }

    fn contains(&self, id: EntityId) -> bool {
        self.living(id).is_some()
    }

    fn noun(&self, id: EntityId) -> Noun {
        if id.is_player() {
            return Noun::player(id);
        }
        match self.actor(id) {
            Some(actor) => Noun::entity(id, &actor.name),
            None => Noun::entity(id, "something"),
        }
    }

    fn position(&self, id: EntityId) -> Option<Position> {
        self.living(id).map(|a| a.position)
    }

    fn set_position(&mut self, id: EntityId, position: Position) -> bool {
        match self.living_mut(id) {
            Some(actor) => {
                actor.position = position;
                true
            }
            None => false,
        }
    }

    fn entity_at(&self, position: Position) -> Option<EntityId> {
        self.actors
            .iter()
            .find(|a| a.is_alive() && a.position == position)
            .map(|a| a.id)
    }

    fn melee_hit(&self, attacker: EntityId, direction: Direction) -> Option<Hit> {
        self.living(attacker)
            .map(|a| a.effective_attack().hit(Some(attacker), direction))
    }

    fn take_hit(&mut self, defender: EntityId, hit: &Hit) -> Option<HitOutcome> {
        self.living_mut(defender)
            .map(|a| resolve_hit(&mut a.health, hit))
    }

    fn conditions(&self, id: EntityId) -> Option<&Conditions> {
        self.living(id).map(|a| &a.conditions)
    }

    fn conditions_mut(&mut self, id: EntityId) -> Option<&mut Conditions> {
        self.living_mut(id).map(|a| &mut a.conditions)
    }

    fn spend_energy(&mut self, id: EntityId) -> bool {
        match self.living_mut(id) {
            Some(actor) => {
                actor.energy.spend();
                true
            }
            None => false,
        }
    }

    fn gain_energy(&mut self, id: EntityId) {
        if let Some(actor) = self.living_mut(id) {
            let speed = actor.speed();
            actor.energy.gain(speed);
        }
    }

    fn can_take_turn(&self, id: EntityId) -> bool {
        self.living(id).is_some_and(|a| a.energy.can_take_turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Element;

    fn roster() -> EntitiesState {
        let mut entities = EntitiesState::new();
        entities.insert(Actor::new(EntityId::PLAYER, "hero", Position::new(1, 1)));
        entities.insert(Actor::new(EntityId(1), "goblin", Position::new(2, 1)).with_health(3));
        entities
    }

    #[test]
    fn dead_actors_vanish_from_lookups() {
        let mut entities = roster();
        let outcome = entities
            .take_hit(EntityId(1), &Hit::environmental(5, Element::Fire))
            .unwrap();
        assert!(outcome.killed);
        assert_eq!(entities.entity_at(Position::new(2, 1)), None);
        assert_eq!(entities.ids(), vec![EntityId::PLAYER]);
        assert!(entities.take_hit(EntityId(1), &Hit::environmental(1, Element::Fire)).is_none());
    }

    #[test]
    fn player_noun_is_second_person() {
        let entities = roster();
        assert_eq!(entities.noun(EntityId::PLAYER).text(), "you");
        assert_eq!(entities.noun(EntityId(1)).text(), "the goblin");
    }

    #[test]
    fn melee_hit_carries_direction() {
        let entities = roster();
        let hit = entities.melee_hit(EntityId::PLAYER, Direction::East).unwrap();
        assert_eq!(hit.attacker, Some(EntityId::PLAYER));
        assert_eq!(hit.direction, Direction::East);
    }
}
