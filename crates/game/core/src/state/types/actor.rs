//! Actor records held by the in-memory roster.

use crate::combat::Attack;
use crate::config::GameConfig;
use crate::state::{EntityId, Position, ResourceMeter};

use super::energy::Energy;
use super::status::{ConditionKind, Conditions};

/// A living entity: the player or a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: EntityId,
    /// Name used in narration ("goblin" becomes "the goblin").
    pub name: String,
    pub position: Position,
    pub health: ResourceMeter,
    pub energy: Energy,
    /// Speed index before conditions.
    pub base_speed: i32,
    pub conditions: Conditions,
    pub attack: Attack,
}

impl Actor {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            health: ResourceMeter::full(10),
            energy: Energy::default(),
            base_speed: GameConfig::NORMAL_SPEED,
            conditions: Conditions::empty(),
            attack: Attack::default(),
        }
    }

    pub fn with_health(mut self, maximum: u32) -> Self {
        self.health = ResourceMeter::full(maximum);
        self
    }

    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_energy(mut self, energy: i32) -> Self {
        self.energy = Energy::new(energy);
        self
    }

    /// Effective speed after haste, slow and freeze.
    pub fn speed(&self) -> i32 {
        self.base_speed + self.conditions.magnitude(ConditionKind::Hasted)
            - self.conditions.magnitude(ConditionKind::Slowed)
            - self.conditions.magnitude(ConditionKind::Frozen)
    }

    /// Melee attack after disease.
    pub fn effective_attack(&self) -> Attack {
        let penalty = self.conditions.magnitude(ConditionKind::Diseased).max(0) as u32;
        let mut attack = self.attack.clone();
        attack.damage = attack.damage.saturating_sub(penalty).max(1);
        attack
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditions_shift_speed() {
        let mut actor = Actor::new(EntityId(1), "goblin", Position::ORIGIN);
        actor.conditions.apply(ConditionKind::Hasted, 3, 2);
        actor.conditions.apply(ConditionKind::Frozen, 3, 1);
        assert_eq!(actor.speed(), GameConfig::NORMAL_SPEED + 1);
    }

    #[test]
    fn disease_weakens_attack_but_never_to_zero() {
        let mut actor = Actor::new(EntityId(1), "rat", Position::ORIGIN)
            .with_attack(Attack::new("bite[s]", 2, crate::combat::Element::Anima));
        actor.conditions.apply(ConditionKind::Diseased, 5, 4);
        assert_eq!(actor.effective_attack().damage, 1);
    }
}
