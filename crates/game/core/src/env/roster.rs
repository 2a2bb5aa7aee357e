use crate::combat::{Hit, HitOutcome};
use crate::geometry::Direction;
use crate::state::{Conditions, EntityId, Position, TileKind};

use super::Noun;

/// Entity query and mutation surface.
///
/// Actions hold entity ids, never entities: an id whose entity has gone away
/// simply answers `None`/`false` here.
pub trait Roster {
    /// Ids of every living entity, in a stable order.
    fn ids(&self) -> Vec<EntityId>;

    fn contains(&self, id: EntityId) -> bool;

    /// Grammatical noun for narration.
    fn noun(&self, id: EntityId) -> Noun;

    fn position(&self, id: EntityId) -> Option<Position>;

    /// Moves an entity. Returns false if the entity does not exist.
    fn set_position(&mut self, id: EntityId, position: Position) -> bool;

    /// Living entity standing on `position`.
    fn entity_at(&self, position: Position) -> Option<EntityId>;

    /// Movement legality for `id` onto a tile of `kind`.
    fn can_enter(&self, _id: EntityId, kind: TileKind) -> bool {
        kind.is_passable()
    }

    /// Computes the melee hit `attacker` would deal travelling `direction`.
    fn melee_hit(&self, attacker: EntityId, direction: Direction) -> Option<Hit>;

    /// Applies `hit` to `defender`.
    fn take_hit(&mut self, defender: EntityId, hit: &Hit) -> Option<HitOutcome>;

    fn conditions(&self, id: EntityId) -> Option<&Conditions>;

    fn conditions_mut(&mut self, id: EntityId) -> Option<&mut Conditions>;

    /// Charges one turn of energy. Returns false if the entity does not exist.
    fn spend_energy(&mut self, id: EntityId) -> bool;

    /// Adds one game step of energy at the entity's current speed.
    fn gain_energy(&mut self, id: EntityId);

    fn can_take_turn(&self, id: EntityId) -> bool;
}
