//! Collaborator surfaces consumed by actions.
//!
//! The action layer never owns the dungeon, the entities, or the message log.
//! It sees them through the traits here, bundled per processing call into a
//! [`World`].
mod map;
mod narration;
mod rng;
mod roster;

pub use map::{Dungeon, MapDimensions};
pub use narration::{LogKind, Narrator, Noun, Person};
pub use rng::{PcgRng, Rng};
pub use roster::Roster;

use crate::config::GameConfig;

/// Mutable view of every collaborator an action may touch.
pub struct World<'a> {
    pub dungeon: &'a mut dyn Dungeon,
    pub roster: &'a mut dyn Roster,
    pub log: &'a mut dyn Narrator,
    pub rng: &'a mut dyn Rng,
    pub config: &'a GameConfig,
}

impl<'a> World<'a> {
    pub fn new(
        dungeon: &'a mut dyn Dungeon,
        roster: &'a mut dyn Roster,
        log: &'a mut dyn Narrator,
        rng: &'a mut dyn Rng,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            dungeon,
            roster,
            log,
            rng,
            config,
        }
    }
}
