//! In-memory reference world.
//!
//! [`GameState`] owns a [`TileMap`], an [`EntitiesState`] and a
//! [`MessageLog`], each implementing one collaborator trait from
//! [`crate::env`]. Tests, tools and simple embedders use it directly; a real
//! game plugs its own collaborators into [`World`] instead.
mod entities;
mod log;
mod map;
pub mod types;

pub use entities::EntitiesState;
pub use log::{LogEntry, MessageLog};
pub use map::{AsciiMap, MapParseError, TileMap};
pub use types::{
    Actor, Condition, ConditionChange, ConditionKind, Conditions, Energy, EntityId, Position,
    ResourceMeter, Tile, TileKind,
};

use crate::config::GameConfig;
use crate::env::{PcgRng, World};

/// Owned bundle of the reference collaborators.
#[derive(Clone, Debug)]
pub struct GameState {
    pub map: TileMap,
    pub entities: EntitiesState,
    pub log: MessageLog,
    pub rng: PcgRng,
    pub config: GameConfig,
}

impl GameState {
    pub fn new(map: TileMap, entities: EntitiesState) -> Self {
        Self {
            map,
            entities,
            log: MessageLog::new(),
            rng: PcgRng::default(),
            config: GameConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = PcgRng::new(seed);
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Borrows every collaborator for one processing call.
    pub fn world(&mut self) -> World<'_> {
        World::new(
            &mut self.map,
            &mut self.entities,
            &mut self.log,
            &mut self.rng,
            &self.config,
        )
    }
}
