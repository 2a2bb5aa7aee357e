//! Plain data types shared by the reference world and the action layer.
mod actor;
mod common;
mod energy;
mod status;
mod tile;

pub use actor::Actor;
pub use common::{EntityId, Position, ResourceMeter};
pub use energy::Energy;
pub use status::{Condition, ConditionChange, ConditionKind, Conditions};
pub use tile::{Tile, TileKind};
