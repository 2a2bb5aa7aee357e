//! Turn resolution core for a tile-based roguelike.
//!
//! `turn-core` defines the action protocol ([`Action`], [`ActionResult`]),
//! the suspend/resume adapter for multi-step actions ([`Enumerable`]), the
//! area-effect traversals (ball, bolt, cone) and the concrete actions built on
//! them. Actions see the game only through the collaborator traits in
//! [`env`]; [`state`] carries an in-memory implementation of each.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod state;

pub use action::{
    Action, ActionContext, ActionResult, AttackAction, Ball, BallHook, Blast, Bolt, BoltHook,
    CloseDoorAction, CompleteConditionAction, ConditionAction, Cone, ConeHook, Effect, EffectKind,
    Enumerable, Illuminate, OneShotAction, OpenDoorAction, Perform, Propagation, PushBackAction,
    ResultFlags, Stairs, TakeStairsAction, TeleportAction, Traversal, TraversalError, WalkAction,
};
pub use combat::{Attack, Element, Hit, HitOutcome};
pub use config::GameConfig;
pub use env::{Dungeon, LogKind, MapDimensions, Narrator, Noun, PcgRng, Rng, Roster, World};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Circle, Direction, Line};
pub use state::{
    Actor, Condition, ConditionKind, Conditions, EntitiesState, EntityId, GameState, LogEntry,
    MessageLog, Position, TileKind, TileMap,
};
