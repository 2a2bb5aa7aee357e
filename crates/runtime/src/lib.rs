//! Turn loop for the action resolution core.
//!
//! [`TurnLoop`] owns the queue of pending actions and drives them one
//! `process` call per tick: it substitutes alternates without spending a
//! turn, charges energy on success, re-queues unfinished actions, and appends
//! follow-ups in the order they were added. [`TurnLoop::advance`] moves game
//! time forward (energy, condition upkeep) and polls an [`ActionProvider`]
//! for every entity that may act.
//!
//! Modules are organized by responsibility:
//! - [`turn_loop`] hosts the loop and its reports
//! - [`providers`] supplies entity intent
//! - [`narrator`] forwards narration to `tracing`
//! - [`config`] and [`error`] are the usual ambient pieces
pub mod config;
pub mod error;
pub mod narrator;
pub mod providers;
pub mod turn_loop;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use narrator::TracingNarrator;
pub use providers::{ActionProvider, ChaseProvider, RestProvider, ScriptedProvider};
pub use turn_loop::{DrainReport, TickReport, TurnLoop};
