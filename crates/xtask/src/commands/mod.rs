//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod simulate;
mod trace;

pub use simulate::Simulate;
pub use trace::Trace;
