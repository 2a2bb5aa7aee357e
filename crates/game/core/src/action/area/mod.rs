//! Area-effect traversals.
//!
//! Each shape is a [`Traversal`](super::Traversal) parameterized by a hook
//! that decides what happens on each visited tile. Shapes only decide which
//! tiles are visited and in what order; wrap them with
//! [`Action::enumerate`](super::Action::enumerate) to get an action that
//! advances one radius (or one tile, for bolts) per `process` call.

mod ball;
mod bolt;
mod cone;

pub use ball::{Ball, BallCursor, BallHook};
pub use bolt::{Bolt, BoltCursor, BoltHook, Propagation};
pub use cone::{Cone, ConeCursor, ConeHook, ray_angles, ray_count};
