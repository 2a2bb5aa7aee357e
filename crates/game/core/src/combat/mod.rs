//! Combat resolution.
//!
//! Actions never subtract health themselves: they build a [`Hit`] and hand it
//! to the roster, which resolves it against the defender with
//! [`resolve_hit`].

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{Element, apply_damage};
pub use hit::{Attack, Hit};
pub use result::{HitOutcome, resolve_hit};
