//! Grid geometry used by the area-effect traversals.
//!
//! Everything here is integer-exact except [`Direction::towards`], which rounds
//! an angle to the nearest octant.
mod circle;
mod direction;
mod line;

pub use circle::Circle;
pub use direction::Direction;
pub use line::Line;
