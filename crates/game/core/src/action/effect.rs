//! Rendering-facing effect records.

use crate::combat::Element;
use crate::geometry::Direction;
use crate::state::Position;

/// Visual/audio event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    Hit,
    Stab,
    Slash,
    Arrow,
    Bolt,
    Beam,
    Ball,
    BallTrail,
    Cone,
    ConeTrail,
    Teleport,
    Light,
    Knockback,
}

/// One event for the renderer. Identity is its fields; many may share a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub position: Position,
    pub direction: Direction,
    pub kind: EffectKind,
    pub element: Element,
}

impl Effect {
    pub const fn new(
        position: Position,
        direction: Direction,
        kind: EffectKind,
        element: Element,
    ) -> Self {
        Self {
            position,
            direction,
            kind,
            element,
        }
    }

    /// Effect without direction or element (teleport flashes, light).
    pub const fn at(position: Position, kind: EffectKind) -> Self {
        Self::new(position, Direction::None, kind, Element::Anima)
    }
}
