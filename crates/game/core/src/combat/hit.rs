//! Attack templates and resolved hits.

use crate::geometry::Direction;
use crate::state::EntityId;

use super::Element;

/// How an entity (or a spell) attacks: the verb used in narration, the base
/// damage, and the element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    /// Verb template, e.g. `"hit[s]"` or `"bite[s]"`.
    pub verb: String,
    pub damage: u32,
    pub element: Element,
}

impl Attack {
    pub fn new(verb: impl Into<String>, damage: u32, element: Element) -> Self {
        Self {
            verb: verb.into(),
            damage,
            element,
        }
    }

    /// Builds the hit this attack deals from `attacker` travelling `direction`.
    pub fn hit(&self, attacker: Option<EntityId>, direction: Direction) -> Hit {
        Hit {
            attacker,
            verb: self.verb.clone(),
            damage: self.damage,
            element: self.element,
            direction,
        }
    }
}

impl Default for Attack {
    fn default() -> Self {
        Self::new("hit[s]", 1, Element::Anima)
    }
}

/// A single hit travelling toward a defender.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    /// Entity responsible for the hit, if any (traps and poison have none).
    pub attacker: Option<EntityId>,
    pub verb: String,
    pub damage: u32,
    pub element: Element,
    /// Direction the hit travels; used for knock-back and effect rendering.
    pub direction: Direction,
}

impl Hit {
    /// Attacker-less hit, e.g. poison ticking.
    pub fn environmental(damage: u32, element: Element) -> Self {
        Self {
            attacker: None,
            verb: "hurt[s]".to_string(),
            damage,
            element,
            direction: Direction::None,
        }
    }
}
