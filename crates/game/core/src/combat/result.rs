//! Hit resolution against a defender's health.

use crate::state::ResourceMeter;

use super::{Hit, apply_damage};

/// What a hit did to its defender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    /// Damage actually removed from health.
    pub damage: u32,
    /// Whether the hit brought health to zero.
    pub killed: bool,
}

/// Applies `hit` to `health`.
pub fn resolve_hit(health: &mut ResourceMeter, hit: &Hit) -> HitOutcome {
    let damage = apply_damage(health, hit.damage);
    HitOutcome {
        damage,
        killed: health.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Element;

    #[test]
    fn lethal_hit_reports_kill() {
        let mut hp = ResourceMeter::new(4, 10);
        let outcome = resolve_hit(&mut hp, &Hit::environmental(9, Element::Fire));
        assert_eq!(outcome, HitOutcome { damage: 4, killed: true });
    }

    #[test]
    fn glancing_hit_leaves_defender_standing() {
        let mut hp = ResourceMeter::full(10);
        let outcome = resolve_hit(&mut hp, &Hit::environmental(3, Element::Anima));
        assert!(!outcome.killed);
        assert_eq!(hp.current, 7);
    }
}
