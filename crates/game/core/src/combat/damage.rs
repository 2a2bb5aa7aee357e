//! Damage elements and health reduction.

use crate::state::ResourceMeter;

/// Element carried by a hit or an effect.
///
/// Rendering picks colours from the element; the roster may apply
/// resistances by element.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    /// Plain physical force.
    #[default]
    Anima,
    Air,
    Earth,
    Fire,
    Water,
    Metal,
    Wood,
    Acid,
    Cold,
    Lightning,
    Poison,
    Dark,
    Light,
}

/// Reduce HP by damage amount (clamped to 0). Returns the damage absorbed.
pub fn apply_damage(health: &mut ResourceMeter, damage: u32) -> u32 {
    health.drain(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_element_names() {
        assert_eq!("fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!("Lightning".parse::<Element>(), Ok(Element::Lightning));
        assert_eq!(Element::Cold.to_string(), "cold");
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut hp = ResourceMeter::new(3, 10);
        assert_eq!(apply_damage(&mut hp, 7), 3);
        assert_eq!(hp.current, 0);
    }
}
