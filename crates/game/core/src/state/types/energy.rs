//! Energy accumulation for turn scheduling.

use crate::config::GameConfig;

/// Energy meter. An entity may act once it has at least
/// [`GameConfig::ACTION_COST`] energy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Energy {
    pub current: i32,
}

impl Energy {
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    pub fn can_take_turn(&self) -> bool {
        self.current >= GameConfig::ACTION_COST
    }

    /// Adds one step's worth of energy at `speed`.
    pub fn gain(&mut self, speed: i32) {
        self.current += GameConfig::energy_gain(speed);
    }

    /// Pays for one turn.
    pub fn spend(&mut self) {
        self.current -= GameConfig::ACTION_COST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_speed_acts_every_few_steps() {
        let mut energy = Energy::default();
        let mut steps = 0;
        while !energy.can_take_turn() {
            energy.gain(GameConfig::NORMAL_SPEED);
            steps += 1;
        }
        assert_eq!(steps, 4);
        energy.spend();
        assert!(!energy.can_take_turn());
    }

    #[test]
    fn faster_entities_gain_more() {
        let mut slow = Energy::default();
        let mut fast = Energy::default();
        slow.gain(GameConfig::NORMAL_SPEED - 2);
        fast.gain(GameConfig::NORMAL_SPEED + 2);
        assert!(fast.current > slow.current);
    }
}
