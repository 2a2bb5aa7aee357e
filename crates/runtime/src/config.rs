//! Runtime configuration.
use std::env;

use turn_core::GameConfig;

/// Turn loop limits plus the game tunables it hands to actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Alternates one submitted action may chain through in a single tick.
    pub max_alternate_chain: usize,
    /// Ticks [`TurnLoop::drain`](crate::TurnLoop::drain) runs before giving up.
    pub max_ticks_per_drain: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_MAX_ALTERNATE_CHAIN: usize = 8;
    pub const DEFAULT_MAX_TICKS_PER_DRAIN: usize = 1024;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TURN_MAX_ALTERNATES` - alternate chain limit (default: 8, min 1)
    /// - `TURN_MAX_TICKS` - ticks per drain (default: 1024, min 1)
    /// - `TURN_TELEPORT_ATTEMPTS` - teleport destination attempts (default: 100)
    /// - `TURN_TELEPORT_RANGE` - teleport distance (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|value| value.trim().parse::<u64>().ok());
        let mut config = Self::default();

        if let Some(limit) = read("TURN_MAX_ALTERNATES") {
            config.max_alternate_chain = (limit as usize).max(1);
        }
        if let Some(ticks) = read("TURN_MAX_TICKS") {
            config.max_ticks_per_drain = (ticks as usize).max(1);
        }
        if let Some(attempts) = read("TURN_TELEPORT_ATTEMPTS") {
            config.game_config.teleport_attempts = attempts as u32;
        }
        if let Some(range) = read("TURN_TELEPORT_RANGE") {
            config.game_config.teleport_range = range as u32;
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            max_alternate_chain: Self::DEFAULT_MAX_ALTERNATE_CHAIN,
            max_ticks_per_drain: Self::DEFAULT_MAX_TICKS_PER_DRAIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_overrides_defaults() {
        let config = RuntimeConfig::from_lookup(|key| match key {
            "TURN_MAX_ALTERNATES" => Some("3".to_string()),
            "TURN_TELEPORT_RANGE" => Some(" 4 ".to_string()),
            _ => None,
        });
        assert_eq!(config.max_alternate_chain, 3);
        assert_eq!(config.game_config.teleport_range, 4);
        assert_eq!(config.max_ticks_per_drain, RuntimeConfig::DEFAULT_MAX_TICKS_PER_DRAIN);
    }

    #[test]
    fn garbage_and_zero_are_tolerated() {
        let config = RuntimeConfig::from_lookup(|key| match key {
            "TURN_MAX_ALTERNATES" => Some("0".to_string()),
            "TURN_MAX_TICKS" => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(config.max_alternate_chain, 1);
        assert_eq!(config.max_ticks_per_drain, RuntimeConfig::DEFAULT_MAX_TICKS_PER_DRAIN);
    }
}
