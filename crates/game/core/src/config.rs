/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Random destinations a teleport tries before giving up.
    pub teleport_attempts: u32,
    /// Maximum distance (Chebyshev) a teleport may move its target.
    pub teleport_range: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_CONDITIONS: usize = 8;

    // ===== area-effect geometry =====
    /// Angular width of every cone, centered on the bearing to the target.
    pub const CONE_SPREAD_DEGREES: f64 = 45.0;
    /// Cone ray count is `ceil(2πr / CONE_RAY_DIVISOR)` for max radius `r`.
    pub const CONE_RAY_DIVISOR: f64 = 8.0;

    // ===== energy scheduling =====
    /// Energy an entity spends to take one turn.
    pub const ACTION_COST: i32 = 240;
    /// Index into [`Self::ENERGY_GAINS`] for an unmodified entity.
    pub const NORMAL_SPEED: i32 = 6;
    /// Energy gained per game step, indexed by speed.
    pub const ENERGY_GAINS: [i32; 13] = [15, 20, 24, 30, 40, 48, 60, 80, 96, 120, 160, 192, 240];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TELEPORT_ATTEMPTS: u32 = 100;
    pub const DEFAULT_TELEPORT_RANGE: u32 = 10;

    pub fn new() -> Self {
        Self {
            teleport_attempts: Self::DEFAULT_TELEPORT_ATTEMPTS,
            teleport_range: Self::DEFAULT_TELEPORT_RANGE,
        }
    }

    pub fn with_teleport(attempts: u32, range: u32) -> Self {
        Self {
            teleport_attempts: attempts,
            teleport_range: range,
        }
    }

    /// Energy gained per step at `speed`, clamped to the table.
    pub fn energy_gain(speed: i32) -> i32 {
        let index = speed.clamp(0, Self::ENERGY_GAINS.len() as i32 - 1) as usize;
        Self::ENERGY_GAINS[index]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
