//! Deterministic random source.
//!
//! All RNG implementations must be deterministic: given the same seed, they
//! produce the same sequence. Teleport destinations and other random choices
//! must replay identically.

/// Random source consumed by actions.
pub trait Rng {
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[min, max]` inclusive.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = (u64::from(self.next_u32()) % span) as i64;
        i32::try_from(i64::from(min) + offset).unwrap_or(max)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR: xorshift high, random rotate.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Rng for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn range_stays_inclusive() {
        let mut rng = PcgRng::new(7);
        for _ in 0..500 {
            let value = rng.range(-3, 3);
            assert!((-3..=3).contains(&value));
        }
        assert_eq!(rng.range(5, 5), 5);
    }

    #[test]
    fn full_width_range_does_not_overflow() {
        let mut rng = PcgRng::new(11);
        let values: Vec<i32> = (0..64).map(|_| rng.range(i32::MIN, i32::MAX)).collect();
        assert!(values.iter().any(|&v| v != values[0]));
        let near_top = rng.range(i32::MAX - 1, i32::MAX);
        assert!(near_top >= i32::MAX - 1);
    }
}
