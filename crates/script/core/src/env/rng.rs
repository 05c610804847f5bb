//! Deterministic random number generation for script decisions.
//!
//! Scripts never own RNG state. Every random decision takes a seed carried
//! in the triggering context (cast or proc), so a replayed event sequence
//! reproduces the same rolls: the cosmetic-branch roll and the randomized
//! follow geometry included.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be pure functions of the seed: same seed, same
/// output, across calls and across processes.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll against a percent chance (0 never succeeds, 100 always does).
    fn roll_chance_percent(&self, seed: u64, percent: u32) -> bool {
        if percent == 0 {
            return false;
        }
        (self.next_u32(seed) % 100) < percent.min(100)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Generate a random f32 in range [min, max).
    ///
    /// Used for follow distance and orbit angle. Falls back to `min` for
    /// degenerate ranges.
    fn range_f32(&self, seed: u64, min: f32, max: f32) -> f32 {
        if !(min < max) {
            return min;
        }
        let unit = (self.next_u32(seed) as f32) / (u32::MAX as f32 + 1.0);
        min + unit * (max - min)
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Small state, fast, deterministic, and of good statistical quality.
/// The generator is stateless at the type level: the caller supplies the
/// seed, the oracle permutes it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the seed by one LCG step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, random rotate.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Derives an independent sub-seed from an event seed.
///
/// Use a different `context` for each independent roll inside one hook
/// (0: branch roll, 1: follow distance, 2: orbit angle, ...), so the rolls
/// do not correlate.
pub fn mix_seed(seed: u64, context: u32) -> u64 {
    let mut hash = seed ^ (u64::from(context)).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn chance_bounds() {
        let rng = PcgRng;
        for seed in 0..64 {
            assert!(!rng.roll_chance_percent(seed, 0));
            assert!(rng.roll_chance_percent(seed, 100));
        }
    }

    #[test]
    fn mixed_seeds_diverge() {
        assert_ne!(mix_seed(42, 0), mix_seed(42, 1));
        assert_eq!(mix_seed(42, 1), mix_seed(42, 1));
    }

    #[test]
    fn range_f32_stays_in_bounds() {
        let rng = PcgRng;
        for seed in 0..64 {
            let v = rng.range_f32(seed, 0.5, 3.0);
            assert!((0.5..3.0).contains(&v), "out of range: {v}");
        }
        assert_eq!(rng.range_f32(7, 2.0, 2.0), 2.0);
    }
}
