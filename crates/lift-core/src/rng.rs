//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! There is no global generator.  The composition root creates one `SimRng`
//! from `SimConfig::seed` and derives an independent child stream for every
//! capability that needs randomness (call generation, destination choice):
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.  The
//! same seed therefore always reproduces the same run, and tests can swap any
//! random capability for a fixed one without disturbing the others.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Floor, FloorRange};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG, owned by whichever capability draws from it.
///
/// Used only in single-threaded contexts; derive a [`child`](Self::child)
/// rather than sharing one generator between components.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A floor chosen uniformly from `range`.
    #[inline]
    pub fn floor_in(&mut self, range: &FloorRange) -> Floor {
        Floor(self.0.gen_range(range.lowest.0..=range.highest.0))
    }

    /// A floor chosen uniformly from `range`, excluding `except`.
    ///
    /// Draws from the `len - 1` remaining floors and skips over `except`, so
    /// it never loops.  `except` must lie inside `range`.
    pub fn floor_in_except(&mut self, range: &FloorRange, except: Floor) -> Floor {
        debug_assert!(range.contains(except), "excluded floor {except} outside {range}");
        let pick = self.0.gen_range(range.lowest.0..range.highest.0);
        if pick >= except.0 { Floor(pick + 1) } else { Floor(pick) }
    }
}
