//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

use std::f32::consts::TAU;

/// Seedable pseudo-random number generator (xorshift64).
/// Scatter positions and orbital phases draw from this so a pinned seed
/// reproduces the same sky.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill an f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [-spread / 2, spread / 2).
    pub fn centered(&mut self, spread: f32) -> f32 {
        (self.next_f32() - 0.5) * spread
    }

    /// Uniform angle in [0, 2π).
    pub fn angle(&mut self) -> f32 {
        self.next_f32() * TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_f32(), rng2.next_f32());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        // Should not get stuck at zero
        let draws: Vec<f32> = (0..4).map(|_| rng.next_f32()).collect();
        assert!(draws.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let unit = rng.next_f32();
            assert!((0.0..1.0).contains(&unit), "unit draw {unit}");
            let c = rng.centered(400.0);
            assert!((-200.0..200.0).contains(&c), "centered draw {c}");
            let a = rng.angle();
            assert!((0.0..TAU).contains(&a), "angle draw {a}");
        }
    }
}
