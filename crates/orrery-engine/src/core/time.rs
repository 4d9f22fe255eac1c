/// Monotonic animation clock.
/// The first sampled host timestamp defines t = 0; every later sample reports
/// seconds since then. Samples that would run the clock backwards are ignored.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    /// Host timestamp (seconds) of the first sample.
    origin: Option<f64>,
    /// Seconds since `origin`, never decreasing.
    elapsed: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a host timestamp in seconds. Returns the elapsed time.
    pub fn sample(&mut self, now: f64) -> f32 {
        if !now.is_finite() {
            return self.elapsed as f32;
        }
        let origin = *self.origin.get_or_insert(now);
        let elapsed = now - origin;
        if elapsed > self.elapsed {
            self.elapsed = elapsed;
        }
        self.elapsed as f32
    }

    /// Elapsed seconds at the most recent sample.
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_zero() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.sample(1234.5), 0.0);
        assert!((clock.sample(1235.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reports_seconds_since_first_sample() {
        let mut clock = AnimationClock::new();
        clock.sample(10.0);
        assert!((clock.sample(16.5) - 6.5).abs() < 1e-6);
        assert!((clock.elapsed() - 6.5).abs() < 1e-6);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = AnimationClock::new();
        clock.sample(10.0);
        clock.sample(12.0);
        assert!((clock.sample(11.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn ignores_non_finite_samples() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.sample(f64::NAN), 0.0);
        // The NaN did not pin the origin.
        assert_eq!(clock.sample(1.0), 0.0);
        assert!((clock.sample(f64::INFINITY)).abs() < 1e-6);
    }
}
