//! Simulated plant sensors.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of raw single-plant energy readings (µW).
pub trait EnergySource {
    fn sample(&mut self) -> f64;
}

/// Uniform random reading in `[baseline, spike]`.
pub struct UniformSensor {
    rng: StdRng,
    baseline: f64,
    spike: f64,
}

impl UniformSensor {
    /// Sensor seeded from the OS entropy source.
    pub fn new(baseline: f64, spike: f64) -> Self {
        Self::with_rng(StdRng::from_os_rng(), baseline, spike)
    }

    /// Sensor with a fixed seed, for reproducible runs.
    pub fn seeded(baseline: f64, spike: f64, seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), baseline, spike)
    }

    fn with_rng(rng: StdRng, baseline: f64, spike: f64) -> Self {
        Self {
            rng,
            baseline,
            spike,
        }
    }
}

impl EnergySource for UniformSensor {
    fn sample(&mut self) -> f64 {
        // An empty or inverted band degenerates to the baseline.
        if self.spike <= self.baseline {
            return self.baseline;
        }
        self.rng.random_range(self.baseline..=self.spike)
    }
}

/// Replays a fixed list of readings, then repeats `fallback` forever.
#[derive(Debug, Clone)]
pub struct ScriptedSensor {
    values: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedSensor {
    pub fn new<I: IntoIterator<Item = f64>>(values: I, fallback: f64) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback,
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(std::iter::empty(), value)
    }
}

impl EnergySource for ScriptedSensor {
    fn sample(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}
