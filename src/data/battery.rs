//! Battery level accumulator and the flywheel speed derived from it.

use chrono::{Local, Timelike};

use crate::config::BatteryConfig;

/// Stored energy, always within `[0, capacity]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryState {
    level: f64,
    capacity: f64,
    flywheel_max_rpm: f64,
}

impl BatteryState {
    pub fn new(cfg: &BatteryConfig) -> Self {
        let capacity = if cfg.capacity.is_finite() {
            cfg.capacity.max(0.0)
        } else {
            0.0
        };
        let level = if cfg.initial_fraction.is_finite() {
            (capacity * cfg.initial_fraction).clamp(0.0, capacity)
        } else {
            0.0
        };
        Self {
            level,
            capacity,
            flywheel_max_rpm: cfg.flywheel_max_rpm,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Add `delta` (may be negative) and clamp. Non-finite deltas are ignored.
    /// Returns the new level.
    pub fn accumulate(&mut self, delta: f64) -> f64 {
        if delta.is_finite() {
            self.level = (self.level + delta).clamp(0.0, self.capacity);
        }
        self.level
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0.0 && self.level >= self.capacity
    }

    /// Charge in percent; 0 for a zero-capacity battery.
    pub fn percentage(&self) -> f64 {
        if self.capacity > 0.0 {
            self.level / self.capacity * 100.0
        } else {
            0.0
        }
    }

    /// Flywheel speed in RPM, proportional to the level.
    pub fn flywheel_speed(&self) -> f64 {
        if self.capacity > 0.0 {
            self.level / self.capacity * self.flywheel_max_rpm
        } else {
            0.0
        }
    }
}

/// Decorative rotation angle in degrees for a time in seconds: the
/// fractional second mapped onto a full turn.
pub fn rotation_angle_deg(secs: f64) -> f64 {
    secs.rem_euclid(1.0) * 360.0
}

/// [`rotation_angle_deg`] for the current wall-clock time.
pub fn wall_clock_rotation_deg() -> f64 {
    let frac = f64::from(Local::now().nanosecond() % 1_000_000_000) / 1e9;
    rotation_angle_deg(frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_each_second() {
        assert_eq!(rotation_angle_deg(0.0), 0.0);
        assert!((rotation_angle_deg(0.25) - 90.0).abs() < 1e-9);
        assert!((rotation_angle_deg(12.5) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn zero_capacity_reports_empty() {
        let mut b = BatteryState::new(&BatteryConfig {
            capacity: 0.0,
            ..Default::default()
        });
        b.accumulate(5.0);
        assert_eq!(b.level(), 0.0);
        assert_eq!(b.percentage(), 0.0);
        assert_eq!(b.flywheel_speed(), 0.0);
        assert!(!b.is_full());
    }
}
