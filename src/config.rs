//! Configuration types for the dashboard.
//!
//! Every field has a default matching the classic demo constants, so an empty
//! (or missing) config file yields the stock dashboard. Files are read as YAML
//! or JSON depending on the extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::error::{DashboardError, Result};

/// Resting output of an untouched plant, in µW.
pub const BASELINE_ENERGY: f64 = 0.5;
/// Upper bound of the ambient random reading, in µW.
pub const SPIKE_ENERGY: f64 = 1.5;
/// Period of the tick loop in milliseconds.
pub const UPDATE_INTERVAL_MS: u64 = 1000;
/// Energy one plant produces per touch (2 mV per 10 minutes).
pub const ENERGY_PER_PLANT: f64 = 2.0;
/// Window the per-touch energy is spread over, in seconds.
pub const TOUCH_WINDOW_SECS: f64 = 600.0;
/// Delay before a touched plant returns to baseline.
pub const TOUCH_DECAY_MS: u64 = 3000;
/// Number of samples kept per chart.
pub const HISTORY_CAPACITY: usize = 60;
/// Battery capacity in accumulated µW.
pub const MAX_BATTERY_CAPACITY: f64 = 100_000.0;
/// Share of the capacity the battery holds at startup.
pub const INITIAL_BATTERY_FRACTION: f64 = 0.1;
/// Flywheel speed at a full battery.
pub const FLYWHEEL_MAX_RPM: f64 = 6000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Simulation
// ─────────────────────────────────────────────────────────────────────────────

/// Energy model and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Resting output of one plant (µW).
    pub baseline_energy: f64,
    /// Upper bound of the random ambient reading (µW).
    pub spike_energy: f64,
    /// Tick period in milliseconds. Values below 1 are treated as 1.
    pub update_interval_ms: u64,
    /// Energy one plant yields per touch, spread over `touch_window_secs`.
    pub energy_per_plant: f64,
    pub touch_window_secs: f64,
    /// How long a touch holds before the plant returns to baseline.
    pub touch_decay_ms: u64,
    /// Samples kept per chart.
    pub history_capacity: usize,
    /// Initial plant count of the custom group.
    pub custom_plant_count: u32,
    /// Fixed RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            baseline_energy: BASELINE_ENERGY,
            spike_energy: SPIKE_ENERGY,
            update_interval_ms: UPDATE_INTERVAL_MS,
            energy_per_plant: ENERGY_PER_PLANT,
            touch_window_secs: TOUCH_WINDOW_SECS,
            touch_decay_ms: TOUCH_DECAY_MS,
            history_capacity: HISTORY_CAPACITY,
            custom_plant_count: 1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Energy held by a plant right after it is touched.
    pub fn touch_energy(&self) -> f64 {
        self.energy_per_plant / self.touch_window_secs
    }

    /// Tick period, never zero.
    pub fn interval_ms(&self) -> u64 {
        self.update_interval_ms.max(1)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Battery
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// Maximum stored energy. The level is clamped to `[0, capacity]`.
    pub capacity: f64,
    /// Flywheel speed at full charge.
    pub flywheel_max_rpm: f64,
    /// Starting level as a share of `capacity`, clamped to `[0, 1]`.
    pub initial_fraction: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_BATTERY_CAPACITY,
            flywheel_max_rpm: FLYWHEEL_MAX_RPM,
            initial_fraction: INITIAL_BATTERY_FRACTION,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window / assets
// ─────────────────────────────────────────────────────────────────────────────

/// Native window and headline text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub headline: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mimosa Energy".to_string(),
            headline: "Welcome to the MIMOSA Energy Dashboard".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Where plant images live and how large they are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `open_<kind>.png` / `close_<kind>.png`.
    pub image_dir: PathBuf,
    /// Edge length in pixels that images are resized to.
    pub image_size: u32,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("images"),
            image_size: 200,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DashboardConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `simulation`   | Energy constants, tick timing, RNG seed |
/// | `battery`      | Battery capacity and flywheel scale |
/// | `window`       | Native window title, size and headline |
/// | `assets`       | Plant image directory |
/// | `color_scheme` | Visual theme |
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub simulation: SimulationConfig,
    pub battery: BatteryConfig,
    pub window: WindowConfig,
    pub assets: AssetsConfig,
    pub color_scheme: ColorScheme,
}

impl DashboardConfig {
    /// Load a config file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match format {
            ConfigFormat::Yaml => Self::from_yaml_str(&text),
            ConfigFormat::Json => Self::from_json_str(&text),
        }
    }

    /// Write the config to `path`, choosing the format from its extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = match ConfigFormat::from_path(path)? {
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        std::fs::write(path, text).map_err(|source| DashboardError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(DashboardError::UnsupportedConfigFormat(path.to_path_buf())),
        }
    }
}
