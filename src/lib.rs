//! Mimosa Energy crate root: re-exports and module wiring.
//!
//! A live dashboard of simulated energy output from touch-sensitive plants.
//! The simulation core is independent of the UI and can be driven headless:
//! - `data`: sensor, sample history, plant groups, battery, chart presenter
//! - `scheduler`: one-shot tasks on a simulated millisecond clock
//! - `controller`: owns all state and applies commands and due tasks
//! - `sink`: commands and the channel that carries them
//! - `events`: subscribe to starts, touches, samples and battery events
//! - `config`: configuration and the demo constants
//! - `app`: the egui/eframe front-end

pub mod app;
pub mod assets;
pub mod color_scheme;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod events;
pub mod scheduler;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_dashboard, DashboardApp};
pub use color_scheme::ColorScheme;
pub use config::DashboardConfig;
pub use controller::{parse_plant_count, DashboardController};
pub use data::battery::BatteryState;
pub use data::chart::{Annotation, ChartPresenter, ChartSpec, ChartView};
pub use data::entity::{EntityId, EntityState};
pub use data::history::{EnergySample, SampleHistory};
pub use data::sensor::{EnergySource, ScriptedSensor, UniformSensor};
pub use error::{DashboardError, Result};
pub use events::{DashboardEvent, EventController, EventFilter, EventKind};
pub use scheduler::{Scheduler, Task};
pub use sink::{channel_commands, Command, CommandSink};
