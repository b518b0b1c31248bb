//! Chart presentation: turns an entity's history into something drawable.
//!
//! The presenter knows nothing about egui; it produces a [`ChartView`]
//! (points, axis ranges, an optional annotation) which the UI hands to
//! `egui_plot` unchanged.

use crate::config::SimulationConfig;
use crate::data::entity::{EntityId, EntityState};

/// How the x axis upper bound is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XBounds {
    /// Always `[0, width]`.
    Fixed(f64),
    /// `[0, max(min_width, len(history))]`.
    GrowWithHistory(f64),
}

/// How the y axis upper bound is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YBounds {
    /// Always `[0, max]`.
    Fixed(f64),
    /// `[0, max(floor, headroom × plant_count × touch_energy)]`.
    ScaleWithPlantCount { floor: f64, headroom: f64 },
}

/// Static description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub trace_name: String,
    pub color: [u8; 3],
    pub x_bounds: XBounds,
    pub y_bounds: YBounds,
    /// Label the latest point when it rises above baseline.
    pub annotate: bool,
}

impl ChartSpec {
    pub fn for_entity(id: EntityId) -> Self {
        match id {
            EntityId::SinglePlant => Self {
                title: "Energy Production from 1 Plant (µW)".to_string(),
                trace_name: "Energy Production".to_string(),
                color: [220, 40, 40],
                x_bounds: XBounds::Fixed(60.0),
                y_bounds: YBounds::Fixed(2.0),
                annotate: true,
            },
            EntityId::HundredPlants => Self {
                title: "Energy Production from 100 Plants (µW)".to_string(),
                trace_name: "100 Plants Energy Production".to_string(),
                color: [148, 60, 200],
                x_bounds: XBounds::GrowWithHistory(60.0),
                y_bounds: YBounds::Fixed(200.0),
                annotate: false,
            },
            EntityId::Custom => Self {
                title: "Energy Production from Custom Plants (µW)".to_string(),
                trace_name: "Custom Plants Energy Production".to_string(),
                color: [255, 150, 20],
                x_bounds: XBounds::GrowWithHistory(60.0),
                y_bounds: YBounds::ScaleWithPlantCount {
                    floor: 200.0,
                    headroom: 1.2,
                },
                annotate: false,
            },
        }
    }

    pub fn x_range(&self, history_len: usize) -> (f64, f64) {
        match self.x_bounds {
            XBounds::Fixed(w) => (0.0, w),
            XBounds::GrowWithHistory(min) => (0.0, min.max(history_len as f64)),
        }
    }

    pub fn y_range(&self, plant_count: u32, sim: &SimulationConfig) -> (f64, f64) {
        match self.y_bounds {
            YBounds::Fixed(max) => (0.0, max),
            YBounds::ScaleWithPlantCount { floor, headroom } => {
                let max_energy = f64::from(plant_count) * sim.touch_energy();
                (0.0, floor.max(max_energy * headroom))
            }
        }
    }
}

/// Floating label attached to the most recent point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Draw above the point (otherwise below).
    pub above: bool,
}

/// Everything needed to draw one chart frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartView {
    pub points: Vec<[f64; 2]>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub annotation: Option<Annotation>,
}

/// Keeps the current view of one chart and rebuilds it on demand.
#[derive(Debug, Clone)]
pub struct ChartPresenter {
    spec: ChartSpec,
    view: ChartView,
}

impl ChartPresenter {
    pub fn new(spec: ChartSpec) -> Self {
        Self {
            spec,
            view: ChartView::default(),
        }
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn view(&self) -> &ChartView {
        &self.view
    }

    /// Replace the view with one built from the entity's current history.
    /// Any previous annotation is dropped first.
    pub fn redraw(&mut self, entity: &EntityState, sim: &SimulationConfig) -> &ChartView {
        let count = f64::from(entity.plant_count);
        let annotation = if self.spec.annotate {
            entity.history.latest().and_then(|last| {
                (last.value > sim.baseline_energy * count).then(|| Annotation {
                    x: last.tick as f64,
                    y: last.value,
                    text: format!("{:.2} µW", last.value),
                    above: last.value < sim.spike_energy * count,
                })
            })
        } else {
            None
        };
        self.view = ChartView {
            points: entity.history.points(),
            x_range: self.spec.x_range(entity.history.len()),
            y_range: self.spec.y_range(entity.plant_count, sim),
            annotation,
        };
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_plant_x_axis_stays_fixed() {
        let spec = ChartSpec::for_entity(EntityId::SinglePlant);
        assert_eq!(spec.x_range(0), (0.0, 60.0));
        assert_eq!(spec.x_range(60), (0.0, 60.0));
    }

    #[test]
    fn aggregate_x_axis_never_below_sixty() {
        let spec = ChartSpec::for_entity(EntityId::HundredPlants);
        assert_eq!(spec.x_range(10), (0.0, 60.0));
        assert_eq!(spec.x_range(75), (0.0, 75.0));
    }
}
