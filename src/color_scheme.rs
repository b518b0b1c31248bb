//! Color scheme definitions for the dashboard.
//!
//! A scheme sets the egui visuals plus the few accent colours the charts use
//! for titles, axis labels and the value annotation.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Visual theme for the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// eframe's default dark look.
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Light => Visuals::light(),
        }
    }

    /// Apply the scheme to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    /// Colour of chart titles.
    pub fn title_color(&self) -> Color32 {
        match self {
            ColorScheme::Dark => Color32::from_rgb(110, 160, 255),
            ColorScheme::Light => Color32::BLUE,
        }
    }

    /// Colour of axis labels.
    pub fn axis_label_color(&self) -> Color32 {
        match self {
            ColorScheme::Dark => Color32::from_rgb(120, 200, 120),
            ColorScheme::Light => Color32::DARK_GREEN,
        }
    }

    /// Text colour of the latest-value annotation.
    pub fn annotation_color(&self) -> Color32 {
        match self {
            ColorScheme::Dark => Color32::LIGHT_YELLOW,
            ColorScheme::Light => Color32::BLUE,
        }
    }
}
