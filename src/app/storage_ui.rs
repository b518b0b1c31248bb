//! Battery gauge, flywheel animation and the energy flow chart text.

use eframe::egui;
use egui_phosphor::regular::{BATTERY_CHARGING, FAN};

use crate::color_scheme::ColorScheme;
use crate::data::battery::{wall_clock_rotation_deg, BatteryState};

/// Steps shown by the "Show Flow Chart" toggle.
pub const FLOW_CHART_STEPS: [&str; 5] = [
    "Plant Movement Detected by Sensors",
    "Energy Spike Generated (1.5 µW)",
    "Energy Decay to Baseline (0.5 µW)",
    "Energy Stored in Battery or Flywheel",
    "Energy Utilization for Dashboard Visualization",
];

pub(crate) fn battery_panel(ui: &mut egui::Ui, battery: &BatteryState, scheme: ColorScheme) {
    ui.heading(format!("{BATTERY_CHARGING} Storage"));
    ui.add(
        egui::ProgressBar::new((battery.percentage() / 100.0) as f32)
            .show_percentage()
            .desired_width(200.0),
    );
    ui.label(format!(
        "Battery: {:.2} / {:.0} µW",
        battery.level(),
        battery.capacity()
    ));
    ui.label(format!("{FAN} Flywheel: {:.0} RPM", battery.flywheel_speed()));

    let angle = if battery.flywheel_speed() > 0.0 {
        wall_clock_rotation_deg()
    } else {
        0.0
    };
    flywheel(ui, angle, scheme.title_color());
}

fn flywheel(ui: &mut egui::Ui, angle_deg: f64, color: egui::Color32) {
    let (response, painter) = ui.allocate_painter(egui::vec2(140.0, 140.0), egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;
    let stroke = egui::Stroke::new(3.0, color);

    painter.circle_stroke(center, radius, stroke);
    painter.circle_filled(center, radius * 0.12, color);
    let base = (angle_deg as f32).to_radians();
    for k in 0..4 {
        let a = base + k as f32 * std::f32::consts::FRAC_PI_2;
        let tip = center + egui::vec2(a.cos(), a.sin()) * radius;
        painter.line_segment([center, tip], stroke);
    }
}

pub(crate) fn flow_chart_panel(ui: &mut egui::Ui, shown: &mut bool) {
    let label = if *shown {
        "Hide Flow Chart"
    } else {
        "Show Flow Chart"
    };
    if ui.button(label).clicked() {
        *shown = !*shown;
    }
    if *shown {
        ui.strong("Energy Production Flow Chart:");
        for (i, step) in FLOW_CHART_STEPS.iter().enumerate() {
            ui.label(format!("{}. {}", i + 1, step));
        }
    }
}
