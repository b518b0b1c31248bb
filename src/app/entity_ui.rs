//! One dashboard row: the energy chart of a plant group and its plant card.

use eframe::egui;
use egui::{Align2, Color32, RichText};
use egui_phosphor::regular::{HAND_TAP, PLAY, STOP};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoint, Text};
use tracing::warn;

use crate::color_scheme::ColorScheme;
use crate::data::chart::{ChartSpec, ChartView};
use crate::data::entity::EntityState;
use crate::sink::CommandSink;

const PLOT_WIDTH: f32 = 560.0;
const PLOT_HEIGHT: f32 = 240.0;
const IMAGE_SIZE: f32 = 160.0;

/// Read-only inputs for drawing a row.
pub(crate) struct EntityRow<'a> {
    pub state: &'a EntityState,
    pub spec: &'a ChartSpec,
    pub view: &'a ChartView,
    pub texture: &'a egui::TextureHandle,
    pub scheme: ColorScheme,
    pub sink: &'a CommandSink,
}

/// Editable plant count field, only shown for the custom group.
pub(crate) struct PlantCountInput<'a> {
    pub text: &'a mut String,
    pub error: Option<&'a str>,
}

pub(crate) fn entity_row(ui: &mut egui::Ui, row: EntityRow<'_>, count_input: Option<PlantCountInput<'_>>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| energy_chart(ui, &row));
        ui.vertical(|ui| plant_card(ui, &row, count_input));
    });
}

fn energy_chart(ui: &mut egui::Ui, row: &EntityRow<'_>) {
    let spec = row.spec;
    let view = row.view;
    ui.label(
        RichText::new(&spec.title)
            .color(row.scheme.title_color())
            .strong(),
    );

    let [r, g, b] = spec.color;
    let color = Color32::from_rgb(r, g, b);
    let (x_min, x_max) = view.x_range;
    let (y_min, y_max) = view.y_range;
    let axis_color = row.scheme.axis_label_color();

    Plot::new(("energy_plot", row.state.id.index()))
        .width(PLOT_WIDTH)
        .height(PLOT_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label(RichText::new("Time (seconds)").color(axis_color))
        .y_axis_label(RichText::new("Energy (µW)").color(axis_color))
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_min..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);
            plot_ui.line(
                Line::new(spec.trace_name.as_str(), view.points.clone())
                    .color(color)
                    .width(2.0),
            );
            if let Some(a) = &view.annotation {
                let anchor = if a.above {
                    Align2::CENTER_BOTTOM
                } else {
                    Align2::CENTER_TOP
                };
                plot_ui.text(
                    Text::new(
                        "latest",
                        PlotPoint::new(a.x, a.y),
                        RichText::new(&a.text)
                            .size(11.0)
                            .color(row.scheme.annotation_color()),
                    )
                    .anchor(anchor),
                );
            }
        });
}

fn plant_card(ui: &mut egui::Ui, row: &EntityRow<'_>, count_input: Option<PlantCountInput<'_>>) {
    let state = row.state;
    let id = state.id;

    ui.add(egui::Image::new(row.texture).fit_to_exact_size(egui::vec2(IMAGE_SIZE, IMAGE_SIZE)));
    ui.strong(id.label());
    ui.label(format!("Per plant: {:.3} µW", state.current_energy));
    ui.label(format!("Total: {:.2} µW", state.aggregate_energy()));

    if ui.button(format!("{HAND_TAP} Touch {}", id.label())).clicked() {
        report(row.sink.touch(id));
    }
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.is_active, egui::Button::new(format!("{PLAY} Start")))
            .clicked()
        {
            report(row.sink.start(id));
        }
        if ui
            .add_enabled(state.is_active, egui::Button::new(format!("{STOP} Stop")))
            .clicked()
        {
            report(row.sink.stop(id));
        }
    });

    if let Some(input) = count_input {
        ui.horizontal(|ui| {
            ui.label("Number of plants:");
            let resp = ui.add(egui::TextEdit::singleline(&mut *input.text).desired_width(60.0));
            let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted || ui.button("Apply").clicked() {
                report(row.sink.set_plant_count(id, input.text.clone()));
            }
        });
        if let Some(err) = input.error {
            ui.colored_label(Color32::RED, err);
        }
    }
}

fn report<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(e) = result {
        warn!("failed to queue command: {e}");
    }
}
