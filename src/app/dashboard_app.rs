//! Standalone dashboard application.
//!
//! [`DashboardApp`] owns the [`DashboardController`] and implements
//! [`eframe::App`]. Each frame it drains pending commands, advances the
//! simulated clock to wall-clock time and redraws every panel.

use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use eframe::egui;
use tracing::warn;

use crate::assets::PlantImages;
use crate::color_scheme::ColorScheme;
use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::data::entity::EntityId;
use crate::sink::{channel_commands, Command, CommandSink};

use super::entity_ui::{self, EntityRow, PlantCountInput};
use super::storage_ui;

pub struct DashboardApp {
    pub controller: DashboardController,
    commands: CommandSink,
    commands_rx: Receiver<Command>,
    started: Instant,

    images: Vec<PlantImages>,
    textures: HashMap<(EntityId, bool), egui::TextureHandle>,

    plant_count_input: String,
    input_error: Option<String>,
    show_flow_chart: bool,

    headline: String,
    color_scheme: ColorScheme,
    color_scheme_applied: bool,
}

impl DashboardApp {
    pub fn new(config: &DashboardConfig) -> Self {
        let (sink, rx) = channel_commands();
        Self::with_controller(config, DashboardController::new(config), sink, rx)
    }

    /// Build around an existing controller and command channel, e.g. when
    /// commands also arrive from outside the UI.
    pub fn with_controller(
        config: &DashboardConfig,
        controller: DashboardController,
        commands: CommandSink,
        commands_rx: Receiver<Command>,
    ) -> Self {
        let images = EntityId::ALL
            .iter()
            .map(|&id| {
                PlantImages::load_or_placeholder(
                    &config.assets.image_dir,
                    id,
                    config.assets.image_size,
                )
            })
            .collect();
        let plant_count_input = controller.entity(EntityId::Custom).plant_count.to_string();
        Self {
            controller,
            commands,
            commands_rx,
            started: Instant::now(),
            images,
            textures: HashMap::new(),
            plant_count_input,
            input_error: None,
            show_flow_chart: false,
            headline: config.window.headline.clone(),
            color_scheme: config.color_scheme,
            color_scheme_applied: false,
        }
    }

    /// Sender that feeds this app's command queue.
    pub fn command_sink(&self) -> CommandSink {
        self.commands.clone()
    }

    fn drain_commands(&mut self) {
        while let Ok(cmd) = self.commands_rx.try_recv() {
            let count_edit = matches!(cmd, Command::SetPlantCount { .. });
            let entity = cmd.entity();
            match self.controller.dispatch(cmd) {
                Ok(()) if count_edit => self.input_error = None,
                Ok(()) => {}
                Err(e) => {
                    warn!(?entity, "command rejected: {e}");
                    if count_edit {
                        self.plant_count_input = self
                            .controller
                            .entity(EntityId::Custom)
                            .plant_count
                            .to_string();
                        self.input_error = Some(e.to_string());
                    }
                }
            }
        }
    }

    fn texture(&mut self, ctx: &egui::Context, id: EntityId, open: bool) -> egui::TextureHandle {
        let images = &self.images;
        self.textures
            .entry((id, open))
            .or_insert_with(|| {
                let name = format!(
                    "plant_{}_{}",
                    id.asset_suffix(),
                    if open { "open" } else { "closed" }
                );
                ctx.load_texture(
                    name,
                    images[id.index()].get(open).clone(),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        self.drain_commands();
        let now_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.controller.catch_up_to(now_ms);

        egui::TopBottomPanel::top("mimosa_headline").show(ctx, |ui| {
            ui.heading(&self.headline);
        });

        egui::SidePanel::right("mimosa_storage")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                storage_ui::battery_panel(ui, self.controller.battery(), self.color_scheme);
                ui.separator();
                storage_ui::flow_chart_panel(ui, &mut self.show_flow_chart);
            });

        let textures: Vec<egui::TextureHandle> = EntityId::ALL
            .iter()
            .map(|&id| {
                let open = !self.controller.entity(id).touched;
                self.texture(ctx, id, open)
            })
            .collect();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (&id, texture) in EntityId::ALL.iter().zip(&textures) {
                    let count_input = if id.plant_count_editable() {
                        Some(PlantCountInput {
                            text: &mut self.plant_count_input,
                            error: self.input_error.as_deref(),
                        })
                    } else {
                        None
                    };
                    entity_ui::entity_row(
                        ui,
                        EntityRow {
                            state: self.controller.entity(id),
                            spec: self.controller.chart_spec(id),
                            view: self.controller.chart(id),
                            texture,
                            scheme: self.color_scheme,
                            sink: &self.commands,
                        },
                        count_input,
                    );
                    ui.separator();
                }
            });
        });

        // Keeps the clock moving and the flywheel spinning.
        ctx.request_repaint_after(Duration::from_millis(33));
    }
}
