//! Top-level entry point for running the dashboard as a native window.

use eframe::egui;
use tracing::{debug, info};

use crate::config::DashboardConfig;

use super::DashboardApp;

/// Launch the dashboard in a native window.
///
/// Builds a [`DashboardApp`] from `cfg`, opens a window sized and titled per
/// the config and enters the eframe event loop. Blocks until the window is
/// closed.
pub fn run_dashboard(cfg: DashboardConfig) -> eframe::Result<()> {
    let app = DashboardApp::new(&cfg);
    run_dashboard_with_app(cfg, app)
}

/// Like [`run_dashboard`], with a prebuilt app (for example one whose
/// command sink was handed to another thread).
pub fn run_dashboard_with_app(cfg: DashboardConfig, app: DashboardApp) -> eframe::Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(cfg.window.title.clone())
        .with_inner_size(egui::vec2(cfg.window.width, cfg.window.height))
        .with_resizable(true);
    match load_app_icon_svg() {
        Some(icon) => viewport = viewport.with_icon(icon),
        None => debug!("no application icon available"),
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    info!(title = %cfg.window.title, "opening dashboard window");
    eframe::run_native(
        &cfg.window.title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the SVG cannot be parsed or rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let data = include_bytes!("../../icon.svg");

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
