//! egui/eframe front-end.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`dashboard_app`] | [`DashboardApp`] (eframe) wrapper: command draining, clock, panels |
//! | `entity_ui`       | One chart plus plant card per tracked group |
//! | `storage_ui`      | Battery gauge, spinning flywheel and flow chart text |
//! | [`run`]           | Top-level [`run_dashboard()`] entry point and icon loading |

pub mod dashboard_app;
mod entity_ui;
pub mod run;
mod storage_ui;

pub use dashboard_app::DashboardApp;
pub use run::run_dashboard;
pub use storage_ui::FLOW_CHART_STEPS;
