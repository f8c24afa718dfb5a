//! Team Charter - single-page team charter editor
//!
//! Author a mission, prioritized focus areas, measures, decision rights and
//! roles, then lock the charter and share a link to it.

mod app;
mod core;
mod ui;

use app::TeamCharterApp;
use crate::core::config::AppConfig;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Config is read before logging is up, so failures are reported after init
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(config.level_filter())
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Using default config: {:#}", e);
    }

    tracing::info!("Starting Team Charter...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Team Charter"),
        ..Default::default()
    };

    eframe::run_native(
        "Team Charter",
        native_options,
        Box::new(|cc| Ok(Box::new(TeamCharterApp::new(cc, config)))),
    )
}
