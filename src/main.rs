use anyhow::{anyhow, Result};
use eframe::egui;
use log::info;

use crate::api::HttpApi;
use crate::app::Controller;
use crate::config::Config;
use crate::gui::VotingApp;

mod api;
mod app;
mod config;
mod error;
mod gui;
mod models;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let api = HttpApi::new(config.api_base())?;
    let runtime = tokio::runtime::Runtime::new()?;
    let controller = Controller::new(api, config, runtime.handle().clone());
    info!("Connecting to {}", controller.config().api_base());

    let builder = egui::ViewportBuilder::default()
        .with_title("Smart Voting System")
        .with_inner_size(egui::vec2(960.0, 720.0));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    eframe::run_native(
        "Smart Voting System",
        options,
        Box::new(move |cc| Ok(Box::new(VotingApp::new(cc, controller, runtime)))),
    )
    .map_err(|e| anyhow!("UI terminated: {e}"))
}
