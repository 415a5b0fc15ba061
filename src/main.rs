#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use std::sync::Arc;

use log::{error, info};

#[cfg(feature = "desktop")]
use dioxus::prelude::*;
#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::{
    domain::PredictionService,
    infra::model::{default_model_path, ForestModel, ModelLoadError},
    util::version::{version_label, APP_NAME},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    info!("Starting {APP_NAME} {}", version_label());

    // The service must not start without a usable model.
    let service = match load_prediction_service() {
        Ok(service) => Arc::new(service),
        Err(err) => {
            error!("Cannot load valuation model: {err}");
            std::process::exit(1);
        }
    };

    launch(service);
}

#[cfg(feature = "desktop")]
fn launch(service: Arc<PredictionService>) {
    let config = desktop! {
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(APP_NAME)
        )
    };

    LaunchBuilder::desktop()
        .with_context(service)
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn launch(_service: Arc<PredictionService>) {
    error!("{APP_NAME} was built without a renderer; enable the `desktop` feature");
    std::process::exit(1);
}

fn load_prediction_service() -> Result<PredictionService, ModelLoadError> {
    let path = default_model_path()?;
    let model = ForestModel::load(&path)?;
    Ok(PredictionService::new(model))
}
