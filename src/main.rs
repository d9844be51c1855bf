#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod pages;
mod theme;

use std::io::Write;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use nusantara_core::{render, LayoutMetrics, ScreenContent, ScreenState};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Args};

/// Global app configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Render the default screen once and print it as pretty JSON
fn dump_layout(config: &AppConfig) -> anyhow::Result<()> {
    let state = ScreenState {
        orientation: config.initial_orientation(),
        ..ScreenState::default()
    };
    let view = render(&state, &ScreenContent::default(), &LayoutMetrics::default());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &view)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::from(&args);

    if args.dump_layout {
        return dump_layout(&config);
    }

    // Store configuration globally
    let _ = APP_CONFIG.set(config.clone());

    tracing::info!(
        width = config.width,
        height = config.height,
        pinned = ?config.pinned_orientation,
        assets = %config.asset_root,
        "Starting Nusantara"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Nusantara")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                f64::from(config.width),
                f64::from(config.height),
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
