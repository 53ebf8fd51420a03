#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use inkstream_core::ServiceConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global service configuration, resolved once at startup
static SERVICE_CONFIG: OnceLock<ServiceConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inkstream")
    })
}

/// Get the remote service configuration
pub fn get_service_config() -> ServiceConfig {
    SERVICE_CONFIG.get().cloned().unwrap_or_default()
}

/// Inkstream - social blogging client
#[derive(Parser, Debug)]
#[command(name = "inkstream-desktop")]
#[command(about = "Inkstream - a social blogging client")]
struct Args {
    /// Data directory for local storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Remote service endpoint, overriding INKSTREAM_ENDPOINT
    #[arg(short, long)]
    endpoint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inkstream")
    });
    let _ = DATA_DIR.set(data_dir.clone());

    let config = match ServiceConfig::from_env() {
        Ok(config) => match args.endpoint {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => config,
        },
        Err(e) => {
            tracing::error!("invalid service configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(endpoint = %config.endpoint, data_dir = ?data_dir, "starting Inkstream");
    let _ = SERVICE_CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("Inkstream")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
