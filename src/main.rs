#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use cardgallery_core::{GalleryConfig, ViewMode};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Startup settings resolved from the command line and config file
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: GalleryConfig,
    /// Seed for board placement and card tilts
    pub seed: u64,
    pub initial_view: ViewMode,
}

/// Global settings, set once before launch
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the startup settings (defaults when launch did not set them)
pub fn get_settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_else(|| Settings {
        config: GalleryConfig::default(),
        seed: rand::random(),
        initial_view: ViewMode::Grid,
    })
}

/// Card Gallery - character cards on a desk
#[derive(Parser, Debug)]
#[command(name = "cardgallery-desktop")]
#[command(about = "Card Gallery - browse, filter and shuffle character cards")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the interactive board (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start on the interactive board instead of the grid
    #[arg(short, long)]
    interactive: bool,

    /// Override the simulated catalog load delay
    #[arg(long)]
    load_delay_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = GalleryConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(delay) = args.load_delay_ms {
        config.load_delay_ms = delay;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let initial_view = if args.interactive {
        ViewMode::Interactive
    } else {
        ViewMode::Grid
    };

    tracing::info!(
        seed,
        view = %initial_view,
        load_delay_ms = config.load_delay_ms,
        "Starting card gallery"
    );

    let window = config.window.clone();
    let _ = SETTINGS.set(Settings {
        config,
        seed,
        initial_view,
    });

    // Configure desktop window
    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&window.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window.width, window.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
