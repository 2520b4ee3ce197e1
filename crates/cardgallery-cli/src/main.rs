//! Card Gallery CLI
//!
//! Thin wrapper around cardgallery-core for terminal use.
//!
//! ## Usage
//!
//! ```bash
//! # List every card
//! cardgallery cards
//!
//! # Cards tagged both Leader and City
//! cardgallery cards --tag Leader --tag City
//!
//! # Cards tagged Leader or Supporter
//! cardgallery cards --tag Leader --tag Supporter --any
//!
//! # Show the tag taxonomy
//! cardgallery tags
//!
//! # Tag usage statistics
//! cardgallery stats --top 5
//!
//! # Where the board would put each card
//! cardgallery layout --width 1280 --height 800 --mode interactive --seed 7
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use cardgallery_core::analytics::DashboardSummary;
use cardgallery_core::chart::bar_fractions;
use cardgallery_core::layout::grid_columns;
use cardgallery_core::{
    catalog, Bounds, FilterMode, GalleryConfig, GalleryState, LayoutEngine, ViewMode,
};
use clap::{Parser, Subcommand, ValueEnum};

/// Card Gallery - character cards in the terminal
#[derive(Parser)]
#[command(name = "cardgallery")]
#[command(version = "0.1.0")]
#[command(about = "Card Gallery - browse character cards, tags and layouts")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cards, optionally filtered by tags
    Cards {
        /// Tag to filter by (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Match cards carrying any of the tags instead of all of them
        #[arg(long)]
        any: bool,
    },

    /// Show tag categories and their tags
    Tags,

    /// Tag usage statistics
    Stats {
        /// How many tags to rank (default from config)
        #[arg(long)]
        top: Option<usize>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the board placement of each card
    Layout {
        /// Board width in pixels
        #[arg(long)]
        width: f64,

        /// Board height in pixels
        #[arg(long)]
        height: f64,

        #[arg(long, value_enum, default_value_t = ModeArg::Grid)]
        mode: ModeArg,

        /// Seed for interactive placement
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Tag to filter by (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Grid,
    Interactive,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Grid => ViewMode::Grid,
            ModeArg::Interactive => ViewMode::Interactive,
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Load the built-in catalog into a fresh state with `tags` active.
async fn load_state(tags: &[String], mode: FilterMode) -> Result<GalleryState> {
    // No artificial latency in the terminal
    let (taxonomy, cards) = catalog::load_builtin(Duration::ZERO)
        .await
        .context("Failed to load card catalog")?;

    for tag in tags {
        if !taxonomy.contains_tag(tag) {
            tracing::warn!(tag = %tag, "Filtering by a tag no category declares");
        }
    }

    let mut state = GalleryState::new(taxonomy);
    state.load_cards(cards);
    state.set_filter_mode(mode);
    for tag in tags {
        if !state.filters().contains(tag) {
            state.toggle_filter(tag);
        }
    }
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = GalleryConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Cards { tags, any } => {
            let mode = if any { FilterMode::Any } else { FilterMode::All };
            let state = load_state(&tags, mode).await?;
            let shown = state.filtered_cards();

            if shown.is_empty() {
                println!("No cards match the active filters.");
                return Ok(());
            }

            println!("Cards ({} of {}):", shown.len(), state.cards().len());
            for card in shown {
                match card.alt_names_line() {
                    Some(alt) => println!("  {} {} ({})", card.id, card.name, alt),
                    None => println!("  {} {}", card.id, card.name),
                }
                println!("     {} · {}", card.universe, card.height);
                println!("     Tags: {}", card.feature_tags.join(", "));
            }
        }

        Commands::Tags => {
            let taxonomy = catalog::builtin_taxonomy();
            for category in taxonomy.categories() {
                println!("{} ({})", category.name, category.color);
                for tag in &category.tags {
                    println!("  - {}", tag);
                }
            }
        }

        Commands::Stats { top, json } => {
            let state = load_state(&[], FilterMode::All).await?;
            let top_n = top.unwrap_or(config.dashboard_top_n);
            let summary = DashboardSummary::compute(state.cards(), state.taxonomy(), top_n);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("Cards: {}", summary.card_total);
            println!();
            println!("Top {} tags:", top_n);
            for (rank, tc) in summary.top_tags.iter().enumerate() {
                println!("  {}. {} (used {} times)", rank + 1, tc.tag, tc.count);
            }

            println!();
            println!("Tag usage:");
            let label_width = summary
                .tag_usage
                .iter()
                .map(|t| t.tag.chars().count())
                .max()
                .unwrap_or(0);
            for bar in bar_fractions(&summary.tag_usage) {
                let blocks = "█".repeat((bar.fraction * 20.0).round() as usize);
                println!(
                    "  {:<width$} {} {}",
                    bar.label,
                    blocks,
                    bar.count,
                    width = label_width
                );
            }

            println!();
            println!("Categories:");
            for category in &summary.categories {
                if category.is_empty() {
                    println!("  {}: no data", category.name);
                    continue;
                }
                let parts: Vec<String> = category
                    .slices
                    .iter()
                    .map(|s| format!("{} {}", s.tag, s.count))
                    .collect();
                println!("  {}: {}", category.name, parts.join(", "));
            }
        }

        Commands::Layout {
            width,
            height,
            mode,
            seed,
            tags,
        } => {
            let state = load_state(&tags, FilterMode::All).await?;
            let view: ViewMode = mode.into();
            let bounds = Bounds::new(width, height);

            let mut engine = LayoutEngine::new(config.layout.clone(), seed);
            engine.resize(bounds);
            engine.set_mode(view, &state.filtered_ids());

            match view {
                ViewMode::Grid => println!(
                    "Layout: {}, {}x{}, {} columns",
                    view,
                    bounds.width,
                    bounds.height,
                    grid_columns(bounds.width, &config.layout)
                ),
                ViewMode::Interactive => println!(
                    "Layout: {}, {}x{}, seed {}",
                    view, bounds.width, bounds.height, seed
                ),
            }

            for (id, p) in engine.placements() {
                let name = state.card(id).map(|c| c.name.as_str()).unwrap_or("?");
                println!(
                    "  {:<4} x={:>7.1} y={:>7.1} rot={:>6.2}  {}",
                    id.to_string(),
                    p.x,
                    p.y,
                    p.rotation,
                    name
                );
            }
        }
    }

    Ok(())
}
