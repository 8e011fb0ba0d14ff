//! Pattern Gallery - interactive terminal gallery of design patterns
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use gallery_app::config::{self, Settings};
use gallery_core::{logging, PatternKind};
use pattern_gallery::{registry_listing, run_headless, HeadlessOptions};
use tracing::{info, warn};

/// Pattern Gallery - classic object-oriented design patterns, one scenario at a time
#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(about = "Interactive terminal gallery of design patterns", long_about = None)]
struct Args {
    /// Pattern to open (id like `factory-method` or label like "Factory Method")
    #[arg(long, value_name = "NAME")]
    pattern: Option<String>,

    /// Config file (default: <config dir>/pattern-gallery/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run scenarios and print NDJSON events instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Scenario id to run in headless mode (default: all)
    #[arg(long, value_name = "ID", requires_all = ["headless", "pattern"])]
    scenario: Option<String>,

    /// Also emit the good-vs-bad comparison in headless mode
    #[arg(long, requires = "headless")]
    compare: bool,

    /// Seed for the observer's random readings
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the pattern registry and exit
    #[arg(long, conflicts_with = "headless")]
    list: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    if args.list {
        print!("{}", registry_listing());
        return Ok(());
    }

    let mut settings = load_config(args.config.as_deref());
    if let Some(seed) = args.seed {
        settings.simulation.observer_seed = Some(seed);
    }

    if args.headless {
        let options = HeadlessOptions {
            pattern: args.pattern,
            scenario: args.scenario,
            compare: args.compare,
            seed: settings.simulation.observer_seed,
        };
        run_headless(&options)?;
        return Ok(());
    }

    let start = match args.pattern.as_deref() {
        Some(name) => Some(
            PatternKind::from_name(name)
                .ok_or_else(|| gallery_core::Error::unknown_pattern(name))?,
        ),
        None => None,
    };

    gallery_tui::run(settings, start).await?;
    Ok(())
}

/// Resolve and load settings; problems fall back to defaults
fn load_config(explicit: Option<&std::path::Path>) -> Settings {
    let path = match config::resolve_config_path(explicit) {
        Ok(Some(path)) => path,
        Ok(None) => {
            info!("No config directory on this platform, using defaults");
            return Settings::default();
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            eprintln!("{}, using defaults", e);
            return Settings::default();
        }
    };

    if explicit.is_none() {
        if let Err(e) = config::init_config(&path) {
            warn!("Could not write default config: {}", e);
        }
    }

    let settings = config::load_settings(&path);
    info!(
        "Loaded settings: start_pattern={}, transcript={}",
        settings.behavior.start_pattern, settings.behavior.transcript
    );
    settings
}
